use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use opscal::errors::Error;
use opscal::export::{grid_events, ics_entries, jobfeed_rows, list_rows, to_ics, write_jobfeed_csv};
use opscal::json::JSON;
use opscal::scheduling::{
    materialize, materialize_year, CatalogStore, DateRoll, EventCatalog, ScheduleCal,
};

#[derive(Parser)]
#[command(name = "opscal", version, about = "Workday-offset business process calendar")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a month as a text grid together with its resolved events
    Grid {
        #[arg(long)]
        year: i32,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: u32,
        /// Calendar expression: logic jurisdictions, '|', display-only jurisdictions
        #[arg(long, default_value = "lux,bel|usa")]
        cals: String,
        /// Replace the built-in catalog from a CSV file
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Emit the grid-widget JSON event array instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the full-year schedule as a flat date-sorted list
    List {
        #[arg(long)]
        year: i32,
        #[arg(long, default_value = "lux,bel|usa")]
        cals: String,
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Export process events as an iCalendar stream
    Ics {
        #[arg(long)]
        year: i32,
        /// Restrict the export to a single month
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        #[arg(long, default_value = "lux,bel|usa")]
        cals: String,
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Export the twelve-month job-scheduler CSV feed
    Jobfeed {
        #[arg(long)]
        year: i32,
        #[arg(long, default_value = "lux,bel|usa")]
        cals: String,
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    match cli.command {
        Command::Grid {
            year,
            month,
            cals,
            catalog,
            json,
        } => {
            let cal = ScheduleCal::try_new(&cals)?;
            let catalog = active_catalog(&catalog)?;
            let events = materialize(&catalog, year, &[month], &cal);
            if json {
                println!("{}", grid_events(&events).to_json()?);
            } else {
                println!("{}", cal.print_month(year, month));
                for e in &events {
                    let mark = if e.is_overflow() { " !" } else { "" };
                    println!("{}  {}{}", e.date, e.title, mark);
                }
            }
        }
        Command::List {
            year,
            cals,
            catalog,
        } => {
            let cal = ScheduleCal::try_new(&cals)?;
            let catalog = active_catalog(&catalog)?;
            for row in list_rows(&materialize_year(&catalog, year, &cal)) {
                let mark = if row.overflow { " !" } else { "" };
                println!("{}  {}{}", row.date, row.event, mark);
            }
        }
        Command::Ics {
            year,
            month,
            cals,
            catalog,
            output,
        } => {
            let cal = ScheduleCal::try_new(&cals)?;
            let catalog = active_catalog(&catalog)?;
            let events = match month {
                Some(m) => materialize(&catalog, year, &[m], &cal),
                None => materialize_year(&catalog, year, &cal),
            };
            emit(output, to_ics(&ics_entries(&events)).as_bytes())?;
        }
        Command::Jobfeed {
            year,
            cals,
            catalog,
            output,
        } => {
            let cal = ScheduleCal::try_new(&cals)?;
            let catalog = active_catalog(&catalog)?;
            let rows = jobfeed_rows(&materialize_year(&catalog, year, &cal));
            match output {
                Some(path) => write_jobfeed_csv(&rows, File::create(path)?)?,
                None => write_jobfeed_csv(&rows, std::io::stdout())?,
            }
        }
    }
    Ok(())
}

// The built-in table unless a CSV replacement is supplied; skipped upload rows are
// reported but do not fail the command.
fn active_catalog(path: &Option<PathBuf>) -> Result<std::sync::Arc<EventCatalog>, Error> {
    let store = CatalogStore::default();
    if let Some(path) = path {
        let load = EventCatalog::load_csv(File::open(path)?)?;
        for row in &load.skipped {
            eprintln!("skipped catalog row at line {}: {}", row.line, row.reason);
        }
        store.reload(load.catalog);
    }
    Ok(store.snapshot())
}

fn emit(output: Option<PathBuf>, bytes: &[u8]) -> Result<(), Error> {
    match output {
        Some(path) => File::create(path)?.write_all(bytes)?,
        None => std::io::stdout().write_all(bytes)?,
    }
    Ok(())
}
