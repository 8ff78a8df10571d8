//! Resolve workday-offset events against jurisdiction [`Cal`]endars and materialize them.
//!
//! The purpose of this module is to turn an abstract recurring-process calendar, whose
//! events are defined as *"the Nth working day of the month"* rather than by fixed dates,
//! into concrete dated records, including;
//! - Holiday calendar union across multiple jurisdictions, with display-only
//!   jurisdictions that are shown but never alter resolution.
//! - Ordinal working-day resolution with exact skip semantics for weekends and holidays.
//! - Wholesale-replaceable event catalogs sourced from tabular uploads, with per-row
//!   load outcomes.
//! - Deterministic expansion over a month, a set of months, or a full year.
//!
//! # Calendars and Working Day Determination
//!
//! ## Calendars
//!
//! Three calendar types are provided: [`Cal`], [`UnionCal`] and [`ScheduleCal`]. A [`Cal`]
//! holds one jurisdiction's named holidays and weekend mask; a [`UnionCal`] combines the
//! jurisdictions whose holidays jointly block scheduling; a [`ScheduleCal`] is parsed from
//! a string expression and additionally carries the jurisdictions shown for information.
//! Common jurisdictions are implemented directly by name and fetched from a process-wide
//! registry with [`get_calendar_by_name`]; further ones can be installed at runtime with
//! [`register_calendar`].
//!
//! All calendars implement the [`DateRoll`] trait, which provides the working-day
//! predicate and ordinal resolution.
//!
//! ### Example
//! This example creates a calendar defining Saturday and Sunday weekends and a specific
//! holiday (Labour Day 2025, a Thursday), and resolves the first working days of May.
//! ```rust
//! # use opscal::scheduling::{Cal, DateRoll, nd};
//! let cal = Cal::new(vec![(nd(2025, 5, 1), "Labour Day".to_string())], vec![5, 6], "#FF5252");
//! assert_eq!(nd(2025, 5, 2), cal.nth_working_day(2025, 5, 1));
//! assert_eq!(nd(2025, 5, 5), cal.nth_working_day(2025, 5, 2));
//! ```
//!
//! # Catalogs and Materialization
//!
//! An [`EventCatalog`] is an ordered table of [`EventDefinition`]s holding an offset, a
//! name and attached job scripts. The built-in table covers the standard monthly process
//! cycle;
//! [`EventCatalog::load_csv`] replaces it wholesale from an external source. The active
//! catalog lives in a [`CatalogStore`] and is swapped atomically on reload.
//!
//! [`materialize()`] expands a catalog over a month window into ordered
//! [`MaterializedEvent`]s, process events first then each displayed jurisdiction's
//! holidays, ready for the export adapters in [`crate::export`].
//!
//! ### Example
//! ```rust
//! # use opscal::scheduling::{materialize, EventCatalog, ScheduleCal};
//! let cal = ScheduleCal::try_new("lux,bel|usa").unwrap();
//! let events = materialize(&EventCatalog::builtin(), 2026, &[1], &cal);
//! assert_eq!(events.len(), 14 + 4); // process events, then January's holidays
//! ```

mod calendars;
mod catalog;
mod materialize;

pub use crate::scheduling::{
    calendars::{
        calendar_names, get_calendar_by_name, holidays, nd, register_calendar, Cal, DateRoll,
        Jurisdiction, ScheduleCal, UnionCal,
    },
    catalog::{
        CatalogLoad, CatalogStore, EventCatalog, EventDefinition, SkipReason, SkippedRow,
    },
    materialize::{
        materialize, materialize_year, Category, MaterializedEvent, PROCESS_COLOR,
    },
};
