use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::errors::Error;
use crate::scheduling::{Category, MaterializedEvent};

/// One row of the job-scheduler feed: a (date, event, script) triple with the
/// workday-logic label the scheduler keys on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobFeedRow {
    /// `YYYYMMDD`.
    pub date: String,
    pub event: String,
    pub script: String,
    /// `WD{offset}`.
    pub logic: String,
}

/// Expand materialized process events into feed rows, one per attached script.
///
/// Definitions without scripts contribute no rows; holidays never do.
pub fn jobfeed_rows(events: &[MaterializedEvent]) -> Vec<JobFeedRow> {
    let mut rows: Vec<JobFeedRow> = Vec::new();
    for e in events.iter().filter(|e| e.category == Category::Process) {
        let logic = match e.offset {
            Some(offset) => format!("WD{}", offset),
            None => continue,
        };
        for script in &e.scripts {
            rows.push(JobFeedRow {
                date: e.date.format("%Y%m%d").to_string(),
                event: e.name.clone(),
                script: script.clone(),
                logic: logic.clone(),
            });
        }
    }
    rows
}

/// Write feed rows as CSV with a header row.
pub fn write_jobfeed_csv<W: Write>(rows: &[JobFeedRow], writer: W) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
