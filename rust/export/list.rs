use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scheduling::{Category, MaterializedEvent};

/// One row of the flat schedule list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListRow {
    pub date: NaiveDate,
    pub event: String,
    /// Set when resolution walked past the month the event was requested for.
    pub overflow: bool,
}

/// Flatten materialized events into date-sorted rows, process events only.
///
/// The sort is stable, so events sharing a date keep their catalog order.
pub fn list_rows(events: &[MaterializedEvent]) -> Vec<ListRow> {
    let mut rows: Vec<ListRow> = events
        .iter()
        .filter(|e| e.category == Category::Process)
        .map(|e| ListRow {
            date: e.date,
            event: e.title.clone(),
            overflow: e.is_overflow(),
        })
        .collect();
    rows.sort_by_key(|r| r.date);
    rows
}
