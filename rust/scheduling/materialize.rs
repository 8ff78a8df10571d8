//! Expansion of an [`EventCatalog`] over a month window into dated records.

use chrono::prelude::*;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::scheduling::{DateRoll, EventCatalog, Jurisdiction, ScheduleCal};

/// The display color shared by all process events.
pub const PROCESS_COLOR: &str = "#1E88E5";

/// What kind of record a [`MaterializedEvent`] is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// A catalog-driven process event, placed on a resolved working day.
    Process,
    /// A jurisdiction holiday shown for information.
    Holiday,
}

impl Category {
    /// Stable string form, used by the export adapters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Process => "Process",
            Category::Holiday => "Holiday",
        }
    }
}

/// A concrete, dated, presentation-ready record.
///
/// Materialized events are derived values: they are recomputed on every request and
/// carry no identity across recomputations. `title` is the category-prefixed display
/// form; `name` is the raw event or holiday name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterializedEvent {
    pub date: NaiveDate,
    pub title: String,
    pub name: String,
    pub category: Category,
    pub jurisdiction: Option<Jurisdiction>,
    pub color: String,
    pub scripts: Vec<String>,
    /// The originating workday offset, for process events.
    pub offset: Option<u32>,
    /// The month the record was requested for.
    pub month: u32,
}

impl MaterializedEvent {
    /// Returns whether resolution walked past the requested month.
    ///
    /// This happens when the requested month holds fewer working days than the
    /// definition's offset. The record is still valid; exports mark it as an anomaly.
    pub fn is_overflow(&self) -> bool {
        self.date.month() != self.month
    }
}

/// Expand `catalog` over the requested `months` of `year` against `cal`.
///
/// The output preserves, in order: months ascending; within a month, process events in
/// catalog order, then holidays of every displayed jurisdiction in display order with
/// each jurisdiction's table order. Duplicate placements are kept: two definitions with
/// the same offset both appear, as do a process event and a holiday sharing a date.
pub fn materialize(
    catalog: &EventCatalog,
    year: i32,
    months: &[u32],
    cal: &ScheduleCal,
) -> Vec<MaterializedEvent> {
    let window: Vec<u32> = months.iter().copied().sorted().dedup().collect();
    let mut events: Vec<MaterializedEvent> = Vec::new();
    for m in window {
        for def in catalog.entries() {
            let date = cal.nth_working_day(year, m, def.offset);
            events.push(MaterializedEvent {
                date,
                title: format!("📅 {}", def.name),
                name: def.name.clone(),
                category: Category::Process,
                jurisdiction: None,
                color: PROCESS_COLOR.to_string(),
                scripts: def.scripts.clone(),
                offset: Some(def.offset),
                month: m,
            });
        }
        for (jurisdiction, jcal) in &cal.display {
            for (date, holiday_name) in jcal.holidays_in_month(year, m) {
                events.push(MaterializedEvent {
                    date: *date,
                    title: format!("🚩 {}: {}", jurisdiction.label(), holiday_name),
                    name: holiday_name.to_string(),
                    category: Category::Holiday,
                    jurisdiction: Some(*jurisdiction),
                    color: jcal.color().to_string(),
                    scripts: Vec::new(),
                    offset: None,
                    month: m,
                });
            }
        }
    }
    events
}

/// Expand `catalog` over all twelve months of `year`.
pub fn materialize_year(catalog: &EventCatalog, year: i32, cal: &ScheduleCal) -> Vec<MaterializedEvent> {
    let months: Vec<u32> = (1..=12).collect();
    materialize(catalog, year, &months, cal)
}
