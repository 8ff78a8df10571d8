use serde::{Deserialize, Serialize};

use crate::scheduling::MaterializedEvent;

/// One entry of the interactive-grid event array.
///
/// Field names follow the grid widget's wire schema, hence the camelCase renames.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridEvent {
    pub title: String,
    /// ISO 8601 calendar date.
    pub start: String,
    pub color: String,
    #[serde(rename = "allDay")]
    pub all_day: bool,
    #[serde(rename = "extendedProps")]
    pub extended_props: ExtendedProps,
}

/// Auxiliary attributes carried on each grid entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtendedProps {
    #[serde(rename = "type")]
    pub category: String,
    pub month: u32,
}

/// Convert materialized events into the grid event array, order-preserving.
pub fn grid_events(events: &[MaterializedEvent]) -> Vec<GridEvent> {
    events
        .iter()
        .map(|e| GridEvent {
            title: e.title.clone(),
            start: e.date.to_string(),
            color: e.color.clone(),
            all_day: true,
            extended_props: ExtendedProps {
                category: e.category.as_str().to_string(),
                month: e.month,
            },
        })
        .collect()
}
