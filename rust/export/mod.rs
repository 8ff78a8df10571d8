//! Thin adapters from materialized events to the downstream surfaces.
//!
//! Every adapter consumes the record list produced by
//! [`materialize`](crate::scheduling::materialize()) and nothing else; swapping a
//! rendering or feed target means swapping an adapter, never touching the engine.

mod grid;
mod ics;
mod jobfeed;
mod list;

pub use crate::export::{
    grid::{grid_events, ExtendedProps, GridEvent},
    ics::{ics_entries, to_ics, IcsEntry},
    jobfeed::{jobfeed_rows, write_jobfeed_csv, JobFeedRow},
    list::{list_rows, ListRow},
};
