//! This is the documentation for opscal
//!
//! `opscal` resolves a recurring business-process calendar, whose events are defined as
//! *"the Nth working day of the month"*, against jurisdiction holiday calendars,
//! and materializes the schedule for display and export.

#[cfg(test)]
mod tests;

pub mod errors;

pub mod export;

pub mod json;

pub mod scheduling;
