//! Error types for opscal.
//!
//! A single `thiserror`-derived enum covers the whole crate. Row-level
//! problems during a catalog load are deliberately *not* errors: they are
//! collected as [`SkippedRow`](crate::scheduling::SkippedRow) outcomes so a
//! partially usable upload still loads.

use thiserror::Error;

/// The top-level error type used throughout opscal.
#[derive(Debug, Error)]
pub enum Error {
    /// A jurisdiction code with no entry in the calendar registry.
    #[error("'{0}' is not found in the list of existing calendars.")]
    UnsupportedJurisdiction(String),

    /// A calendar expression that cannot be parsed.
    #[error("cannot parse calendar expression: {0}")]
    BadCalendarString(String),

    /// A catalog source whose header lacks a required column. The load is
    /// rejected wholesale and the previously active catalog stays in place.
    #[error("catalog source is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A registry name that cannot be used as a key.
    #[error("invalid calendar name: {0}")]
    BadCalendarName(String),

    /// CSV-level failure while reading or writing tabular data.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON serialization failure in an export adapter.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// I/O failure in an export or load adapter.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Shorthand `Result` type used throughout opscal.
pub type Result<T, E = Error> = std::result::Result<T, E>;
