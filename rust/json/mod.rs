//! Allows serialization and deserialization to JSON, with the ``serde`` crate.

use serde::{Deserialize, Serialize};
use serde_json;

/// Handles the `to` and `from` JSON conversion.
pub trait JSON: Serialize + for<'de> Deserialize<'de> {
    /// Return a JSON string representing the object.
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Create an object from a JSON string representation.
    fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl JSON for crate::scheduling::Cal {}
impl JSON for crate::scheduling::EventCatalog {}
impl JSON for crate::scheduling::MaterializedEvent {}
impl JSON for crate::export::GridEvent {}
impl<T: JSON> JSON for Vec<T> {}
