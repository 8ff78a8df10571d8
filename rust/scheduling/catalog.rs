//! The event catalog: ordered workday-offset event definitions.
//!
//! A catalog is either the built-in table or loaded wholesale from an external
//! tabular source. Loading never merges: the replacement is all-or-nothing at
//! the catalog level, while individual malformed rows are skipped with a
//! recorded [`SkipReason`] so a partially usable upload still loads.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;
use std::sync::{Arc, RwLock};

use crate::errors::Error;

/// A named event scheduled on the `offset`-th working day of each month.
///
/// Offsets need not be unique across definitions and gaps between them carry no meaning.
/// `scripts` lists the job-script identifiers attached to the event for the job feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventDefinition {
    pub offset: u32,
    pub name: String,
    #[serde(default)]
    pub scripts: Vec<String>,
}

impl EventDefinition {
    /// Create a definition without scripts.
    pub fn new(offset: u32, name: &str) -> Self {
        EventDefinition {
            offset,
            name: name.to_string(),
            scripts: Vec::new(),
        }
    }
}

/// An ordered collection of [`EventDefinition`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventCatalog {
    entries: Vec<EventDefinition>,
}

impl EventCatalog {
    /// Create a catalog from definitions, preserving their order.
    pub fn new(entries: Vec<EventDefinition>) -> Self {
        EventCatalog { entries }
    }

    /// The built-in monthly process table.
    pub fn builtin() -> Self {
        EventCatalog::new(vec![
            EventDefinition::new(3, "Alignment 1"),
            EventDefinition::new(4, "Finance close"),
            EventDefinition::new(5, "Pre S&OP"),
            EventDefinition::new(6, "Product review"),
            EventDefinition::new(7, "Local touchpoint"),
            EventDefinition::new(9, "ML"),
            EventDefinition::new(10, "SBU"),
            EventDefinition::new(12, "Debrief"),
            EventDefinition::new(14, "HUB"),
            EventDefinition::new(15, "Supply signoff"),
            EventDefinition::new(16, "DSO"),
            EventDefinition::new(17, "MOR"),
            EventDefinition::new(19, "ISO"),
            EventDefinition::new(20, "PBU MOR"),
        ])
    }

    /// The definitions in catalog order.
    pub fn entries(&self) -> &[EventDefinition] {
        &self.entries
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the catalog holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a catalog from a CSV source.
    ///
    /// The header must contain an `offset` column (alias `wd`) and a `name` column (alias
    /// `event`); a `scripts` column (alias `script`, semicolon-delimited) is optional. A header
    /// missing a required column rejects the load wholesale. Rows with an empty name, or an
    /// offset that is empty, not an integer, or not positive, are skipped with a recorded
    /// reason and do not fail the load.
    pub fn load_csv<R: Read>(reader: R) -> Result<CatalogLoad, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let find = |aliases: &[&str]| {
            headers
                .iter()
                .position(|h| aliases.contains(&h.to_lowercase().as_str()))
        };
        let offset_idx = find(&["offset", "wd"]).ok_or(Error::MissingColumn("offset"))?;
        let name_idx = find(&["name", "event"]).ok_or(Error::MissingColumn("name"))?;
        let scripts_idx = find(&["scripts", "script"]);

        let mut entries: Vec<EventDefinition> = Vec::new();
        let mut skipped: Vec<SkippedRow> = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let mut skip = |reason: SkipReason| skipped.push(SkippedRow { line, reason });

            let raw_offset = record.get(offset_idx).unwrap_or("");
            if raw_offset.is_empty() {
                skip(SkipReason::EmptyOffset);
                continue;
            }
            let offset = match raw_offset.parse::<i64>() {
                Ok(v) if v > 0 => v as u32,
                Ok(v) => {
                    skip(SkipReason::OffsetNotPositive(v));
                    continue;
                }
                Err(_) => {
                    skip(SkipReason::OffsetNotInteger(raw_offset.to_string()));
                    continue;
                }
            };

            let name = record.get(name_idx).unwrap_or("");
            if name.is_empty() {
                skip(SkipReason::EmptyName);
                continue;
            }

            let scripts: Vec<String> = match scripts_idx.and_then(|i| record.get(i)) {
                Some(field) => field
                    .split(';')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect(),
                None => Vec::new(),
            };

            entries.push(EventDefinition {
                offset,
                name: name.to_string(),
                scripts,
            });
        }

        Ok(CatalogLoad {
            catalog: EventCatalog::new(entries),
            skipped,
        })
    }
}

/// The outcome of a catalog load: the catalog plus the rows that did not make it in.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogLoad {
    pub catalog: EventCatalog,
    pub skipped: Vec<SkippedRow>,
}

/// A row dropped during a catalog load, with its source line and the reason.
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: SkipReason,
}

/// Why a catalog row was dropped.
#[derive(Clone, Debug, PartialEq)]
pub enum SkipReason {
    /// The required name field was empty.
    EmptyName,
    /// The required offset field was empty.
    EmptyOffset,
    /// The offset field did not parse as an integer.
    OffsetNotInteger(String),
    /// The offset parsed but was zero or negative.
    OffsetNotPositive(i64),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EmptyName => write!(f, "name is empty"),
            SkipReason::EmptyOffset => write!(f, "offset is empty"),
            SkipReason::OffsetNotInteger(raw) => write!(f, "offset '{}' is not an integer", raw),
            SkipReason::OffsetNotPositive(v) => write!(f, "offset {} is not positive", v),
        }
    }
}

/// Holds the active catalog behind an atomic swap.
///
/// Readers take a [`snapshot`](CatalogStore::snapshot) and keep working against it;
/// [`reload`](CatalogStore::reload) replaces the whole reference so a concurrent reader
/// observes either the old or the new catalog in full, never a mixture.
#[derive(Debug)]
pub struct CatalogStore {
    active: RwLock<Arc<EventCatalog>>,
}

impl CatalogStore {
    /// Create a store with an initial active catalog.
    pub fn new(catalog: EventCatalog) -> Self {
        CatalogStore {
            active: RwLock::new(Arc::new(catalog)),
        }
    }

    /// A handle to the currently active catalog.
    pub fn snapshot(&self) -> Arc<EventCatalog> {
        self.active.read().unwrap().clone()
    }

    /// Replace the active catalog wholesale, returning the one it displaced.
    pub fn reload(&self, catalog: EventCatalog) -> Arc<EventCatalog> {
        let mut w = self.active.write().unwrap();
        std::mem::replace(&mut *w, Arc::new(catalog))
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        CatalogStore::new(EventCatalog::builtin())
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = EventCatalog::builtin();
        assert_eq!(catalog.len(), 14);
        assert!(catalog.entries().iter().all(|d| (3..=20).contains(&d.offset)));
        assert_eq!(catalog.entries()[0].name, "Alignment 1");
        assert_eq!(catalog.entries()[13].name, "PBU MOR");
    }

    #[test]
    fn test_load_csv() {
        let data = "\
offset,name,scripts
3,Alignment 1,
9,ML,refresh_ml;publish_ml
10,SBU,load_sbu
";
        let load = EventCatalog::load_csv(data.as_bytes()).unwrap();
        assert!(load.skipped.is_empty());
        assert_eq!(load.catalog.len(), 3);
        assert_eq!(
            load.catalog.entries()[1].scripts,
            vec!["refresh_ml".to_string(), "publish_ml".to_string()]
        );
        assert!(load.catalog.entries()[0].scripts.is_empty());
    }

    #[test]
    fn test_load_csv_original_column_names() {
        let data = "WD,Event\n5,Pre S&OP\n";
        let load = EventCatalog::load_csv(data.as_bytes()).unwrap();
        assert_eq!(load.catalog.entries()[0], EventDefinition::new(5, "Pre S&OP"));
    }

    #[test]
    fn test_load_csv_skips_bad_rows() {
        let data = "\
offset,name
3,Alignment 1
4,
x,Broken offset
0,Zero offset
,Empty offset
7,Local touchpoint
";
        let load = EventCatalog::load_csv(data.as_bytes()).unwrap();
        assert_eq!(load.catalog.len(), 2);
        assert_eq!(load.catalog.entries()[1].name, "Local touchpoint");
        assert_eq!(load.skipped.len(), 4);
        assert_eq!(load.skipped[0].reason, SkipReason::EmptyName);
        assert_eq!(load.skipped[0].line, 3);
        assert_eq!(
            load.skipped[1].reason,
            SkipReason::OffsetNotInteger("x".to_string())
        );
        assert_eq!(load.skipped[2].reason, SkipReason::OffsetNotPositive(0));
        assert_eq!(load.skipped[3].reason, SkipReason::EmptyOffset);
    }

    #[test]
    fn test_load_csv_missing_required_column() {
        let data = "offset,scripts\n3,run_me\n";
        match EventCatalog::load_csv(data.as_bytes()) {
            Err(Error::MissingColumn(col)) => assert_eq!(col, "name"),
            _ => assert!(false),
        }
    }

    #[test]
    fn test_store_snapshot_survives_reload() {
        let store = CatalogStore::default();
        let before = store.snapshot();
        let displaced = store.reload(EventCatalog::new(vec![EventDefinition::new(1, "Only")]));
        let after = store.snapshot();

        assert_eq!(before.len(), 14); // old handle still reads the old catalog
        assert_eq!(after.len(), 1);
        assert!(Arc::ptr_eq(&before, &displaced));
    }
}
