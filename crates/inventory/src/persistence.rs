//! JSON file persistence for [`Inventory`].
//!
//! The file is a single top-level object mapping item name to integer
//! quantity, with no schema version or wrapper. Loading is fail-soft: a
//! missing, unreadable or malformed file yields an empty inventory. Saving
//! overwrites the whole file and surfaces IO failures.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::quantity::Quantity;
use crate::store::Inventory;

/// File used when the caller has no other path in mind.
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to serialize inventory: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write inventory file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// How a [`Inventory::load`] call went. Every variant leaves the inventory in a
/// usable state; only `Loaded` carries data from the file.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file held an object. `dropped` counts entries that were skipped
    /// because their value was not a positive integer.
    Loaded { entries: usize, dropped: usize },
    /// No file at the path.
    Missing,
    /// The file exists but could not be read.
    Unreadable,
    /// The content was not JSON, or its top level was not an object.
    Corrupt,
}

impl Inventory {
    /// Build an inventory from the file at `path` (fail-soft, see [`Inventory::load`]).
    pub fn from_path(path: impl AsRef<Path>) -> (Self, LoadOutcome) {
        let mut inv = Self::new();
        let outcome = inv.load(path);
        (inv, outcome)
    }

    /// Replace the whole inventory with the contents of `path`.
    ///
    /// Never fails. Entries whose value is not a positive integer that fits
    /// in `i64` are dropped; any other problem resets the inventory to empty.
    pub fn load(&mut self, path: impl AsRef<Path>) -> LoadOutcome {
        let path = path.as_ref();

        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "inventory file not found; starting empty");
                self.stock.clear();
                return LoadOutcome::Missing;
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "inventory file unreadable; starting empty");
                self.stock.clear();
                return LoadOutcome::Unreadable;
            }
        };

        let object = match serde_json::from_str::<JsonValue>(&raw) {
            Ok(JsonValue::Object(object)) => object,
            Ok(_) => {
                tracing::warn!(path = %path.display(), "inventory file is not a JSON object; starting empty");
                self.stock.clear();
                return LoadOutcome::Corrupt;
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "inventory file is not valid JSON; starting empty");
                self.stock.clear();
                return LoadOutcome::Corrupt;
            }
        };

        let total = object.len();
        let stock: BTreeMap<String, Quantity> = object
            .into_iter()
            .filter_map(|(item, value)| {
                // Rejects floats, bools, out-of-range numbers and non-positive values.
                let qty = serde_json::from_value::<Quantity>(value).ok()?;
                Some((item, qty))
            })
            .collect();

        let entries = stock.len();
        let dropped = total - entries;
        if dropped > 0 {
            tracing::debug!(path = %path.display(), dropped, "skipped entries that are not positive integers");
        }

        self.stock = stock;
        LoadOutcome::Loaded { entries, dropped }
    }

    /// Write the inventory to `path` as indented JSON, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let mut body = serde_json::to_string_pretty(&self.stock)?;
        body.push('\n');

        std::fs::write(path, body).map_err(|source| PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), entries = self.len(), "inventory saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_writes_two_space_indented_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let mut inv = Inventory::new();
        inv.add("apple", 7, None).unwrap();
        inv.save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "{\n  \"apple\": 7\n}\n");
    }

    #[test]
    fn save_empty_inventory_writes_empty_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        Inventory::new().save(&path).unwrap();
        let value: JsonValue = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("inventory.json");

        let err = Inventory::new().save(&path).unwrap_err();
        assert!(matches!(err, PersistenceError::Write { .. }));
    }

    #[test]
    fn non_ascii_item_names_are_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let mut inv = Inventory::new();
        inv.add("café", 1, None).unwrap();
        inv.save(&path).unwrap();

        assert!(std::fs::read_to_string(&path).unwrap().contains("café"));
    }
}
