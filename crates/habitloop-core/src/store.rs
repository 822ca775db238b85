//! Flat-file JSON persistence for the habit document.
//!
//! The whole document lives in a single file, `habits.json` in the
//! working directory by default. Every save rewrites the file in full;
//! there is no journal and the previous version is not retained.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::StoreError;
use crate::model::Document;

/// Default document file name, resolved against the working directory.
pub const DEFAULT_FILE: &str = "habits.json";

/// Handle to the document file.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Store over `habits.json` in the working directory.
    pub fn new() -> Self {
        Self::at(DEFAULT_FILE)
    }

    /// Store over an arbitrary path. Tests point this at a temp dir.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, or an empty one when the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or does not
    /// parse as a habit document.
    pub fn load(&self) -> Result<Document, StoreError> {
        if !self.path.exists() {
            debug!("store: {} missing, starting empty", self.path.display());
            return Ok(Document::default());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            StoreError::ReadFailed {
                path: self.path.clone(),
                source,
            }
        })?;
        let mut doc: Document =
            serde_json::from_str(&content).map_err(|source| StoreError::ParseFailed {
                path: self.path.clone(),
                source,
            })?;
        doc.normalize();
        debug!(
            "store: loaded {} habit(s) from {}",
            doc.habits.len(),
            self.path.display()
        );
        Ok(doc)
    }

    /// Overwrite the document file.
    ///
    /// # Errors
    ///
    /// Returns an error when the document cannot be serialized or the file
    /// cannot be written.
    pub fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(doc)?;
        std::fs::write(&self.path, content).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        debug!(
            "store: saved {} habit(s) to {}",
            doc.habits.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Habit;
    use indoc::indoc;

    #[test]
    fn missing_file_loads_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::at(dir.path().join("habits.json"));
        let doc = store.load().unwrap();
        assert!(doc.habits.is_empty());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::at(dir.path().join("habits.json"));

        let mut doc = Document::default();
        let mut habit = Habit::default();
        habit.insert_date("2024-01-01".parse().unwrap());
        habit.insert_date("2024-01-02".parse().unwrap());
        doc.habits.insert("Read".into(), habit);

        store.save(&doc).unwrap();
        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, doc);
    }

    #[test]
    fn load_normalizes_hand_edited_dates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.json");
        let raw = indoc! {r#"
            {
              "habits": {
                "Read": {
                  "done_dates": ["2024-01-03", "2024-01-01", "2024-01-03"]
                }
              }
            }
        "#};
        std::fs::write(&path, raw).unwrap();

        let doc = Store::at(&path).load().unwrap();
        let dates = &doc.habits["Read"].done_dates;
        assert_eq!(dates.len(), 2);
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn load_rejects_malformed_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.json");
        std::fs::write(
            &path,
            r#"{"habits": {"Read": {"done_dates": ["not-a-date"]}}}"#,
        )
        .unwrap();

        let err = Store::at(&path).load().unwrap_err();
        assert!(matches!(err, StoreError::ParseFailed { .. }));
    }
}
