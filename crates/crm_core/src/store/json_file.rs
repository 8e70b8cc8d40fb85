//! File-backed store: one JSON file as the named storage entry.
//!
//! # Responsibility
//! - Read and rewrite the whole document against a single file path.
//! - Emit `store_load` / `store_save` events with duration and status.
//!
//! # Invariants
//! - A missing file loads as the empty document (first-run behavior).
//! - Malformed file content loads as the empty document, logged at `warn`.
//! - `save` writes the full serialized document; the parent directory is
//!   created on demand so a fresh path works without setup.

use super::{parse_document, DocumentStore, StoreResult};
use crate::model::document::Document;
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Store over one JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store for the given file path.
    ///
    /// The path does not need to exist yet; the first `save` creates it.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> Document {
        let started_at = Instant::now();
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                // First run or unreadable medium: both degrade to empty.
                debug!(
                    "event=store_load module=store status=empty path={} reason={err}",
                    self.path.display()
                );
                return Document::empty();
            }
        };

        let doc = parse_document(&raw);
        info!(
            "event=store_load module=store status=ok path={} companies={} contacts={} duration_ms={}",
            self.path.display(),
            doc.companies.len(),
            doc.contacts.len(),
            started_at.elapsed().as_millis()
        );
        doc
    }

    fn save(&self, doc: &Document) -> StoreResult<()> {
        let started_at = Instant::now();
        let serialized = serde_json::to_string(doc)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        match std::fs::write(&self.path, serialized) {
            Ok(()) => {
                info!(
                    "event=store_save module=store status=ok path={} companies={} contacts={} duration_ms={}",
                    self.path.display(),
                    doc.companies.len(),
                    doc.contacts.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error path={} error_code=store_write_failed error={err}",
                    self.path.display()
                );
                Err(err.into())
            }
        }
    }
}
