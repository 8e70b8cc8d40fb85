//! In-memory store fake for tests and ephemeral sessions.
//!
//! # Responsibility
//! - Hold the serialized document text in memory, behind the same
//!   parse/serialize path as the file store.
//!
//! # Invariants
//! - `load` goes through the shared fail-soft parser, so corrupt-text
//!   fixtures behave exactly like a corrupt file.
//! - Not thread-safe; the data lifecycle is single-threaded by contract.

use super::{parse_document, DocumentStore, StoreResult};
use crate::model::document::Document;
use std::cell::RefCell;

/// Store over an in-memory serialized entry.
pub struct MemoryStore {
    entry: RefCell<Option<String>>,
}

impl MemoryStore {
    /// Creates an empty store (no entry yet, like a first run).
    pub fn new() -> Self {
        Self {
            entry: RefCell::new(None),
        }
    }

    /// Creates a store whose entry holds the given raw text.
    ///
    /// Used by tests to simulate documents written by other
    /// implementations, including malformed ones.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            entry: RefCell::new(Some(raw.into())),
        }
    }

    /// Creates a store pre-populated with the given document.
    pub fn with_document(doc: &Document) -> StoreResult<Self> {
        let store = Self::new();
        store.save(doc)?;
        Ok(store)
    }

    /// Returns the raw stored text, if any entry exists.
    pub fn raw(&self) -> Option<String> {
        self.entry.borrow().clone()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Document {
        match self.entry.borrow().as_deref() {
            Some(raw) => parse_document(raw),
            None => Document::empty(),
        }
    }

    fn save(&self, doc: &Document) -> StoreResult<()> {
        let serialized = serde_json::to_string(doc)?;
        *self.entry.borrow_mut() = Some(serialized);
        Ok(())
    }
}
