//! Store accessor: the sole gateway to the persisted document.
//!
//! # Responsibility
//! - Define the `DocumentStore` seam every read/write path goes through.
//! - Keep serialization details inside the persistence boundary.
//!
//! # Invariants
//! - `load` is fail-soft: absent or malformed storage yields the empty
//!   document, never an error to the caller.
//! - `save` is a full-document overwrite; no partial patches exist at this
//!   layer, callers read-modify-write.
//! - There is no locking; with a single logical thread the last writer
//!   wins.

use crate::model::document::Document;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while persisting the document.
///
/// Read failures never surface here; only `save` can fail.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "store write failed: {err}"),
            Self::Serialize(err) => write!(f, "document serialization failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Persistence seam for the single serialized document.
///
/// Implementations hold one named storage entry. Tests substitute
/// [`MemoryStore`]; production uses [`JsonFileStore`].
pub trait DocumentStore {
    /// Loads the whole document, defaulting to empty on any failure.
    fn load(&self) -> Document;

    /// Overwrites the whole stored document.
    fn save(&self, doc: &Document) -> StoreResult<()>;
}

impl<S: DocumentStore> DocumentStore for &S {
    fn load(&self) -> Document {
        (**self).load()
    }

    fn save(&self, doc: &Document) -> StoreResult<()> {
        (**self).save(doc)
    }
}

/// Parses stored text into a document, degrading to empty on malformed data.
///
/// Shared by every store implementation so corrupt-input behavior cannot
/// drift between the real medium and the test fake.
fn parse_document(raw: &str) -> Document {
    match serde_json::from_str(raw) {
        Ok(doc) => doc,
        Err(err) => {
            warn!("event=store_load module=store status=degraded error_code=malformed_document error={err}");
            Document::empty()
        }
    }
}
