//! Record form controllers.
//!
//! # Responsibility
//! - Turn validated drafts into exactly one read-modify-write cycle per
//!   submission.
//! - Keep identifier and creation-timestamp assignment inside the create
//!   path.
//!
//! # Invariants
//! - Validation failures surface before any store access; a failed
//!   submission performs zero writes.
//! - A successful submission performs exactly one `load` and one `save`.

use crate::model::RecordId;

pub mod company_form;
pub mod contact_form;

/// Whether a submission creates a new record or rewrites an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// Assign a fresh id and creation timestamp, then append.
    Create,
    /// Replace the mutable fields of the record with this id.
    Update(RecordId),
}
