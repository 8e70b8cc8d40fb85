//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record persisted in the document.
//! - Validate required fields before any write path accepts a draft.
//!
//! # Invariants
//! - `id` and `created_at` are assigned once and never mutated afterwards.
//! - `owner_id` references a company; the storage layer does not enforce
//!   the reference, write paths and the cascading delete do.

use crate::model::{new_record_id, now_timestamp, RecordId};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Canonical contact record, owned by exactly one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Stable opaque id.
    pub id: RecordId,
    /// Owning company id. Serialized as `ownerId`.
    pub owner_id: RecordId,
    /// Display name. Required, non-empty.
    pub name: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
    /// RFC 3339 creation instant, set once.
    pub created_at: String,
}

/// Field-level validation failure for contact drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    /// `name` is empty or whitespace-only.
    NameRequired,
    /// `owner_id` is empty; every contact must name its company.
    CompanyRequired,
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameRequired => write!(f, "contact name is required"),
            Self::CompanyRequired => write!(f, "owning company is required"),
        }
    }
}

impl Error for ContactValidationError {}

/// Mutable field set mirrored into a form before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub owner_id: RecordId,
    pub name: String,
    pub position: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

impl ContactDraft {
    /// Checks required fields without touching storage.
    ///
    /// Owner *existence* is a separate write-time check; this only rejects
    /// the structurally-empty reference.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        if self.name.trim().is_empty() {
            return Err(ContactValidationError::NameRequired);
        }
        if self.owner_id.trim().is_empty() {
            return Err(ContactValidationError::CompanyRequired);
        }
        Ok(())
    }
}

impl Contact {
    /// Materializes a new contact from a validated draft.
    ///
    /// # Invariants
    /// - Assigns a fresh id and the current creation timestamp.
    /// - Does not validate; callers must run `ContactDraft::validate` first.
    pub fn from_draft(draft: &ContactDraft) -> Self {
        Self {
            id: new_record_id(),
            owner_id: draft.owner_id.clone(),
            name: draft.name.clone(),
            position: draft.position.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            notes: draft.notes.clone(),
            created_at: now_timestamp(),
        }
    }

    /// Replaces every mutable field from the draft, keeping `id` and
    /// `created_at` untouched. Reassigning `owner_id` moves the contact to
    /// another company.
    pub fn apply_draft(&mut self, draft: &ContactDraft) {
        self.owner_id = draft.owner_id.clone();
        self.name = draft.name.clone();
        self.position = draft.position.clone();
        self.email = draft.email.clone();
        self.phone = draft.phone.clone();
        self.notes = draft.notes.clone();
    }

    /// Returns the draft that would reproduce this record's mutable fields.
    pub fn to_draft(&self) -> ContactDraft {
        ContactDraft {
            owner_id: self.owner_id.clone(),
            name: self.name.clone(),
            position: self.position.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            notes: self.notes.clone(),
        }
    }
}
