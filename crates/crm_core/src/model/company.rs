//! Company domain model.
//!
//! # Responsibility
//! - Define the canonical company record persisted in the document.
//! - Validate required fields before any write path accepts a draft.
//!
//! # Invariants
//! - `id` and `created_at` are assigned once and never mutated afterwards.
//! - `name` is non-empty for every company accepted by a write path.
//! - `employees` is non-negative by construction (`u32`).

use crate::model::{new_record_id, now_timestamp, RecordId};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Canonical company record.
///
/// Every field except `id` and `created_at` is mutable through the update
/// path; the two immutable fields carry identity and provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Stable opaque id used for contact ownership links.
    pub id: RecordId,
    /// Display name. Required, non-empty.
    pub name: String,
    pub industry: String,
    pub location: String,
    pub website: String,
    /// Free-text revenue band, e.g. `$1M-$5M`.
    pub revenue: String,
    /// Head count. Non-negative by construction.
    pub employees: u32,
    pub notes: String,
    /// RFC 3339 creation instant, set once.
    pub created_at: String,
}

/// Field-level validation failure for company drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyValidationError {
    /// `name` is empty or whitespace-only.
    NameRequired,
}

impl Display for CompanyValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameRequired => write!(f, "company name is required"),
        }
    }
}

impl Error for CompanyValidationError {}

/// Mutable field set mirrored into a form before submission.
///
/// Drafts carry every field a form can edit; identity and creation
/// timestamp are assigned by the create path, never by the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyDraft {
    pub name: String,
    pub industry: String,
    pub location: String,
    pub website: String,
    pub revenue: String,
    pub employees: u32,
    pub notes: String,
}

impl CompanyDraft {
    /// Checks required fields without touching storage.
    pub fn validate(&self) -> Result<(), CompanyValidationError> {
        if self.name.trim().is_empty() {
            return Err(CompanyValidationError::NameRequired);
        }
        Ok(())
    }
}

impl Company {
    /// Materializes a new company from a validated draft.
    ///
    /// # Invariants
    /// - Assigns a fresh id and the current creation timestamp.
    /// - Does not validate; callers must run `CompanyDraft::validate` first.
    pub fn from_draft(draft: &CompanyDraft) -> Self {
        Self {
            id: new_record_id(),
            name: draft.name.clone(),
            industry: draft.industry.clone(),
            location: draft.location.clone(),
            website: draft.website.clone(),
            revenue: draft.revenue.clone(),
            employees: draft.employees,
            notes: draft.notes.clone(),
            created_at: now_timestamp(),
        }
    }

    /// Replaces every mutable field from the draft, keeping `id` and
    /// `created_at` untouched.
    pub fn apply_draft(&mut self, draft: &CompanyDraft) {
        self.name = draft.name.clone();
        self.industry = draft.industry.clone();
        self.location = draft.location.clone();
        self.website = draft.website.clone();
        self.revenue = draft.revenue.clone();
        self.employees = draft.employees;
        self.notes = draft.notes.clone();
    }

    /// Returns the draft that would reproduce this record's mutable fields.
    ///
    /// Used by edit forms to mirror a stored record into local edit state.
    pub fn to_draft(&self) -> CompanyDraft {
        CompanyDraft {
            name: self.name.clone(),
            industry: self.industry.clone(),
            location: self.location.clone(),
            website: self.website.clone(),
            revenue: self.revenue.clone(),
            employees: self.employees,
            notes: self.notes.clone(),
        }
    }
}
