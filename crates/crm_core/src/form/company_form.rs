//! Company form controller.
//!
//! # Responsibility
//! - Validate company drafts and apply them as one insert or update.
//!
//! # Invariants
//! - `id` and `created_at` never change through the update path.
//! - No store write happens on validation failure.

use super::FormMode;
use crate::model::company::{Company, CompanyDraft, CompanyValidationError};
use crate::model::RecordId;
use crate::store::{DocumentStore, StoreError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Submission failure for company forms.
#[derive(Debug)]
pub enum CompanyFormError {
    /// Draft failed field validation; nothing was written.
    Validation(CompanyValidationError),
    /// Update target vanished between form load and submission.
    NotFound(RecordId),
    /// The document could not be persisted.
    Store(StoreError),
}

impl Display for CompanyFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "company not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CompanyFormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<CompanyValidationError> for CompanyFormError {
    fn from(value: CompanyValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for CompanyFormError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Form controller binding company drafts to the store.
pub struct CompanyForm<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> CompanyForm<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Applies one draft as a create or update submission.
    ///
    /// # Contract
    /// - Create: assigns a fresh id and timestamp, appends to the
    ///   companies collection.
    /// - Update: locates the record by id, replaces every mutable field,
    ///   keeps id and `created_at`.
    /// - Exactly one `load` and one `save` on success; zero writes
    ///   otherwise.
    pub fn submit(
        &self,
        draft: &CompanyDraft,
        mode: FormMode,
    ) -> Result<Company, CompanyFormError> {
        draft.validate()?;

        let mut doc = self.store.load();
        let (company, mode_label) = match mode {
            FormMode::Create => {
                let company = Company::from_draft(draft);
                doc.push_company(company.clone());
                (company, "create")
            }
            FormMode::Update(id) => {
                let existing = doc
                    .company_mut(&id)
                    .ok_or(CompanyFormError::NotFound(id.clone()))?;
                existing.apply_draft(draft);
                (existing.clone(), "update")
            }
        };

        self.store.save(&doc)?;
        info!(
            "event=form_submit module=form kind=company mode={mode_label} status=ok id={}",
            company.id
        );
        Ok(company)
    }
}
