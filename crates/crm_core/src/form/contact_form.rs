//! Contact form controller.
//!
//! # Responsibility
//! - Validate contact drafts and apply them as one insert or update.
//! - Reject submissions whose owning company does not exist.
//!
//! # Invariants
//! - `id` and `created_at` never change through the update path.
//! - The owner-existence check runs against the same document snapshot
//!   the submission mutates, so it cannot race the write.
//! - No store write happens on any validation failure.

use super::FormMode;
use crate::model::contact::{Contact, ContactDraft, ContactValidationError};
use crate::model::RecordId;
use crate::store::{DocumentStore, StoreError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Submission failure for contact forms.
#[derive(Debug)]
pub enum ContactFormError {
    /// Draft failed field validation; nothing was written.
    Validation(ContactValidationError),
    /// `owner_id` names no stored company.
    UnknownCompany(RecordId),
    /// Update target vanished between form load and submission.
    NotFound(RecordId),
    /// The document could not be persisted.
    Store(StoreError),
}

impl Display for ContactFormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::UnknownCompany(id) => write!(f, "owning company not found: {id}"),
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ContactFormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::UnknownCompany(_) => None,
            Self::NotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ContactValidationError> for ContactFormError {
    fn from(value: ContactValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for ContactFormError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Form controller binding contact drafts to the store.
pub struct ContactForm<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> ContactForm<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Applies one draft as a create or update submission.
    ///
    /// # Contract
    /// - Field validation short-circuits before any store access.
    /// - The draft's `owner_id` must name a company in the loaded
    ///   document; otherwise the submission fails with `UnknownCompany`
    ///   and nothing is written.
    /// - Create: fresh id + timestamp, append. Update: replace mutable
    ///   fields by id, keep id and `created_at`.
    /// - Exactly one `load` and one `save` on success.
    pub fn submit(
        &self,
        draft: &ContactDraft,
        mode: FormMode,
    ) -> Result<Contact, ContactFormError> {
        draft.validate()?;

        let mut doc = self.store.load();
        if doc.company(&draft.owner_id).is_none() {
            return Err(ContactFormError::UnknownCompany(draft.owner_id.clone()));
        }

        let (contact, mode_label) = match mode {
            FormMode::Create => {
                let contact = Contact::from_draft(draft);
                doc.push_contact(contact.clone());
                (contact, "create")
            }
            FormMode::Update(id) => {
                let existing = doc
                    .contact_mut(&id)
                    .ok_or(ContactFormError::NotFound(id.clone()))?;
                existing.apply_draft(draft);
                (existing.clone(), "update")
            }
        };

        self.store.save(&doc)?;
        info!(
            "event=form_submit module=form kind=contact mode={mode_label} status=ok id={} owner={}",
            contact.id, contact.owner_id
        );
        Ok(contact)
    }
}
