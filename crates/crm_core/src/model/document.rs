//! Persisted document container and its pure mutation helpers.
//!
//! # Responsibility
//! - Define the single JSON document holding both record collections.
//! - Provide the in-memory mutations that write paths compose into one
//!   atomic read-modify-write cycle.
//!
//! # Invariants
//! - Missing top-level keys deserialize as empty collections; no writer is
//!   required to pre-populate either key.
//! - Collection order is insertion order and carries no semantic weight.
//! - `remove_company` removes the company and every contact referencing it
//!   in the same in-memory mutation, so a single save never persists an
//!   intermediate state.

use crate::model::company::Company;
use crate::model::contact::Contact;
use crate::model::RecordId;
use serde::{Deserialize, Serialize};

/// The whole persisted state: one JSON document, two collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

/// Result of a cascading company removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeOutcome {
    /// Whether a company with the requested id existed and was removed.
    pub company_removed: bool,
    /// Number of contacts removed alongside it.
    pub contacts_removed: usize,
}

impl Document {
    /// Returns the empty document, the fail-soft fallback for every load.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn company(&self, id: &str) -> Option<&Company> {
        self.companies.iter().find(|company| company.id == id)
    }

    pub fn company_mut(&mut self, id: &str) -> Option<&mut Company> {
        self.companies.iter_mut().find(|company| company.id == id)
    }

    pub fn contact(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|contact| contact.id == id)
    }

    pub fn contact_mut(&mut self, id: &str) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|contact| contact.id == id)
    }

    /// Contacts owned by the given company, in stored order.
    pub fn contacts_of(&self, company_id: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|contact| contact.owner_id == company_id)
            .collect()
    }

    /// Appends a freshly created company.
    pub fn push_company(&mut self, company: Company) {
        self.companies.push(company);
    }

    /// Appends a freshly created contact.
    pub fn push_contact(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Removes one contact by id.
    ///
    /// Returns whether a record was removed; an absent id is a no-op.
    pub fn remove_contact(&mut self, id: &str) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|contact| contact.id != id);
        self.contacts.len() != before
    }

    /// Removes a company together with every contact referencing it.
    ///
    /// The one multi-record mutation in the model: both collections change
    /// in the same call, so callers persist either the full cascade or
    /// nothing. An absent id removes nothing, including contacts that may
    /// dangle on it.
    pub fn remove_company(&mut self, id: &str) -> CascadeOutcome {
        let companies_before = self.companies.len();
        self.companies.retain(|company| company.id != id);
        if self.companies.len() == companies_before {
            return CascadeOutcome::default();
        }

        let contacts_before = self.contacts.len();
        self.contacts.retain(|contact| contact.owner_id != id);
        CascadeOutcome {
            company_removed: true,
            contacts_removed: contacts_before - self.contacts.len(),
        }
    }
}
