//! Company list/detail service.
//!
//! # Responsibility
//! - Serve filtered company listings and by-id lookups.
//! - Issue the cascading company delete intent.
//!
//! # Invariants
//! - `delete` removes the company and every contact owned by it in one
//!   document rewrite; no intermediate state is ever persisted.
//! - Deleting an absent id is a no-op outcome with no save.

use crate::model::company::Company;
use crate::model::contact::Contact;
use crate::model::document::CascadeOutcome;
use crate::search::filter::filter_companies;
use crate::store::{DocumentStore, StoreResult};
use log::info;

/// Use-case service for company screens.
pub struct CompanyService<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> CompanyService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists companies matching the query, in stored order.
    ///
    /// An empty query lists everything.
    pub fn list(&self, query: &str) -> Vec<Company> {
        filter_companies(self.store.load().companies, query)
    }

    /// Gets one company by id. Unknown ids are `None`, not an error.
    pub fn get(&self, id: &str) -> Option<Company> {
        let doc = self.store.load();
        doc.company(id).cloned()
    }

    /// Contacts owned by the given company, for the detail view.
    pub fn contacts_of(&self, company_id: &str) -> Vec<Contact> {
        self.store
            .load()
            .contacts_of(company_id)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Deletes a company together with all contacts referencing it.
    ///
    /// # Contract
    /// - One atomic document rewrite covers both collections.
    /// - An absent id returns the empty outcome without writing.
    pub fn delete(&self, id: &str) -> StoreResult<CascadeOutcome> {
        let mut doc = self.store.load();
        let outcome = doc.remove_company(id);
        if !outcome.company_removed {
            return Ok(outcome);
        }

        self.store.save(&doc)?;
        info!(
            "event=company_delete module=service status=ok id={id} contacts_removed={}",
            outcome.contacts_removed
        );
        Ok(outcome)
    }
}
