//! Contact list/detail service.
//!
//! # Responsibility
//! - Serve contact listings joined with the owning company's name.
//! - Resolve contact detail views, tolerating dangling owner references.
//! - Issue the single-record contact delete intent.
//!
//! # Invariants
//! - A dangling `owner_id` surfaces as a missing company, never a failure.
//! - The company-name join happens once per listing, against the same
//!   document snapshot the contacts came from.

use crate::model::company::Company;
use crate::model::contact::Contact;
use crate::search::filter::filter_records;
use crate::store::{DocumentStore, StoreResult};
use log::info;
use std::collections::HashMap;

/// Read model for the contact list view: contact plus owning company name.
///
/// `company_name` is `None` when the owner reference dangles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    pub contact: Contact,
    pub company_name: Option<String>,
}

/// Read model for the contact detail view: contact plus resolved owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetail {
    pub contact: Contact,
    pub company: Option<Company>,
}

/// Use-case service for contact screens.
pub struct ContactService<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> ContactService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists contacts matching the query, joined with company names.
    ///
    /// The owning company's name participates in matching as a virtual
    /// field, so searching a company name surfaces its contacts.
    pub fn list(&self, query: &str) -> Vec<ContactRecord> {
        let doc = self.store.load();
        let names: HashMap<String, String> = doc
            .companies
            .iter()
            .map(|company| (company.id.clone(), company.name.clone()))
            .collect();

        let rows: Vec<ContactRecord> = doc
            .contacts
            .into_iter()
            .map(|contact| {
                let company_name = names.get(&contact.owner_id).cloned();
                ContactRecord {
                    contact,
                    company_name,
                }
            })
            .collect();

        filter_records(
            rows,
            query,
            &[
                &|row: &ContactRecord| row.contact.name.clone(),
                &|row: &ContactRecord| row.contact.position.clone(),
                &|row: &ContactRecord| row.contact.email.clone(),
                &|row: &ContactRecord| row.contact.phone.clone(),
                &|row: &ContactRecord| row.company_name.clone().unwrap_or_default(),
            ],
        )
    }

    /// Gets one contact by id with its owning company resolved.
    ///
    /// Unknown contact ids are `None`; a known contact with a dangling
    /// owner reference resolves with `company: None`.
    pub fn get(&self, id: &str) -> Option<ContactDetail> {
        let doc = self.store.load();
        let contact = doc.contact(id)?.clone();
        let company = doc.company(&contact.owner_id).cloned();
        Some(ContactDetail { contact, company })
    }

    /// Deletes one contact by id.
    ///
    /// # Contract
    /// - Returns whether a record was removed.
    /// - An absent id is an idempotent no-op with no save.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut doc = self.store.load();
        if !doc.remove_contact(id) {
            return Ok(false);
        }

        self.store.save(&doc)?;
        info!("event=contact_delete module=service status=ok id={id}");
        Ok(true)
    }
}
