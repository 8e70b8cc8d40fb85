//! Core data lifecycle for IndustrialCRM.
//! This crate is the single source of truth for record-lifecycle invariants.

pub mod demo;
pub mod form;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod stats;
pub mod store;
pub mod table;

pub use form::company_form::{CompanyForm, CompanyFormError};
pub use form::contact_form::{ContactForm, ContactFormError};
pub use form::FormMode;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::company::{Company, CompanyDraft, CompanyValidationError};
pub use model::contact::{Contact, ContactDraft, ContactValidationError};
pub use model::document::{CascadeOutcome, Document};
pub use model::RecordId;
pub use search::filter::{filter_companies, filter_records, FieldSelector};
pub use service::company_service::CompanyService;
pub use service::contact_service::{ContactDetail, ContactRecord, ContactService};
pub use stats::{dashboard_stats, DashboardStats};
pub use store::{DocumentStore, JsonFileStore, MemoryStore, StoreError, StoreResult};
pub use table::{project, render_text, Column};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
