//! Dashboard statistics over a loaded document.
//!
//! # Responsibility
//! - Derive the summary figures the dashboard shows from one document
//!   snapshot.
//!
//! # Invariants
//! - Pure over its input; never touches storage.
//! - Ratios over zero companies are zero, not NaN.

use crate::model::document::Document;

/// Summary figures for the dashboard view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardStats {
    pub total_companies: usize,
    pub total_contacts: usize,
    /// Mean head count across companies, rounded to the nearest integer.
    pub avg_employees: u32,
    /// Contacts divided by companies.
    pub contacts_per_company: f64,
}

/// Computes dashboard statistics from one document snapshot.
pub fn dashboard_stats(doc: &Document) -> DashboardStats {
    let total_companies = doc.companies.len();
    let total_contacts = doc.contacts.len();

    let (avg_employees, contacts_per_company) = if total_companies == 0 {
        (0, 0.0)
    } else {
        let employee_sum: u64 = doc
            .companies
            .iter()
            .map(|company| u64::from(company.employees))
            .sum();
        let avg = (employee_sum as f64 / total_companies as f64).round() as u32;
        (avg, total_contacts as f64 / total_companies as f64)
    };

    DashboardStats {
        total_companies,
        total_contacts,
        avg_employees,
        contacts_per_company,
    }
}
