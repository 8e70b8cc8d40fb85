//! CLI dashboard probe.
//!
//! # Responsibility
//! - Open (or seed) a store file and print a dashboard snapshot.
//! - Keep output deterministic for a given store state so core wiring can
//!   be verified without a UI runtime.

use crm_core::{
    dashboard_stats, demo, render_text, Column, CompanyService, ContactService, DocumentStore,
    JsonFileStore,
};
use std::process::ExitCode;

const DEFAULT_STORE_PATH: &str = "crm-data.json";
const RECENT_ROWS: usize = 5;

fn main() -> ExitCode {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_STORE_PATH.to_string());
    let store = JsonFileStore::new(&path);

    // First run: seed the sample document so the dashboard has content.
    if store.load() == crm_core::Document::empty() {
        if let Err(err) = store.save(&demo::sample_document()) {
            eprintln!("failed to seed store at {path}: {err}");
            return ExitCode::FAILURE;
        }
    }

    let doc = store.load();
    let stats = dashboard_stats(&doc);
    println!("IndustrialCRM dashboard ({path})");
    println!("  total companies:      {}", stats.total_companies);
    println!("  total contacts:       {}", stats.total_contacts);
    println!("  avg employees:        {}", stats.avg_employees);
    println!("  contacts per company: {:.1}", stats.contacts_per_company);
    println!();

    let companies = CompanyService::new(&store).list("");
    let recent_companies = &companies[..companies.len().min(RECENT_ROWS)];
    let company_columns = [
        Column::new("Company", |company: &crm_core::Company| {
            company.name.clone()
        }),
        Column::new("Industry", |company: &crm_core::Company| {
            company.industry.clone()
        }),
        Column::new("Location", |company: &crm_core::Company| {
            company.location.clone()
        }),
    ];
    println!("Recent companies");
    print!("{}", render_text(recent_companies, &company_columns));
    println!();

    let contacts = ContactService::new(&store).list("");
    let recent_contacts = &contacts[..contacts.len().min(RECENT_ROWS)];
    let contact_columns = [
        Column::new("Name", |row: &crm_core::ContactRecord| {
            row.contact.name.clone()
        }),
        Column::new("Company", |row: &crm_core::ContactRecord| {
            row.company_name.clone().unwrap_or_else(|| "Unknown".to_string())
        }),
        Column::new("Position", |row: &crm_core::ContactRecord| {
            row.contact.position.clone()
        }),
        Column::new("Email", |row: &crm_core::ContactRecord| {
            row.contact.email.clone()
        }),
    ];
    println!("Recent contacts");
    print!("{}", render_text(recent_contacts, &contact_columns));

    ExitCode::SUCCESS
}
