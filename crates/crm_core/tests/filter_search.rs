use crm_core::{
    Company, CompanyService, Contact, ContactService, Document, MemoryStore,
};

fn company(id: &str, name: &str, industry: &str, location: &str) -> Company {
    Company {
        id: id.to_string(),
        name: name.to_string(),
        industry: industry.to_string(),
        location: location.to_string(),
        website: String::new(),
        revenue: String::new(),
        employees: 0,
        notes: String::new(),
        created_at: "2023-01-01T00:00:00Z".to_string(),
    }
}

fn contact(id: &str, owner_id: &str, name: &str, email: &str) -> Contact {
    Contact {
        id: id.to_string(),
        owner_id: owner_id.to_string(),
        name: name.to_string(),
        position: String::new(),
        email: email.to_string(),
        phone: String::new(),
        notes: String::new(),
        created_at: "2023-01-01T00:00:00Z".to_string(),
    }
}

/// Two companies, three contacts; "Dana" deliberately matches neither an
/// Acme field nor the Acme company name.
fn fixture() -> Document {
    Document {
        companies: vec![
            company("a", "Acme Industries", "Manufacturing", "Chicago, IL"),
            company("t", "TechSolutions Inc", "Technology", "San Francisco, CA"),
        ],
        contacts: vec![
            contact("c1", "a", "John Smith", "john@acme.com"),
            contact("c2", "a", "Sarah Johnson", "sarah@acme.com"),
            contact("c3", "t", "Dana Lee", "dana@techsolutions.com"),
        ],
    }
}

#[test]
fn empty_query_returns_everything_in_stored_order() {
    let store = MemoryStore::with_document(&fixture()).unwrap();

    let companies = CompanyService::new(&store).list("");
    let names: Vec<_> = companies.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Acme Industries", "TechSolutions Inc"]);

    let contacts = ContactService::new(&store).list("");
    let names: Vec<_> = contacts.iter().map(|r| r.contact.name.as_str()).collect();
    assert_eq!(names, vec!["John Smith", "Sarah Johnson", "Dana Lee"]);
}

#[test]
fn company_query_matches_name_industry_and_location() {
    let store = MemoryStore::with_document(&fixture()).unwrap();
    let service = CompanyService::new(&store);

    assert_eq!(service.list("acme").len(), 1);
    assert_eq!(service.list("TECHNOLOGY").len(), 1);
    assert_eq!(service.list("chicago").len(), 1);
    assert!(service.list("berlin").is_empty());
}

#[test]
fn contact_query_matches_owning_company_name_as_virtual_field() {
    let store = MemoryStore::with_document(&fixture()).unwrap();
    let rows = ContactService::new(&store).list("acme");

    // Exactly the two Acme-owned contacts; Dana's only tie to "acme" would
    // be a company she does not belong to.
    let names: Vec<_> = rows.iter().map(|r| r.contact.name.as_str()).collect();
    assert_eq!(names, vec!["John Smith", "Sarah Johnson"]);
}

#[test]
fn contact_query_still_matches_direct_fields() {
    let store = MemoryStore::with_document(&fixture()).unwrap();
    let service = ContactService::new(&store);

    let by_name = service.list("dana");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].contact.id, "c3");

    let by_email = service.list("sarah@");
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].contact.id, "c2");
}

#[test]
fn matching_is_case_insensitive_both_ways() {
    let store = MemoryStore::with_document(&fixture()).unwrap();
    let service = ContactService::new(&store);

    assert_eq!(service.list("ACME").len(), 2);
    assert_eq!(service.list("TeChSoLuTiOnS").len(), 1);
}
