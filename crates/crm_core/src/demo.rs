//! Deterministic sample data for first-run seeding and fixtures.
//!
//! # Responsibility
//! - Provide a small, realistic document for empty stores and tests.
//!
//! # Invariants
//! - Ids and timestamps are fixed so seeded output is deterministic.
//! - Every contact references a company present in the same document.

use crate::model::company::Company;
use crate::model::contact::Contact;
use crate::model::document::Document;

/// Builds the sample document: two companies, three contacts.
pub fn sample_document() -> Document {
    let acme = Company {
        id: "demo-company-acme".to_string(),
        name: "Acme Industries".to_string(),
        industry: "Manufacturing".to_string(),
        location: "Chicago, IL".to_string(),
        website: "acme.com".to_string(),
        revenue: "$5M-$10M".to_string(),
        employees: 120,
        notes: "Key account with long history".to_string(),
        created_at: "2022-03-15T08:00:00Z".to_string(),
    };
    let techsolutions = Company {
        id: "demo-company-techsolutions".to_string(),
        name: "TechSolutions Inc".to_string(),
        industry: "Technology".to_string(),
        location: "San Francisco, CA".to_string(),
        website: "techsolutions.com".to_string(),
        revenue: "$1M-$5M".to_string(),
        employees: 45,
        notes: "Rapidly growing startup".to_string(),
        created_at: "2023-01-10T10:15:00Z".to_string(),
    };

    let contacts = vec![
        Contact {
            id: "demo-contact-john".to_string(),
            owner_id: acme.id.clone(),
            name: "John Smith".to_string(),
            position: "Operations Director".to_string(),
            email: "john@acme.com".to_string(),
            phone: "312-555-1234".to_string(),
            notes: "Primary decision maker".to_string(),
            created_at: "2022-05-20T14:30:00Z".to_string(),
        },
        Contact {
            id: "demo-contact-sarah".to_string(),
            owner_id: acme.id.clone(),
            name: "Sarah Johnson".to_string(),
            position: "Procurement Manager".to_string(),
            email: "sarah@acme.com".to_string(),
            phone: "312-555-5678".to_string(),
            notes: "Handles all purchasing".to_string(),
            created_at: "2022-06-12T11:45:00Z".to_string(),
        },
        Contact {
            id: "demo-contact-michael".to_string(),
            owner_id: techsolutions.id.clone(),
            name: "Michael Chen".to_string(),
            position: "CEO".to_string(),
            email: "michael@techsolutions.com".to_string(),
            phone: "415-555-9876".to_string(),
            notes: "Prefers email communication".to_string(),
            created_at: "2023-01-15T09:20:00Z".to_string(),
        },
    ];

    Document {
        companies: vec![acme, techsolutions],
        contacts,
    }
}

#[cfg(test)]
mod tests {
    use super::sample_document;

    #[test]
    fn sample_document_is_internally_consistent() {
        let doc = sample_document();
        assert_eq!(doc.companies.len(), 2);
        assert_eq!(doc.contacts.len(), 3);
        for contact in &doc.contacts {
            assert!(
                doc.company(&contact.owner_id).is_some(),
                "contact {} references a missing company",
                contact.name
            );
        }
    }
}
