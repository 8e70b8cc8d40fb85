use crm_core::{
    Company, CompanyDraft, CompanyForm, CompanyFormError, CompanyService, CompanyValidationError,
    Document, DocumentStore, FormMode, MemoryStore, StoreResult,
};
use std::cell::Cell;
use std::collections::HashSet;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

fn draft(name: &str) -> CompanyDraft {
    CompanyDraft {
        name: name.to_string(),
        industry: "Manufacturing".to_string(),
        location: "Chicago, IL".to_string(),
        website: "example.com".to_string(),
        revenue: "$1M-$5M".to_string(),
        employees: 25,
        notes: "".to_string(),
    }
}

#[test]
fn create_grows_collection_by_one_with_unique_id() {
    let store = MemoryStore::new();
    let form = CompanyForm::new(&store);

    let first = form.submit(&draft("Acme Industries"), FormMode::Create).unwrap();
    let second = form.submit(&draft("Globex"), FormMode::Create).unwrap();

    let doc = store.load();
    assert_eq!(doc.companies.len(), 2);

    let ids: HashSet<_> = doc.companies.iter().map(|c| c.id.clone()).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));
}

#[test]
fn create_assigns_rfc3339_creation_timestamp() {
    let store = MemoryStore::new();
    let form = CompanyForm::new(&store);

    let created = form.submit(&draft("Acme"), FormMode::Create).unwrap();
    OffsetDateTime::parse(&created.created_at, &Rfc3339)
        .expect("created_at should be RFC 3339 text");
}

#[test]
fn update_replaces_mutable_fields_and_keeps_identity() {
    let store = MemoryStore::new();
    let form = CompanyForm::new(&store);

    let created = form.submit(&draft("Acme"), FormMode::Create).unwrap();

    // Mirror the stored record into edit state, the way an edit form does.
    let mut edited = created.to_draft();
    edited.name = "Acme Industries".to_string();
    edited.employees = 120;
    edited.notes = "Key account".to_string();
    let updated = form
        .submit(&edited, FormMode::Update(created.id.clone()))
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.name, "Acme Industries");
    assert_eq!(updated.employees, 120);

    let doc = store.load();
    assert_eq!(doc.companies.len(), 1);
    assert_eq!(doc.companies[0], updated);
}

#[test]
fn update_unknown_id_returns_not_found() {
    let store = MemoryStore::new();
    let form = CompanyForm::new(&store);

    let err = form
        .submit(&draft("Ghost"), FormMode::Update("missing".to_string()))
        .unwrap_err();
    assert!(matches!(err, CompanyFormError::NotFound(id) if id == "missing"));
}

#[test]
fn validation_failure_blocks_the_write() {
    let store = MemoryStore::new();
    let form = CompanyForm::new(&store);

    let err = form.submit(&draft("   "), FormMode::Create).unwrap_err();
    assert!(matches!(
        err,
        CompanyFormError::Validation(CompanyValidationError::NameRequired)
    ));
    assert!(store.raw().is_none(), "no entry may be written on validation failure");
}

#[test]
fn get_unknown_id_is_none_not_an_error() {
    let store = MemoryStore::new();
    let service = CompanyService::new(&store);
    assert!(service.get("missing").is_none());
}

#[test]
fn list_applies_query_filtering() {
    let store = MemoryStore::new();
    let form = CompanyForm::new(&store);
    form.submit(&draft("Acme Industries"), FormMode::Create).unwrap();
    let mut other = draft("TechSolutions Inc");
    other.industry = "Technology".to_string();
    other.location = "San Francisco, CA".to_string();
    form.submit(&other, FormMode::Create).unwrap();

    let service = CompanyService::new(&store);
    assert_eq!(service.list("").len(), 2);

    let hits = service.list("technology");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "TechSolutions Inc");
}

/// Store wrapper counting load/save calls, to pin the one-read-one-write
/// contract of form submissions.
struct CountingStore {
    inner: MemoryStore,
    loads: Cell<usize>,
    saves: Cell<usize>,
}

impl CountingStore {
    fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            loads: Cell::new(0),
            saves: Cell::new(0),
        }
    }
}

impl DocumentStore for CountingStore {
    fn load(&self) -> Document {
        self.loads.set(self.loads.get() + 1);
        self.inner.load()
    }

    fn save(&self, doc: &Document) -> StoreResult<()> {
        self.saves.set(self.saves.get() + 1);
        self.inner.save(doc)
    }
}

#[test]
fn successful_submission_is_exactly_one_load_and_one_save() {
    let store = CountingStore::new();
    let form = CompanyForm::new(&store);

    let created: Company = form.submit(&draft("Acme"), FormMode::Create).unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(store.loads.get(), 1);
    assert_eq!(store.saves.get(), 1);

    form.submit(&draft("Acme v2"), FormMode::Update(created.id))
        .unwrap();
    assert_eq!(store.loads.get(), 2);
    assert_eq!(store.saves.get(), 2);
}

#[test]
fn failed_submission_never_saves() {
    let store = CountingStore::new();
    let form = CompanyForm::new(&store);

    form.submit(&draft(""), FormMode::Create).unwrap_err();
    assert_eq!(store.saves.get(), 0);

    form.submit(&draft("Ok"), FormMode::Update("missing".to_string()))
        .unwrap_err();
    assert_eq!(store.saves.get(), 0);
}
