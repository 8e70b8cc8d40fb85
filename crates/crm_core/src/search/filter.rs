//! Case-insensitive substring filter over record collections.
//!
//! # Responsibility
//! - Provide the one filtering primitive every list view uses.
//! - Define the per-entity searchable field sets.
//!
//! # Invariants
//! - An empty query returns the input unchanged, in order.
//! - A record matches when ANY selected field contains the lowercased
//!   query as a substring.
//! - Filtering preserves input order; it never re-sorts.

use crate::model::company::Company;

/// Renders one searchable field of a record as text.
///
/// Plain field accessors and computed cross-entity lookups share this
/// shape, so callers can mix both in one selector list.
pub type FieldSelector<'a, T> = &'a dyn Fn(&T) -> String;

/// Keeps the records whose selected fields contain `query`.
///
/// Matching lowercases both sides; an empty query short-circuits and
/// returns the input as-is.
pub fn filter_records<T>(records: Vec<T>, query: &str, fields: &[FieldSelector<'_, T>]) -> Vec<T> {
    if query.is_empty() {
        return records;
    }

    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            fields
                .iter()
                .any(|field| field(record).to_lowercase().contains(&needle))
        })
        .collect()
}

/// Searchable fields for the company list view: name, industry, location.
pub fn filter_companies(companies: Vec<Company>, query: &str) -> Vec<Company> {
    filter_records(
        companies,
        query,
        &[
            &|company: &Company| company.name.clone(),
            &|company: &Company| company.industry.clone(),
            &|company: &Company| company.location.clone(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::{filter_companies, filter_records};
    use crate::model::company::{Company, CompanyDraft};

    fn company(name: &str, industry: &str, location: &str) -> Company {
        let mut company = Company::from_draft(&CompanyDraft {
            name: name.to_string(),
            industry: industry.to_string(),
            location: location.to_string(),
            ..CompanyDraft::default()
        });
        company.id = format!("id-{name}");
        company
    }

    #[test]
    fn empty_query_returns_input_unchanged_in_order() {
        let input = vec![
            company("Zeta", "Tech", "Austin, TX"),
            company("Alpha", "Retail", "Boston, MA"),
        ];
        let names: Vec<_> = filter_companies(input, "")
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn match_is_case_insensitive_across_any_selected_field() {
        let input = vec![
            company("Acme Industries", "Manufacturing", "Chicago, IL"),
            company("TechSolutions Inc", "Technology", "San Francisco, CA"),
        ];
        let hits = filter_companies(input, "CHICAGO");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Acme Industries");
    }

    #[test]
    fn no_selected_field_means_no_matches_for_nonempty_query() {
        let input = vec![company("Acme", "", "")];
        let hits = filter_records(input, "acme", &[]);
        assert!(hits.is_empty());
    }
}
