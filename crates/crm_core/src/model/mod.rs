//! Record schema for the CRM data lifecycle.
//!
//! # Responsibility
//! - Define the canonical company/contact record shapes and the persisted
//!   document container.
//! - Provide identifier and creation-timestamp assignment helpers.
//!
//! # Invariants
//! - `id` is an opaque string, assigned once at creation and never reused.
//! - `created_at` is RFC 3339 text, set once and never mutated.
//! - Records produced by other writers of the same document format must
//!   load unchanged; ids are not required to parse as UUIDs.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

pub mod company;
pub mod contact;
pub mod document;

/// Opaque stable identifier for companies and contacts.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Fresh ids are hyphenated UUID v4 text, but stored documents may carry
/// ids minted by other writers.
pub type RecordId = String;

/// Mints a fresh record identifier.
pub fn new_record_id() -> RecordId {
    Uuid::new_v4().to_string()
}

/// Returns the current instant as RFC 3339 text for `created_at` fields.
///
/// Falls back to the unix epoch rendering if formatting fails, so record
/// creation never errors on clock formatting.
pub fn now_timestamp() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&Rfc3339)
        .unwrap_or_else(|_| OffsetDateTime::UNIX_EPOCH.to_string())
}

#[cfg(test)]
mod tests {
    use super::{new_record_id, now_timestamp};
    use time::format_description::well_known::Rfc3339;
    use time::OffsetDateTime;

    #[test]
    fn fresh_ids_are_unique_and_nonempty() {
        let first = new_record_id();
        let second = new_record_id();
        assert!(!first.is_empty());
        assert_ne!(first, second);
    }

    #[test]
    fn timestamp_is_valid_rfc3339() {
        let stamp = now_timestamp();
        OffsetDateTime::parse(&stamp, &Rfc3339).expect("timestamp should parse as RFC 3339");
    }
}
