//! Collection search entry points.
//!
//! # Responsibility
//! - Expose substring filtering over record collections.
//! - Keep field-selection shaping inside core.

pub mod filter;
