//! List/detail use-case services and delete intents.
//!
//! # Responsibility
//! - Orchestrate store reads into filtered list and detail views.
//! - Own the two deletion paths, including the company cascade.
//!
//! # Invariants
//! - Getters report an unknown id as `None`, never as an error.
//! - Deletes are idempotent; an absent id performs no write at all.

pub mod company_service;
pub mod contact_service;
