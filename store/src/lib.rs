//! Write-side client for the headless content store.
//!
//! The store exposes a single mutation endpoint; this crate wraps it with a
//! typed `create lead` contract for the contact form, the generic document
//! operations the seeder uses, and the administrative status patch. The
//! write token never leaves this crate: callers see a `StoreError` that
//! carries no credential material.

pub mod client;
pub mod config;
pub mod error;

pub use client::{ContentStoreClient, CreatedLead, LeadStore};
pub use config::{StoreConfig, StoreConfigError};
pub use error::StoreError;
