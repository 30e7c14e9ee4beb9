//! API client module
//!
//! HTTP client for the PANTHER overrepresentation web service.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::EnrichmentClient;
pub use types::*;
