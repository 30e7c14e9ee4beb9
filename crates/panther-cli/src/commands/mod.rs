//! CLI command implementations
//!
//! The tool has a single entry point; its pipeline lives in [`enrich`].

pub mod enrich;
