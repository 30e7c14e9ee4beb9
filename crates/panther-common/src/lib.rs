//! PANTHER Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared plumbing for the PANTHER enrichment client workspace.
//!
//! Currently this is the logging layer: every binary in the workspace
//! configures `tracing` through [`logging::LogConfig`] so that verbosity,
//! format and file output behave the same way everywhere.
//!
//! # Example
//!
//! ```no_run
//! use panther_common::logging::{init_logging, LogConfig, LogLevel};
//!
//! let config = LogConfig::builder().level(LogLevel::Debug).build();
//! init_logging(&config).unwrap();
//! ```

pub mod logging;
