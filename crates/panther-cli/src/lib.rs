//! PANTHER CLI Library
//!
//! Command-line client for the PANTHER overrepresentation web service.
//!
//! # Overview
//!
//! One run of the `panther` binary:
//!
//! 1. reads a gene list (one identifier per line)
//! 2. fetches the organisms and annotation datasets PANTHER supports
//! 3. checks the requested taxon id and dataset id against them
//! 4. submits the overrepresentation test
//! 5. writes the JSON result, 4-space indented, to the output file
//!
//! Option names keep their historical spelling (`--taxonid`,
//! `--gene_input_list`, ...) so existing pipelines keep working.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod genes;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use api::EnrichmentClient;
pub use config::ClientConfig;
pub use error::{CliError, ErrorKind, Result};

use api::{Correction, TestType};
use clap::Parser;
use commands::enrich::EnrichOptions;
use config::{DEFAULT_BASE_URL, DEFAULT_REQUEST_DELAY_SECS};
use std::path::PathBuf;
use std::time::Duration;

/// PANTHER overrepresentation test client
#[derive(Parser, Debug)]
#[command(name = "panther")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seconds to wait before each lookup request
    #[arg(long, default_value_t = DEFAULT_REQUEST_DELAY_SECS)]
    pub seconds: u64,

    /// Taxon ID of the organism (9606 = human, 10090 = mouse)
    #[arg(long = "taxonid", default_value = "9606")]
    pub taxon_id: String,

    /// Annotation dataset ID
    #[arg(long = "datasetid", default_value = "GO:0008150")]
    pub dataset_id: String,

    /// Output file for the JSON result
    #[arg(long = "outputfile", default_value = "output.json")]
    pub output_file: PathBuf,

    /// Gene input list, one identifier per line
    #[arg(long = "gene_input_list", default_value = "input.txt")]
    pub gene_input_list: PathBuf,

    /// Statistical test
    #[arg(long = "test_type", value_enum, ignore_case = true, default_value_t = TestType::Fisher)]
    pub test_type: TestType,

    /// Multiple-testing correction
    #[arg(long, value_enum, ignore_case = true, default_value_t = Correction::Fdr)]
    pub correction: Correction,

    /// Reference gene list (not supported by this client)
    #[arg(long = "ref-input-list")]
    pub ref_input_list: Option<String>,

    /// Reference organism (not supported by this client)
    #[arg(long = "ref-organism")]
    pub ref_organism: Option<String>,

    /// PANTHER service base URL
    #[arg(long, env = "PANTHER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the CLI reference as markdown and exit
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

impl Cli {
    /// Client configuration for this invocation
    ///
    /// Starts from the environment (timeout) and applies the command-line
    /// base URL and delay on top.
    pub fn client_config(&self) -> Result<ClientConfig> {
        Ok(ClientConfig::from_env()?
            .with_base_url(self.base_url.as_str())
            .with_request_delay(Duration::from_secs(self.seconds)))
    }

    /// Per-run parameters for the enrichment pipeline
    pub fn enrich_options(&self) -> EnrichOptions {
        EnrichOptions {
            gene_input_list: self.gene_input_list.clone(),
            taxon_id: self.taxon_id.clone(),
            dataset_id: self.dataset_id.clone(),
            output_file: self.output_file.clone(),
            test_type: self.test_type,
            correction: self.correction,
            ref_input_list: self.ref_input_list.clone(),
            ref_organism: self.ref_organism.clone(),
        }
    }
}
