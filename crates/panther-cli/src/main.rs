//! PANTHER CLI - Main entry point

use clap::Parser;
use panther_cli::commands::enrich;
use panther_cli::Cli;
use panther_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    let base = LogConfig::builder()
        .level(if cli.verbose {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        })
        .output(LogOutput::Console)
        .log_file_prefix("panther-cli")
        .filter_directives("hyper=warn,reqwest=warn")
        .build();

    // Environment variables take precedence over the flag
    let log_config = match LogConfig::from_env_over(base.clone()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: ignoring invalid logging configuration: {}", e);
            base
        },
    };

    // The CLI works without logging
    let _log_guard = init_logging(&log_config).ok().flatten();

    let result = match cli.client_config() {
        Ok(config) => enrich::run(config, cli.enrich_options()).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!(error = %e, kind = ?e.kind(), "Enrichment run failed");
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}
