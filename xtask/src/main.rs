//! Build automation tasks for the PANTHER client
//!
//! Run with `cargo xtask <task>`.

use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for the PANTHER client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate the CLI reference in markdown
    GenerateCliDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateCliDocs { output_dir } => generate_cli_docs(&output_dir)?,
    }

    Ok(())
}

fn generate_cli_docs(output_dir: &str) -> anyhow::Result<()> {
    println!("Generating CLI documentation...");

    let markdown = clap_markdown::help_markdown::<panther_cli::Cli>();

    let content = format!(
        r#"# panther CLI Reference

Generated from the CLI source on {}.

`panther` submits a gene list to the PANTHER overrepresentation service and
writes the JSON result to a file.

## Quick Start

```bash
# Human genes against GO biological process, Fisher's exact test with FDR
panther --gene_input_list genes.txt --outputfile enrichment.json

# Mouse genes against PANTHER pathways
panther --taxonid 10090 --datasetid ANNOT_TYPE_ID_PANTHER_PATHWAY \
  --gene_input_list mouse.txt --outputfile mouse.json
```

{}

## Environment Variables

- `PANTHER_BASE_URL` - Service address (default: `https://pantherdb.org`)
- `PANTHER_API_TIMEOUT_SECS` - Per-request timeout in seconds (default: `300`)
- `LOG_LEVEL`, `LOG_OUTPUT`, `LOG_FORMAT`, `LOG_DIR`, `LOG_FILTER` - Logging

## Exit Codes

| Code | Meaning |
|------|---------|
| 0 | Success |
| 1 | Local failure (file system, configuration) |
| 2 | Invalid command-line usage |
| 3 | Invalid input: gene file, taxon ID or dataset ID |
| 4 | Unsupported feature (reference lists) |
| 5 | PANTHER returned an error status |
| 6 | Network failure or malformed response |

---

*To update, run `cargo xtask generate-cli-docs`.*
"#,
        chrono::Utc::now().format("%Y-%m-%d"),
        markdown
    );

    let output_path = PathBuf::from(output_dir);
    fs::create_dir_all(&output_path)?;

    let file_path = output_path.join("cli-reference.md");
    fs::write(&file_path, content)?;

    println!("✅ Generated CLI documentation at: {}", file_path.display());

    Ok(())
}
