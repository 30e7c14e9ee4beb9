//! Gene input list loading
//!
//! Reads one gene identifier per line, trims surrounding whitespace, skips
//! blank lines and enforces the service's gene limit.

use crate::config::MAX_GENE_INPUT;
use crate::error::{CliError, Result};
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;
use tracing::debug;

/// Ordered list of gene identifiers to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneInput {
    genes: Vec<String>,
}

impl GeneInput {
    /// Load genes from a file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| input_error(path, e))?;

        let lines = read_lines(file).map_err(|e| input_error(path, e))?;
        let input = Self::from_genes(lines)?;
        if input.is_empty() {
            return Err(CliError::EmptyGeneList(path.display().to_string()));
        }

        debug!(path = %path.display(), genes = input.len(), "Loaded gene input list");
        Ok(input)
    }

    /// Read genes from any line-oriented source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_genes(read_lines(reader)?)
    }

    /// Build from identifiers already in memory
    pub fn from_genes<I, S>(genes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let genes: Vec<String> = genes
            .into_iter()
            .map(|g| g.as_ref().trim().to_string())
            .filter(|g| !g.is_empty())
            .collect();

        if genes.len() > MAX_GENE_INPUT {
            return Err(CliError::TooManyGenes {
                count: genes.len(),
                limit: MAX_GENE_INPUT,
            });
        }

        Ok(Self { genes })
    }

    /// Identifiers in input order
    pub fn genes(&self) -> &[String] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Comma-joined form sent to the service
    pub fn joined(&self) -> String {
        self.genes.join(",")
    }
}

fn read_lines<R: Read>(reader: R) -> std::io::Result<Vec<String>> {
    BufReader::new(reader).lines().collect()
}

/// Map an I/O failure on the gene file to a user-facing error
fn input_error(path: &Path, err: std::io::Error) -> CliError {
    let path = path.display().to_string();
    match err.kind() {
        ErrorKind::NotFound => CliError::FileNotFound(path),
        ErrorKind::PermissionDenied => CliError::UnreadableInput {
            path,
            reason: "permission denied".to_string(),
        },
        ErrorKind::InvalidData => CliError::UnreadableInput {
            path,
            reason: "not valid UTF-8 text; expected one gene identifier per line".to_string(),
        },
        _ => CliError::Io(err),
    }
}
