//! Error types for the PANTHER CLI
//!
//! Every variant is user-facing: the message says what failed and, where
//! possible, what to do about it. Variants are grouped into an [`ErrorKind`]
//! so the binary can exit with a distinct code per failure class.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Failure class of a [`CliError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input from the user: gene file, taxon id, dataset id
    InputValidation,
    /// A feature the service client does not support
    UnsupportedFeature,
    /// The PANTHER service answered with a non-success status
    Service,
    /// The request never got a usable answer (DNS, TLS, timeout, bad body)
    Network,
    /// Local failures: file system, configuration, serialization
    Internal,
}

impl ErrorKind {
    /// Process exit code for this class
    ///
    /// 2 is left to clap for usage errors.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::InputValidation => 3,
            ErrorKind::UnsupportedFeature => 4,
            ErrorKind::Service => 5,
            ErrorKind::Network => 6,
            ErrorKind::Internal => 1,
        }
    }
}

/// Comprehensive error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Gene input file does not exist
    #[error("Gene input file not found: '{0}'. Verify the path passed to --gene_input_list exists and is readable.")]
    FileNotFound(String),

    /// Gene list is larger than the service accepts
    #[error("Input list contains {count} genes, more than the {limit} supported by the PANTHER API. Split the list and submit it in parts.")]
    TooManyGenes { count: usize, limit: usize },

    /// Gene input file exists but cannot be used
    #[error("Cannot read gene input file '{path}': {reason}.")]
    UnreadableInput { path: String, reason: String },

    /// Gene list contains no identifiers
    #[error("Gene input file '{0}' contains no gene identifiers.")]
    EmptyGeneList(String),

    /// Requested taxon id is not a supported genome
    #[error("Taxon ID '{0}' not found among the genomes supported by PANTHER. Human is 9606, mouse is 10090.")]
    UnknownTaxon(String),

    /// Requested dataset id is not a supported annotation dataset
    #[error("Dataset ID '{0}' not found among the annotation datasets supported by PANTHER (e.g. GO:0008150 for biological process).")]
    UnknownDataset(String),

    /// Caller asked for something the client does not implement
    #[error("Not implemented: {0}")]
    Unsupported(String),

    /// PANTHER answered with a non-success HTTP status
    #[error("PANTHER service error: {endpoint} returned HTTP {status}")]
    Service { endpoint: String, status: u16 },

    /// PANTHER answered, but not with the document shape expected
    #[error("Unexpected response from {endpoint}: {message}")]
    UnexpectedResponse { endpoint: String, message: String },

    /// HTTP request failed
    #[error("Network request failed: {0}. Check your internet connection and the --base-url setting.")]
    Http(#[from] reqwest::Error),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables.")]
    Config(String),
}

impl CliError {
    /// Create an unsupported-feature error
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Create a service error from an endpoint name and HTTP status
    pub fn service(endpoint: impl Into<String>, status: reqwest::StatusCode) -> Self {
        Self::Service {
            endpoint: endpoint.into(),
            status: status.as_u16(),
        }
    }

    /// Create an unexpected-response error
    pub fn unexpected_response(endpoint: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            endpoint: endpoint.into(),
            message: msg.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Failure class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound(_)
            | Self::TooManyGenes { .. }
            | Self::UnreadableInput { .. }
            | Self::EmptyGeneList(_)
            | Self::UnknownTaxon(_)
            | Self::UnknownDataset(_) => ErrorKind::InputValidation,
            Self::Unsupported(_) => ErrorKind::UnsupportedFeature,
            Self::Service { .. } => ErrorKind::Service,
            Self::UnexpectedResponse { .. } | Self::Http(_) => ErrorKind::Network,
            Self::Io(_) | Self::Json(_) | Self::Config(_) => ErrorKind::Internal,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }
}
