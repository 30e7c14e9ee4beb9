//! HTTP client for the PANTHER web service
//!
//! Each operation issues exactly one request. Nothing is retried or cached.

use crate::api::{endpoints, types::*};
use crate::config::ClientConfig;
use crate::error::{CliError, Result};
use reqwest::header::ACCEPT;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

const GENOMES_ENDPOINT: &str = "supportedgenomes";
const DATASETS_ENDPOINT: &str = "supportedannotdatasets";
const ENRICHMENT_ENDPOINT: &str = "enrich/overrep";

/// Client for the PANTHER enrichment service
pub struct EnrichmentClient {
    client: Client,
    config: ClientConfig,
}

impl EnrichmentClient {
    /// Create a new client
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("panther-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// List the organisms PANTHER supports
    #[instrument(skip(self), fields(base_url = %self.config.base_url))]
    pub async fn list_genomes(&self) -> Result<Vec<Genome>> {
        let url = endpoints::supported_genomes_url(&self.config.base_url);

        let response = self.client.get(&url).send().await?;
        let body: SupportedGenomesResponse = decode(GENOMES_ENDPOINT, response).await?;
        let genomes = body.into_genomes();

        debug!(count = genomes.len(), "Fetched supported genomes");
        Ok(genomes)
    }

    /// List the annotation datasets PANTHER supports
    #[instrument(skip(self), fields(base_url = %self.config.base_url))]
    pub async fn list_annotation_datasets(&self) -> Result<Vec<AnnotationDataset>> {
        let url = endpoints::supported_annotation_datasets_url(&self.config.base_url);

        let response = self.client.get(&url).send().await?;
        let body: SupportedDatasetsResponse = decode(DATASETS_ENDPOINT, response).await?;
        let datasets = body.into_datasets();

        debug!(count = datasets.len(), "Fetched supported annotation datasets");
        Ok(datasets)
    }

    /// Run an overrepresentation test
    ///
    /// Fails before touching the network if the request uses a reference
    /// list, which this client does not support.
    #[instrument(
        skip(self, request),
        fields(
            organism = %request.organism,
            dataset = %request.annotation_data_set,
            test = %request.enrichment_test_type,
            correction = %request.correction,
        )
    )]
    pub async fn run_enrichment(&self, request: &EnrichmentRequest) -> Result<EnrichmentResult> {
        if request.uses_reference_list() {
            return Err(CliError::unsupported(
                "reference input list and reference organism are not supported",
            ));
        }

        let url = endpoints::overrepresentation_url(&self.config.base_url);

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .form(request)
            .send()
            .await?;

        decode(ENRICHMENT_ENDPOINT, response).await
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

/// Check the status and parse the JSON body
async fn decode<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        warn!(endpoint, status = status.as_u16(), "PANTHER request failed");
        return Err(CliError::service(endpoint, status));
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes)
        .map_err(|e| CliError::unexpected_response(endpoint, e.to_string()))
}
