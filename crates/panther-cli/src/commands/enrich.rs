//! Overrepresentation run
//!
//! Loads the gene list, checks the requested organism and dataset against
//! PANTHER's lookup lists, submits the test and writes the result.

use crate::api::{
    AnnotationDataset, Correction, EnrichmentClient, EnrichmentRequest, Genome, TestType,
};
use crate::config::ClientConfig;
use crate::error::{CliError, Result};
use crate::genes::GeneInput;
use crate::output;
use crate::progress;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Parameters of one enrichment run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichOptions {
    /// Gene list, one identifier per line
    pub gene_input_list: PathBuf,

    /// Taxon id of the organism
    pub taxon_id: String,

    /// Annotation dataset id
    pub dataset_id: String,

    /// Where the JSON result is written
    pub output_file: PathBuf,

    pub test_type: TestType,

    pub correction: Correction,

    /// Reference gene list (unsupported)
    pub ref_input_list: Option<String>,

    /// Reference organism (unsupported)
    pub ref_organism: Option<String>,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        Self {
            gene_input_list: PathBuf::from("input.txt"),
            taxon_id: "9606".to_string(),
            dataset_id: "GO:0008150".to_string(),
            output_file: PathBuf::from("output.json"),
            test_type: TestType::default(),
            correction: Correction::default(),
            ref_input_list: None,
            ref_organism: None,
        }
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichSummary {
    pub gene_count: usize,
    pub output_file: PathBuf,
}

/// Run the enrichment and report to the terminal
pub async fn run(config: ClientConfig, options: EnrichOptions) -> Result<()> {
    let client = EnrichmentClient::new(config)?;
    let summary = execute(&client, &options).await?;

    println!(
        "{} Enrichment results for {} gene(s) written to {}",
        "✓".green(),
        summary.gene_count,
        summary.output_file.display()
    );

    Ok(())
}

/// The run itself, without terminal output
pub async fn execute(client: &EnrichmentClient, options: &EnrichOptions) -> Result<EnrichSummary> {
    let genes = GeneInput::from_path(&options.gene_input_list)?;

    let request = EnrichmentRequest::new(
        genes.joined(),
        options.taxon_id.as_str(),
        options.dataset_id.as_str(),
    )
    .with_test_type(options.test_type)
    .with_correction(options.correction)
    .with_reference(options.ref_input_list.clone(), options.ref_organism.clone());

    // Reject before spending two lookups on a request that cannot be sent.
    if request.uses_reference_list() {
        return Err(CliError::unsupported(
            "reference input list and reference organism are not supported",
        ));
    }

    let delay = client.config().request_delay;

    pause(delay).await;
    let genomes = client.list_genomes().await?;

    pause(delay).await;
    let datasets = client.list_annotation_datasets().await?;

    validate_selection(&genomes, &datasets, &options.taxon_id, &options.dataset_id)?;

    info!(
        genes = genes.len(),
        organism = %options.taxon_id,
        dataset = %options.dataset_id,
        "Submitting overrepresentation test"
    );

    let spinner = progress::create_spinner("Running overrepresentation test...");
    let result = client.run_enrichment(&request).await;
    spinner.finish_and_clear();
    let result = result?;

    output::write_json(&options.output_file, &result)?;

    Ok(EnrichSummary {
        gene_count: genes.len(),
        output_file: options.output_file.clone(),
    })
}

/// Check the requested ids against the lookup lists
pub fn validate_selection(
    genomes: &[Genome],
    datasets: &[AnnotationDataset],
    taxon_id: &str,
    dataset_id: &str,
) -> Result<()> {
    let genome = genomes
        .iter()
        .find(|g| g.taxon_id == taxon_id)
        .ok_or_else(|| CliError::UnknownTaxon(taxon_id.to_string()))?;

    let dataset = datasets
        .iter()
        .find(|d| d.id == dataset_id)
        .ok_or_else(|| CliError::UnknownDataset(dataset_id.to_string()))?;

    debug!(
        taxon_id,
        genome = genome.name().unwrap_or("-"),
        dataset_id,
        dataset = dataset.label().unwrap_or("-"),
        "Selection validated"
    );

    Ok(())
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::TempDir;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn genome(taxon_id: &str) -> Genome {
        serde_json::from_value(json!({"taxon_id": taxon_id, "name": "organism"})).unwrap()
    }

    fn dataset(id: &str) -> AnnotationDataset {
        serde_json::from_value(json!({"id": id, "label": "dataset"})).unwrap()
    }

    async fn mount_lookups(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/services/oai/pantherdb/supportedgenomes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "search": {"output": {"genomes": {"genome": [
                    {"name": "human", "taxon_id": 9606},
                    {"name": "mouse", "taxon_id": 10090}
                ]}}}
            })))
            .mount(server)
            .await;

        Mock::given(method("GET"))
            .and(path("/services/oai/pantherdb/supportedannotdatasets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "search": {"annotation_data_sets": {"annotation_data_type": [
                    {"id": "GO:0008150", "label": "biological_process"}
                ]}}
            })))
            .mount(server)
            .await;
    }

    fn options_in(dir: &TempDir, genes: &str) -> EnrichOptions {
        let input = dir.path().join("input.txt");
        let mut file = std::fs::File::create(&input).unwrap();
        file.write_all(genes.as_bytes()).unwrap();

        EnrichOptions {
            gene_input_list: input,
            output_file: dir.path().join("output.json"),
            ..EnrichOptions::default()
        }
    }

    fn client_for(server: &MockServer) -> EnrichmentClient {
        let config = ClientConfig::new(server.uri()).with_request_delay(Duration::ZERO);
        EnrichmentClient::new(config).unwrap()
    }

    #[test]
    fn test_validate_selection() {
        let genomes = [genome("9606"), genome("10090")];
        let datasets = [dataset("GO:0008150")];

        assert!(validate_selection(&genomes, &datasets, "10090", "GO:0008150").is_ok());
        assert!(matches!(
            validate_selection(&genomes, &datasets, "7227", "GO:0008150"),
            Err(CliError::UnknownTaxon(id)) if id == "7227"
        ));
        assert!(matches!(
            validate_selection(&genomes, &datasets, "9606", "GO:0003674"),
            Err(CliError::UnknownDataset(id)) if id == "GO:0003674"
        ));
    }

    #[tokio::test]
    async fn test_execute_writes_result() {
        let server = MockServer::start().await;
        mount_lookups(&server).await;
        Mock::given(method("POST"))
            .and(path("/services/oai/pantherdb/enrich/overrep"))
            .and(body_string_contains("geneInputList=GENE1%2CGENE2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"results": {"result": []}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let options = options_in(&dir, "GENE1\nGENE2\n");

        let summary = execute(&client_for(&server), &options).await.unwrap();
        assert_eq!(summary.gene_count, 2);

        let written = std::fs::read_to_string(&options.output_file).unwrap();
        assert_eq!(
            written,
            "{\n    \"results\": {\n        \"result\": []\n    }\n}"
        );
    }

    #[tokio::test]
    async fn test_unknown_taxon_skips_enrichment() {
        let server = MockServer::start().await;
        mount_lookups(&server).await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let options = EnrichOptions {
            taxon_id: "559292".to_string(),
            ..options_in(&dir, "GENE1\n")
        };

        let err = execute(&client_for(&server), &options).await.unwrap_err();
        assert!(matches!(err, CliError::UnknownTaxon(_)));
        assert!(!options.output_file.exists());
    }

    #[tokio::test]
    async fn test_reference_list_makes_no_requests() {
        let server = MockServer::start().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let options = EnrichOptions {
            ref_organism: Some("10090".to_string()),
            ..options_in(&dir, "GENE1\n")
        };

        let err = execute(&client_for(&server), &options).await.unwrap_err();
        assert!(matches!(err, CliError::Unsupported(_)));
    }

    #[tokio::test]
    async fn test_enrichment_failure_leaves_no_output() {
        let server = MockServer::start().await;
        mount_lookups(&server).await;
        Mock::given(method("POST"))
            .and(path("/services/oai/pantherdb/enrich/overrep"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let options = options_in(&dir, "GENE1\n");

        let err = execute(&client_for(&server), &options).await.unwrap_err();
        assert!(matches!(err, CliError::Service { status: 502, .. }));
        assert!(!options.output_file.exists());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_waits_for_the_configured_delay() {
        let start = tokio::time::Instant::now();
        pause(Duration::from_secs(5)).await;
        assert_eq!(start.elapsed(), Duration::from_secs(5));

        let start = tokio::time::Instant::now();
        pause(Duration::ZERO).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    // Real clock: a paused clock would auto-advance into the HTTP timeout
    // while the mock server's socket I/O is pending.
    #[tokio::test]
    async fn test_execute_paces_both_lookups() {
        let server = MockServer::start().await;
        mount_lookups(&server).await;
        Mock::given(method("POST"))
            .and(path("/services/oai/pantherdb/enrich/overrep"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": {}})))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let options = options_in(&dir, "GENE1\n");
        let delay = Duration::from_millis(150);
        let config = ClientConfig::new(server.uri()).with_request_delay(delay);
        let client = EnrichmentClient::new(config).unwrap();

        let start = std::time::Instant::now();
        execute(&client, &options).await.unwrap();

        assert!(start.elapsed() >= delay * 2, "elapsed {:?}", start.elapsed());
        assert_eq!(server.received_requests().await.unwrap().len(), 3);
    }
}
