//! API request and response types
//!
//! Mirrors the JSON documents of the PANTHER web service. Lookup records
//! only type the identifier the client validates against; every other field
//! is kept as raw JSON.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Enrichment result document, passed through untouched
pub type EnrichmentResult = Value;

/// A list the service sometimes collapses to a bare object when it has one
/// element
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Accept an identifier encoded as either a JSON string or number
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number identifier, got {}",
            other
        ))),
    }
}

// ============================================================================
// Supported genomes
// ============================================================================

/// Organism supported by PANTHER
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Genome {
    /// NCBI taxon id, e.g. "9606"
    #[serde(deserialize_with = "string_or_number")]
    pub taxon_id: String,

    /// Remaining descriptive fields (name, short_name, version, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Genome {
    /// Display name, if the service sent one
    pub fn name(&self) -> Option<&str> {
        self.extra
            .get("long_name")
            .or_else(|| self.extra.get("name"))
            .and_then(Value::as_str)
    }
}

/// `GET supportedgenomes` response
#[derive(Debug, Clone, Deserialize)]
pub struct SupportedGenomesResponse {
    pub search: GenomeSearch,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenomeSearch {
    pub output: GenomeOutput,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenomeOutput {
    pub genomes: GenomeList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenomeList {
    pub genome: OneOrMany<Genome>,
}

impl SupportedGenomesResponse {
    pub fn into_genomes(self) -> Vec<Genome> {
        self.search.output.genomes.genome.into()
    }
}

// ============================================================================
// Supported annotation datasets
// ============================================================================

/// Annotation or ontology dataset supported by PANTHER
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnnotationDataset {
    /// Dataset id, e.g. "GO:0008150"
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    /// Remaining descriptive fields (label, description, version, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnnotationDataset {
    /// Human readable label, if the service sent one
    pub fn label(&self) -> Option<&str> {
        self.extra.get("label").and_then(Value::as_str)
    }
}

/// `GET supportedannotdatasets` response
#[derive(Debug, Clone, Deserialize)]
pub struct SupportedDatasetsResponse {
    pub search: DatasetSearch,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetSearch {
    pub annotation_data_sets: DatasetList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetList {
    pub annotation_data_type: OneOrMany<AnnotationDataset>,
}

impl SupportedDatasetsResponse {
    pub fn into_datasets(self) -> Vec<AnnotationDataset> {
        self.search.annotation_data_sets.annotation_data_type.into()
    }
}

// ============================================================================
// Overrepresentation test
// ============================================================================

/// Statistical test used for overrepresentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
#[value(rename_all = "UPPER")]
pub enum TestType {
    #[default]
    Fisher,
    Binomial,
}

impl std::fmt::Display for TestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestType::Fisher => f.write_str("FISHER"),
            TestType::Binomial => f.write_str("BINOMIAL"),
        }
    }
}

/// Multiple-testing correction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
#[value(rename_all = "UPPER")]
pub enum Correction {
    #[default]
    Fdr,
    Bonferroni,
    None,
}

impl std::fmt::Display for Correction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Correction::Fdr => f.write_str("FDR"),
            Correction::Bonferroni => f.write_str("BONFERRONI"),
            Correction::None => f.write_str("NONE"),
        }
    }
}

/// `POST enrich/overrep` form body
///
/// The reference list fields exist so callers can express them, but the
/// client rejects any request that sets them; they are never sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichmentRequest {
    /// Comma-joined gene identifiers
    #[serde(rename = "geneInputList")]
    pub gene_input_list: String,

    /// Taxon id of the organism
    pub organism: String,

    /// Annotation dataset id
    #[serde(rename = "annotDataSet")]
    pub annotation_data_set: String,

    #[serde(rename = "enrichmentTestType")]
    pub enrichment_test_type: TestType,

    pub correction: Correction,

    #[serde(skip)]
    pub ref_input_list: Option<String>,

    #[serde(skip)]
    pub ref_organism: Option<String>,
}

impl EnrichmentRequest {
    /// Request with default test (FISHER) and correction (FDR)
    pub fn new(
        gene_input_list: impl Into<String>,
        organism: impl Into<String>,
        annotation_data_set: impl Into<String>,
    ) -> Self {
        Self {
            gene_input_list: gene_input_list.into(),
            organism: organism.into(),
            annotation_data_set: annotation_data_set.into(),
            enrichment_test_type: TestType::default(),
            correction: Correction::default(),
            ref_input_list: None,
            ref_organism: None,
        }
    }

    pub fn with_test_type(mut self, test_type: TestType) -> Self {
        self.enrichment_test_type = test_type;
        self
    }

    pub fn with_correction(mut self, correction: Correction) -> Self {
        self.correction = correction;
        self
    }

    pub fn with_reference(
        mut self,
        ref_input_list: Option<String>,
        ref_organism: Option<String>,
    ) -> Self {
        self.ref_input_list = ref_input_list;
        self.ref_organism = ref_organism;
        self
    }

    /// Whether any reference-list parameter is set
    pub fn uses_reference_list(&self) -> bool {
        self.ref_input_list.is_some() || self.ref_organism.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_genomes_response_numeric_taxon_ids() {
        let body = json!({
            "search": {
                "product": {"source": "PANTHER", "version": "19.0"},
                "output": {
                    "genomes": {
                        "genome": [
                            {"name": "human", "taxon_id": 9606, "short_name": "HUMAN"},
                            {"name": "mouse", "taxon_id": "10090", "short_name": "MOUSE"}
                        ]
                    }
                }
            }
        });

        let response: SupportedGenomesResponse = serde_json::from_value(body).unwrap();
        let genomes = response.into_genomes();
        assert_eq!(genomes.len(), 2);
        assert_eq!(genomes[0].taxon_id, "9606");
        assert_eq!(genomes[1].taxon_id, "10090");
        assert_eq!(genomes[0].name(), Some("human"));
        assert_eq!(genomes[0].extra["short_name"], "HUMAN");
    }

    #[test]
    fn test_single_genome_object() {
        let body = json!({
            "search": {"output": {"genomes": {"genome": {"name": "human", "taxon_id": 9606}}}}
        });

        let response: SupportedGenomesResponse = serde_json::from_value(body).unwrap();
        let genomes = response.into_genomes();
        assert_eq!(genomes.len(), 1);
        assert_eq!(genomes[0].taxon_id, "9606");
    }

    #[test]
    fn test_genome_without_taxon_id_is_rejected() {
        let body = json!({
            "search": {"output": {"genomes": {"genome": [{"name": "human"}]}}}
        });
        assert!(serde_json::from_value::<SupportedGenomesResponse>(body).is_err());
    }

    #[test]
    fn test_datasets_response() {
        let body = json!({
            "search": {
                "annotation_data_sets": {
                    "annotation_data_type": [
                        {"id": "GO:0008150", "label": "biological_process", "version": "2024-01-17"},
                        {"id": "ANNOT_TYPE_ID_PANTHER_PATHWAY", "label": "PANTHER Pathways"}
                    ]
                }
            }
        });

        let response: SupportedDatasetsResponse = serde_json::from_value(body).unwrap();
        let datasets = response.into_datasets();
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0].id, "GO:0008150");
        assert_eq!(datasets[0].label(), Some("biological_process"));
        assert_eq!(datasets[1].id, "ANNOT_TYPE_ID_PANTHER_PATHWAY");
    }

    #[test]
    fn test_request_form_fields() {
        let request = EnrichmentRequest::new("GENE1,GENE2", "9606", "GO:0008150")
            .with_test_type(TestType::Binomial)
            .with_correction(Correction::Bonferroni)
            .with_reference(Some("REF1".into()), None);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "geneInputList": "GENE1,GENE2",
                "organism": "9606",
                "annotDataSet": "GO:0008150",
                "enrichmentTestType": "BINOMIAL",
                "correction": "BONFERRONI"
            })
        );
        assert!(request.uses_reference_list());
    }

    #[test]
    fn test_request_defaults() {
        let request = EnrichmentRequest::new("A", "9606", "GO:0008150");
        assert_eq!(request.enrichment_test_type, TestType::Fisher);
        assert_eq!(request.correction, Correction::Fdr);
        assert!(!request.uses_reference_list());
    }

    #[test]
    fn test_parameter_display_matches_wire_format() {
        assert_eq!(TestType::Fisher.to_string(), "FISHER");
        assert_eq!(Correction::None.to_string(), "NONE");
        assert_eq!(
            serde_json::to_value(Correction::None).unwrap(),
            json!("NONE")
        );
    }
}
