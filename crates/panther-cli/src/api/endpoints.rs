//! API endpoint URL builders

/// Path prefix shared by every PANTHER web service endpoint
const SERVICE_ROOT: &str = "/services/oai/pantherdb";

/// Supported genomes lookup
pub fn supported_genomes_url(base_url: &str) -> String {
    format!("{}{}/supportedgenomes", base_url, SERVICE_ROOT)
}

/// Supported annotation datasets lookup
pub fn supported_annotation_datasets_url(base_url: &str) -> String {
    format!("{}{}/supportedannotdatasets", base_url, SERVICE_ROOT)
}

/// Overrepresentation (enrichment) test
pub fn overrepresentation_url(base_url: &str) -> String {
    format!("{}{}/enrich/overrep", base_url, SERVICE_ROOT)
}
