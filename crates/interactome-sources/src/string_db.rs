//! STRING REST API client.
//!
//! Endpoint: https://string-db.org/api/tsv/network
//!
//! STRING's canonical network payload is tab-separated. Each row carries the
//! stable string IDs, the preferred display names, and the combined
//! confidence score of one functional association. No credential is needed.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use interactome_common::sandbox::SandboxClient as Client;
use interactome_common::{
    Config, InteractionQuery, InteractionRecord, InteractomeError, Result,
};

use crate::InteractionSource;

pub struct StringDbClient {
    client: Client,
    base_url: String,
    default_limit: usize,
}

impl StringDbClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: Client::new(std::time::Duration::from_secs(config.http.timeout_secs))?,
            base_url: config.sources.string_url.clone(),
            default_limit: config.sources.default_limit,
        })
    }
}

/// One row of the `api/tsv/network` payload. Columns beyond these (the
/// per-channel sub-scores) are ignored.
#[derive(Debug, Deserialize)]
struct NetworkRow {
    #[serde(rename = "stringId_A")]
    string_id_a: String,
    #[serde(rename = "stringId_B")]
    string_id_b: String,
    #[serde(rename = "preferredName_A")]
    preferred_name_a: String,
    #[serde(rename = "preferredName_B")]
    preferred_name_b: String,
    score: Option<f64>,
}

/// Normalize a STRING TSV payload into uniform records.
/// Rows that fail to deserialize are skipped.
pub fn normalize_string_tsv(body: &str) -> Vec<InteractionRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_reader(body.as_bytes());

    let mut records = Vec::new();
    for row in reader.deserialize::<NetworkRow>() {
        match row {
            Ok(row) => records.push(InteractionRecord {
                source_id: row.string_id_a,
                target_id: row.string_id_b,
                source_label: row.preferred_name_a,
                target_label: row.preferred_name_b,
                confidence: row.score,
            }),
            Err(e) => {
                warn!(error = %e, "Skipping malformed STRING row");
            }
        }
    }
    records
}

#[async_trait]
impl InteractionSource for StringDbClient {
    fn name(&self) -> &'static str {
        "STRING"
    }

    #[instrument(skip(self))]
    async fn fetch(&self, query: &InteractionQuery) -> Result<Vec<InteractionRecord>> {
        let species = query.taxon_id.to_string();
        let limit = query.limit.unwrap_or(self.default_limit).to_string();

        let resp = self
            .client
            .get(&self.base_url)?
            .query(&[
                ("identifiers", query.identifier.as_str()),
                ("species", species.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(InteractomeError::UpstreamUnavailable(format!(
                "STRING returned status {}",
                status
            )));
        }

        let body = resp.text().await?;
        let records = normalize_string_tsv(&body);
        debug!(count = records.len(), "STRING returned interactions");

        if records.is_empty() {
            return Err(InteractomeError::EmptyResult {
                provider: self.name().to_string(),
                query: query.identifier.clone(),
            });
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "stringId_A\tstringId_B\tpreferredName_A\tpreferredName_B\tncbiTaxonId\tscore\tnscore\tfscore\tpscore\tascore\tescore\tdscore\ttscore";

    #[test]
    fn parses_network_rows() {
        let body = format!(
            "{HEADER}\n\
             9606.ENSP00000269305\t9606.ENSP00000258149\tTP53\tMDM2\t9606\t0.999\t0\t0\t0.1\t0.06\t0.9\t0.9\t0.8\n\
             9606.ENSP00000269305\t9606.ENSP00000263253\tTP53\tEP300\t9606\t0.987\t0\t0\t0.1\t0.05\t0.8\t0.9\t0.7\n"
        );

        let records = normalize_string_tsv(&body);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source_id, "9606.ENSP00000269305");
        assert_eq!(records[0].source_label, "TP53");
        assert_eq!(records[0].target_label, "MDM2");
        assert_eq!(records[0].confidence, Some(0.999));
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let body = format!(
            "{HEADER}\n\
             9606.ENSP00000269305\t9606.ENSP00000258149\tTP53\tMDM2\t9606\t0.999\t0\t0\t0.1\t0.06\t0.9\t0.9\t0.8\n\
             not-a-real-row\n"
        );

        let records = normalize_string_tsv(&body);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn empty_body_yields_nothing() {
        assert!(normalize_string_tsv("").is_empty());
        // Header only, no data rows.
        assert!(normalize_string_tsv(HEADER).is_empty());
    }
}
