//! BioGRID REST API client.
//!
//! Endpoint: https://webservice.thebiogrid.org/interactions
//!
//! The JSON payload is an object keyed by BioGRID interaction ID; each entry
//! carries the official gene symbols of both interactors. Access requires a
//! free key from https://webservice.thebiogrid.org.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument, warn};

use interactome_common::sandbox::SandboxClient as Client;
use interactome_common::{
    Config, InteractionQuery, InteractionRecord, InteractomeError, Result,
};

use crate::InteractionSource;

pub struct BioGridClient {
    client: Client,
    base_url: String,
    access_key: Option<SecretString>,
}

impl BioGridClient {
    pub fn new(config: &Config, access_key: Option<SecretString>) -> Result<Self> {
        Ok(Self {
            client: Client::new(std::time::Duration::from_secs(config.http.timeout_secs))?,
            base_url: config.sources.biogrid_url.clone(),
            access_key,
        })
    }
}

/// Normalize a BioGRID interactions payload into uniform records.
///
/// BioGRID keys the graph by official gene symbol, so the uppercased symbol
/// doubles as the node ID while the verbatim symbol stays as the label.
/// Entries missing either symbol are skipped.
pub fn normalize_biogrid(payload: &serde_json::Value) -> Vec<InteractionRecord> {
    let Some(map) = payload.as_object() else {
        return Vec::new();
    };

    let mut records = Vec::with_capacity(map.len());
    for (interaction_id, entry) in map {
        let symbols = (
            entry["OFFICIAL_SYMBOL_A"].as_str(),
            entry["OFFICIAL_SYMBOL_B"].as_str(),
        );
        let (Some(symbol_a), Some(symbol_b)) = symbols else {
            warn!(%interaction_id, "Skipping BioGRID entry without official symbols");
            continue;
        };

        records.push(InteractionRecord {
            source_id: symbol_a.to_uppercase(),
            target_id: symbol_b.to_uppercase(),
            source_label: symbol_a.to_string(),
            target_label: symbol_b.to_string(),
            confidence: None,
        });
    }
    records
}

#[async_trait]
impl InteractionSource for BioGridClient {
    fn name(&self) -> &'static str {
        "BioGRID"
    }

    #[instrument(skip(self))]
    async fn fetch(&self, query: &InteractionQuery) -> Result<Vec<InteractionRecord>> {
        let key = self.access_key.as_ref().ok_or_else(|| {
            InteractomeError::Authentication("BioGRID requires an access key".to_string())
        })?;

        let organism = query.taxon_id.to_string();
        let resp = self
            .client
            .get(&self.base_url)?
            .query(&[
                ("accessKey", key.expose_secret()),
                ("format", "json"),
                ("searchNames", "true"),
                ("geneList", query.identifier.as_str()),
                ("organism", organism.as_str()),
                ("searchbiogridids", "true"),
                ("includeInteractors", "true"),
            ])
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(InteractomeError::Authentication(format!(
                "BioGRID rejected the access key (status {})",
                status
            )));
        }
        if !status.is_success() {
            return Err(InteractomeError::UpstreamUnavailable(format!(
                "BioGRID returned status {}",
                status
            )));
        }

        let payload = resp.json::<serde_json::Value>().await?;
        let records = normalize_biogrid(&payload);
        debug!(count = records.len(), "BioGRID returned interactions");

        if records.is_empty() {
            return Err(InteractomeError::EmptyResult {
                provider: self.name().to_string(),
                query: query.identifier.clone(),
            });
        }
        Ok(records)
    }
}
