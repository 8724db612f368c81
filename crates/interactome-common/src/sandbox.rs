use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use tracing::warn;
use url::Url;

use crate::error::{InteractomeError, Result};

/// An HTTP client capped to the provider hosts this workspace talks to.
/// Requests to any other host are refused before they leave the process.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    /// Creates a client allowing only the interaction database hosts.
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut allowlist = HashSet::new();
        let domains = vec![
            "webservice.thebiogrid.org", // BioGRID REST
            "string-db.org",             // STRING REST
        ];
        for d in domains {
            allowlist.insert(d.to_string());
        }

        let client = ClientBuilder::new()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                InteractomeError::Config(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist. Needed for STRING's
    /// versioned mirrors (e.g. version-12-0.string-db.org are subdomains and
    /// already pass; a self-hosted mirror is not).
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Validates a URL against the current allowlist. Subdomains of an
    /// allowed host are permitted.
    pub fn is_allowed(&self, url: &str) -> bool {
        if let Ok(parsed) = Url::parse(url) {
            if let Some(host) = parsed.host_str() {
                for allowed in &self.allowlist {
                    if host == allowed || host.ends_with(&format!(".{}", allowed)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Exposes the inner `reqwest::Client` builder pattern for GET requests.
    /// Both providers are read-only; no other method is exposed.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder> {
        if !self.is_allowed(url) {
            warn!(%url, "Refusing request to non-allowlisted host");
            return Err(InteractomeError::Security(format!(
                "Host not in allowlist for URL {}",
                url
            )));
        }
        Ok(self.client.get(url))
    }
}
