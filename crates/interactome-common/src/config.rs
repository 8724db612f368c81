//! Configuration loading for Interactome.
//! Reads interactome.toml from the current directory or the path in the
//! INTERACTOME_CONFIG env var. Every field has a default, so embedders can
//! run with no file at all.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{InteractomeError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Per-request timeout. The fetch is the only blocking point in the
    /// pipeline, so this bounds a whole query.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 { 30 }

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: default_timeout_secs() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_biogrid_url")]
    pub biogrid_url: String,
    #[serde(default = "default_string_url")]
    pub string_url: String,
    /// Interaction cap passed to STRING when the query does not set one.
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

fn default_biogrid_url() -> String { "https://webservice.thebiogrid.org/interactions".to_string() }
fn default_string_url()  -> String { "https://string-db.org/api/tsv/network".to_string() }
fn default_limit()       -> usize { 20 }

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            biogrid_url: default_biogrid_url(),
            string_url: default_string_url(),
            default_limit: default_limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// How many top-ranked proteins form the hub set.
    #[serde(default = "default_hub_count")]
    pub hub_count: usize,
    #[serde(default)]
    pub pagerank: PowerIterationConfig,
    #[serde(default)]
    pub eigenvector: PowerIterationConfig,
    /// PageRank damping factor.
    #[serde(default = "default_damping")]
    pub damping: f64,
}

fn default_hub_count() -> usize { 5 }
fn default_damping()   -> f64 { 0.85 }

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            hub_count: default_hub_count(),
            pagerank: PowerIterationConfig::default(),
            eigenvector: PowerIterationConfig::default(),
            damping: default_damping(),
        }
    }
}

/// Iteration bounds shared by the two power-iteration measures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerIterationConfig {
    #[serde(default = "default_max_iter")]
    pub max_iter: usize,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_max_iter()  -> usize { 100 }
fn default_tolerance() -> f64 { 1e-6 }

impl Default for PowerIterationConfig {
    fn default() -> Self {
        Self {
            max_iter: default_max_iter(),
            tolerance: default_tolerance(),
        }
    }
}

impl Config {
    /// Loads configuration from INTERACTOME_CONFIG, falling back to
    /// ./interactome.toml, falling back to defaults.
    pub fn load() -> Result<Self> {
        let path = std::env::var("INTERACTOME_CONFIG")
            .unwrap_or_else(|_| "interactome.toml".to_string());
        if Path::new(&path).exists() {
            Self::from_path(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            InteractomeError::Config(format!(
                "Failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        toml::from_str(&raw)
            .map_err(|e| InteractomeError::Config(format!("Invalid config: {}", e)))
    }
}
