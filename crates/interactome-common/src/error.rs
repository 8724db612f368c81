use thiserror::Error;

#[derive(Debug, Error)]
pub enum InteractomeError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Upstream service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("{provider} returned no interactions for '{query}'")]
    EmptyResult { provider: String, query: String },

    #[error("No nodes remain after filtering; cannot build a graph")]
    EmptyGraph,

    #[error("{measure} centrality did not converge within {iterations} iterations")]
    Convergence {
        measure: &'static str,
        iterations: usize,
    },

    #[error("Unknown ranking key: {0}")]
    InvalidRankingKey(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TSV parse error: {0}")]
    Tsv(#[from] csv::Error),

    #[error("Security error: {0}")]
    Security(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// Transport failures and non-success statuses are a domain condition for the
// source adapters, not a passthrough.
impl From<reqwest::Error> for InteractomeError {
    fn from(err: reqwest::Error) -> Self {
        Self::UpstreamUnavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, InteractomeError>;
