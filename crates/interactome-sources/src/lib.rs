//! Interaction database source clients.

pub mod biogrid;
pub mod string_db;

use async_trait::async_trait;
use interactome_common::{InteractionQuery, InteractionRecord, Result};

pub use biogrid::BioGridClient;
pub use string_db::StringDbClient;

/// Common interface for all interaction source clients.
///
/// Each provider normalizes its own payload shape onto the uniform
/// [`InteractionRecord`] before returning; nothing downstream knows which
/// database a record came from.
#[async_trait]
pub trait InteractionSource: Send + Sync {
    /// Provider name used in errors and the analysis summary.
    fn name(&self) -> &'static str;

    /// Fetch interactions matching a query. A provider that responds
    /// successfully but with zero usable interactions fails with
    /// `EmptyResult`, so callers can tell "no data" from transport failure.
    async fn fetch(&self, query: &InteractionQuery) -> Result<Vec<InteractionRecord>>;
}
