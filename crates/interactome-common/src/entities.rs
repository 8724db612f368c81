//! Shared data model: provider queries and the uniform interaction record.

use serde::{Deserialize, Serialize};

/// NCBI taxonomy identifiers for the organisms the analyzer exposes by
/// default. Any other taxonomy ID is accepted by the providers as-is.
pub mod taxon {
    pub const HUMAN: u32 = 9606;
    pub const MOUSE: u32 = 10090;
    pub const YEAST: u32 = 4932;
    /// BioGRID indexes budding yeast under the S288C strain taxon.
    pub const YEAST_S288C: u32 = 559292;
}

/// A single protein–protein interaction, normalized from a provider payload.
///
/// Records are immutable once emitted by a source adapter and are discarded
/// after graph construction. `source_id == target_id` (a self-interaction)
/// is legal here; the graph builder filters it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub source_id: String,
    pub target_id: String,
    /// Display name for the source protein, as the provider reported it.
    pub source_label: String,
    pub target_label: String,
    /// Combined confidence score where the provider reports one (STRING).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl InteractionRecord {
    pub fn is_self_interaction(&self) -> bool {
        self.source_id == self.target_id
    }
}

/// Parameters for a single provider fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionQuery {
    /// Gene or protein symbol to search for (e.g. "TP53").
    pub identifier: String,
    /// Organism/species taxonomy ID constraining the result set.
    pub taxon_id: u32,
    /// Maximum number of interactions to request, where the provider
    /// supports a limit (STRING). `None` falls back to the configured
    /// default.
    pub limit: Option<usize>,
}

impl InteractionQuery {
    pub fn new(identifier: impl Into<String>, taxon_id: u32) -> Self {
        Self {
            identifier: identifier.into(),
            taxon_id,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_interaction_detected() {
        let rec = InteractionRecord {
            source_id: "TP53".into(),
            target_id: "TP53".into(),
            source_label: "TP53".into(),
            target_label: "TP53".into(),
            confidence: None,
        };
        assert!(rec.is_self_interaction());
    }

    #[test]
    fn query_builder_sets_limit() {
        let q = InteractionQuery::new("TP53", taxon::HUMAN).with_limit(10);
        assert_eq!(q.identifier, "TP53");
        assert_eq!(q.taxon_id, 9606);
        assert_eq!(q.limit, Some(10));
    }
}
