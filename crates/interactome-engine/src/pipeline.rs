//! End-to-end analysis pipeline.
//!
//! Orchestrates the full flow for a single query:
//!   1. Fetch interactions from the chosen provider
//!   2. Build the deduplicated undirected graph
//!   3. Compute the five centrality measures
//!   4. Select hub proteins for the requested ranking
//!
//! Every run is self-contained: all derived structures are freshly built,
//! owned by the caller, and never shared between queries. Fetch and build
//! failures abort the run; centrality warnings ride along in the result.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use interactome_common::{Config, InteractionQuery, Result};
use interactome_graph::{
    centrality, hubs, CentralityKind, CentralityTable, CentralityWarning, HubSet, PpiGraph,
};
use interactome_sources::InteractionSource;

/// Runs the query pipeline with one loaded configuration.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: Config,
}

impl Analyzer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches interactions from `source` and analyzes the resulting
    /// network. `rank_by` names the measure that orders the hub set; an
    /// unrecognized name fails with `InvalidRankingKey` before anything is
    /// fetched.
    #[instrument(skip(self, source, query), fields(identifier = %query.identifier))]
    pub async fn analyze(
        &self,
        source: &dyn InteractionSource,
        query: &InteractionQuery,
        rank_by: &str,
    ) -> Result<NetworkAnalysis> {
        let rank_by: CentralityKind = rank_by.parse()?;

        let records = source.fetch(query).await?;
        info!(
            provider = source.name(),
            count = records.len(),
            "Fetched interactions"
        );

        let graph = PpiGraph::build(&records)?;
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Graph built"
        );

        let report = centrality::compute(&graph, &self.config.analysis);
        let hub_set = hubs::select(&report.table, rank_by, self.config.analysis.hub_count);

        Ok(NetworkAnalysis::assemble(
            source.name(),
            query.clone(),
            records.len(),
            &graph,
            report.table,
            report.warnings,
            hub_set,
        ))
    }
}

/// A node as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeView {
    pub id: String,
    pub label: String,
}

/// The complete output surface of one query: everything the presentation
/// layer needs to draw the network, the score table, and the hub highlight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkAnalysis {
    pub provider: String,
    pub query: InteractionQuery,
    /// Interactions the provider reported, before dedup and filtering.
    pub record_count: usize,
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes: Vec<NodeView>,
    /// Unique undirected edges as ID pairs, lexicographically oriented.
    pub edges: Vec<(String, String)>,
    pub centrality: CentralityTable,
    pub warnings: Vec<CentralityWarning>,
    pub hubs: HubSet,
}

impl NetworkAnalysis {
    fn assemble(
        provider: &str,
        query: InteractionQuery,
        record_count: usize,
        graph: &PpiGraph,
        centrality: CentralityTable,
        warnings: Vec<CentralityWarning>,
        hubs: HubSet,
    ) -> Self {
        let mut nodes: Vec<NodeView> = graph
            .node_ids()
            .map(|id| NodeView {
                id: id.to_string(),
                label: graph.label(id).unwrap_or(id).to_string(),
            })
            .collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));

        let mut edges: Vec<(String, String)> = graph
            .edges()
            .map(|(a, b)| {
                if a <= b {
                    (a.to_string(), b.to_string())
                } else {
                    (b.to_string(), a.to_string())
                }
            })
            .collect();
        edges.sort();

        Self {
            provider: provider.to_string(),
            query,
            record_count,
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            nodes,
            edges,
            centrality,
            warnings,
            hubs,
        }
    }
}
