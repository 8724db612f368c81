//! Undirected interaction graph built from normalized records.
//!
//! Multiple records describing the same unordered pair collapse to one edge,
//! and self-interactions are dropped. Nodes only enter through surviving
//! edges, so every node has at least one neighbor.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::debug;

use interactome_common::{InteractionRecord, InteractomeError, Result};

/// A protein–protein interaction network.
///
/// Node weights are the protein IDs. Display labels live in a side map,
/// keyed by ID, with first-seen precedence when records disagree.
#[derive(Debug, Clone)]
pub struct PpiGraph {
    graph: UnGraph<String, ()>,
    node_map: HashMap<String, NodeIndex>,
    labels: HashMap<String, String>,
}

impl PpiGraph {
    /// Builds the graph from a record list. Fails with `EmptyGraph` when no
    /// node survives filtering (empty input, or self-interactions only).
    pub fn build(records: &[InteractionRecord]) -> Result<Self> {
        let mut graph = UnGraph::<String, ()>::new_undirected();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::new();
        let mut labels: HashMap<String, String> = HashMap::new();
        let mut self_loops = 0usize;

        for rec in records {
            if rec.is_self_interaction() {
                self_loops += 1;
                continue;
            }

            let a = Self::intern(&mut graph, &mut node_map, &rec.source_id);
            let b = Self::intern(&mut graph, &mut node_map, &rec.target_id);
            labels
                .entry(rec.source_id.clone())
                .or_insert_with(|| rec.source_label.clone());
            labels
                .entry(rec.target_id.clone())
                .or_insert_with(|| rec.target_label.clone());

            // update_edge is direction-blind on an undirected graph, so a
            // later (b, a) record finds the existing (a, b) edge.
            graph.update_edge(a, b, ());
        }

        if self_loops > 0 {
            debug!(count = self_loops, "Dropped self-interactions");
        }
        if graph.node_count() == 0 {
            return Err(InteractomeError::EmptyGraph);
        }

        Ok(Self {
            graph,
            node_map,
            labels,
        })
    }

    fn intern(
        graph: &mut UnGraph<String, ()>,
        node_map: &mut HashMap<String, NodeIndex>,
        id: &str,
    ) -> NodeIndex {
        *node_map
            .entry(id.to_string())
            .or_insert_with(|| graph.add_node(id.to_string()))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Protein IDs in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// Display label for a node ID.
    pub fn label(&self, id: &str) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_map.contains_key(id)
    }

    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        match (self.node_map.get(a), self.node_map.get(b)) {
            (Some(&ia), Some(&ib)) => self.graph.find_edge(ia, ib).is_some(),
            _ => false,
        }
    }

    /// Edge endpoints as ID pairs, one entry per undirected edge.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.graph.edge_references().map(|e| {
            (
                self.graph[e.source()].as_str(),
                self.graph[e.target()].as_str(),
            )
        })
    }

    pub fn degree_of(&self, id: &str) -> Option<usize> {
        self.node_map
            .get(id)
            .map(|&idx| self.graph.neighbors(idx).count())
    }

    /// Vec-indexed adjacency lists for the traversal-based measures.
    /// `Graph` node indices are contiguous, so position i is node i.
    pub(crate) fn adjacency(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.graph.node_count()];
        for e in self.graph.edge_references() {
            let (a, b) = (e.source().index(), e.target().index());
            adj[a].push(b);
            adj[b].push(a);
        }
        adj
    }

    pub(crate) fn id_at(&self, index: usize) -> &str {
        self.graph[NodeIndex::new(index)].as_str()
    }
}
