//! Hub selection: partition the centrality table into the top-ranked hub
//! proteins and the peripheral remainder.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::centrality::{CentralityKind, CentralityTable};

/// A hub protein with the score it was ranked by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedNode {
    pub id: String,
    pub score: f64,
}

/// The hub/peripheral partition of one table. The two sets are disjoint and
/// their union is the table's node set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubSet {
    pub ranked_by: CentralityKind,
    /// Top nodes, descending by score, ties ascending by ID.
    pub hubs: Vec<RankedNode>,
    /// Everything else, ascending by ID.
    pub peripheral: Vec<String>,
}

impl HubSet {
    pub fn hub_ids(&self) -> impl Iterator<Item = &str> {
        self.hubs.iter().map(|h| h.id.as_str())
    }

    pub fn is_hub(&self, id: &str) -> bool {
        self.hubs.iter().any(|h| h.id == id)
    }
}

/// Ranks the table by the chosen measure and takes the top `hub_count`
/// nodes (all of them when the graph is smaller). Ordering is
/// deterministic: descending score, then ascending node ID.
pub fn select(table: &CentralityTable, rank_by: CentralityKind, hub_count: usize) -> HubSet {
    let mut ranked: Vec<(&String, f64)> = table
        .iter()
        .map(|(id, row)| (id, row.get(rank_by)))
        .collect();

    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    let split = hub_count.min(ranked.len());
    let hubs = ranked[..split]
        .iter()
        .map(|(id, score)| RankedNode {
            id: (*id).clone(),
            score: *score,
        })
        .collect();

    let mut peripheral: Vec<String> =
        ranked[split..].iter().map(|(id, _)| (*id).clone()).collect();
    peripheral.sort();

    debug!(
        rank_by = rank_by.as_str(),
        hubs = split,
        peripheral = peripheral.len(),
        "Selected hub set"
    );

    HubSet {
        ranked_by: rank_by,
        hubs,
        peripheral,
    }
}
