//! Degree centrality: node degree normalized by `|V| - 1`.

use std::collections::HashMap;

use crate::build::PpiGraph;

pub fn degree_centrality(graph: &PpiGraph) -> HashMap<String, f64> {
    let n = graph.node_count();
    let adj = graph.adjacency();
    let mut scores = HashMap::with_capacity(n);

    if n <= 1 {
        for id in graph.node_ids() {
            scores.insert(id.to_string(), 0.0);
        }
        return scores;
    }

    let denom = (n - 1) as f64;
    for (i, neighbors) in adj.iter().enumerate() {
        scores.insert(graph.id_at(i).to_string(), neighbors.len() as f64 / denom);
    }
    scores
}
