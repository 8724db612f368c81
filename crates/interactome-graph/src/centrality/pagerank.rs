//! PageRank over the undirected interaction graph.
//!
//! Standard damped random walk, each undirected edge walkable in both
//! directions:
//!
//! ```text
//! PR(v) = (1 - d) / N + d * Σ PR(u) / deg(u)   for each neighbor u of v
//! ```
//!
//! Power iteration to an L1 tolerance. Every node in a built graph has at
//! least one neighbor, so no dangling-mass redistribution is needed and the
//! scores keep summing to 1.

use std::collections::HashMap;

use interactome_common::config::PowerIterationConfig;

use crate::build::PpiGraph;
use crate::centrality::{CentralityKind, ConvergenceFailure};

pub fn pagerank(
    graph: &PpiGraph,
    damping: f64,
    config: &PowerIterationConfig,
) -> Result<HashMap<String, f64>, ConvergenceFailure> {
    let n = graph.node_count();

    // Single node: no walk to take. All-zero by the engine's degenerate-graph
    // rule, same as every other measure.
    if n <= 1 {
        return Ok(graph.node_ids().map(|id| (id.to_string(), 0.0)).collect());
    }

    let adj = graph.adjacency();
    let n_f64 = n as f64;
    let base = (1.0 - damping) / n_f64;

    let mut ranks = vec![1.0 / n_f64; n];
    let mut converged = false;

    for _ in 0..config.max_iter {
        let mut next = vec![base; n];
        for (u, neighbors) in adj.iter().enumerate() {
            let share = damping * ranks[u] / neighbors.len() as f64;
            for &v in neighbors {
                next[v] += share;
            }
        }

        let diff: f64 = ranks
            .iter()
            .zip(next.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();

        ranks = next;

        if diff < config.tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        return Err(ConvergenceFailure {
            measure: CentralityKind::Pagerank,
            iterations: config.max_iter,
        });
    }

    Ok((0..n)
        .map(|i| (graph.id_at(i).to_string(), ranks[i]))
        .collect())
}
