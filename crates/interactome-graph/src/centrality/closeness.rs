//! Closeness centrality over unweighted shortest paths.
//!
//! Uses the Wasserman–Faust variant: the reciprocal distance sum is scaled
//! by the fraction of the graph the node can reach, so scores stay
//! comparable on disconnected graphs. Unreachable pairs contribute nothing;
//! a node with no reachable neighbors scores 0.

use std::collections::{HashMap, VecDeque};

use crate::build::PpiGraph;

pub fn closeness_centrality(graph: &PpiGraph) -> HashMap<String, f64> {
    let n = graph.node_count();
    let adj = graph.adjacency();
    let mut scores = HashMap::with_capacity(n);

    for s in 0..n {
        let mut dist = vec![usize::MAX; n];
        dist[s] = 0;
        let mut queue = VecDeque::new();
        queue.push_back(s);

        // Distance sum and reachable count, both excluding s itself.
        let mut sum = 0usize;
        let mut reachable = 0usize;

        while let Some(v) = queue.pop_front() {
            for &w in &adj[v] {
                if dist[w] == usize::MAX {
                    dist[w] = dist[v] + 1;
                    sum += dist[w];
                    reachable += 1;
                    queue.push_back(w);
                }
            }
        }

        let score = if sum > 0 {
            let r = reachable as f64;
            (r / (n as f64 - 1.0)) * (r / sum as f64)
        } else {
            0.0
        };
        scores.insert(graph.id_at(s).to_string(), score);
    }

    scores
}
