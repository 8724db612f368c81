//! Betweenness centrality via Brandes' algorithm (2001) for unweighted
//! undirected graphs: one BFS per source with shortest-path counting, then
//! dependency accumulation in reverse BFS order. O(V * E).
//!
//! Scores use the standard undirected normalization `2 / ((n-1)(n-2))`.
//! Unreachable pairs simply contribute no flow; disconnected graphs are
//! never an error.

use std::collections::{HashMap, VecDeque};

use crate::build::PpiGraph;

pub fn betweenness_centrality(graph: &PpiGraph) -> HashMap<String, f64> {
    let n = graph.node_count();
    let adj = graph.adjacency();

    let mut cb = vec![0.0_f64; n];

    for s in 0..n {
        // Nodes in order of discovery; popped farthest-first below.
        let mut stack: Vec<usize> = Vec::with_capacity(n);
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];

        // sigma[t]: number of shortest paths from s to t.
        let mut sigma = vec![0.0_f64; n];
        sigma[s] = 1.0;

        let mut dist = vec![-1_i64; n];
        dist[s] = 0;

        let mut queue = VecDeque::new();
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            stack.push(v);
            for &w in &adj[v] {
                if dist[w] < 0 {
                    dist[w] = dist[v] + 1;
                    queue.push_back(w);
                }
                if dist[w] == dist[v] + 1 {
                    sigma[w] += sigma[v];
                    predecessors[w].push(v);
                }
            }
        }

        let mut delta = vec![0.0_f64; n];
        while let Some(w) = stack.pop() {
            for &v in &predecessors[w] {
                if sigma[w] > 0.0 {
                    delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
                }
            }
            if w != s {
                cb[w] += delta[w];
            }
        }
    }

    // Each unordered pair was counted from both endpoints, halving the raw
    // sum; combined with the undirected normalization 2/((n-1)(n-2)) the net
    // factor is 1/((n-1)(n-2)). Fewer than 3 nodes admit no intermediates.
    let scale = if n > 2 {
        1.0 / ((n as f64 - 1.0) * (n as f64 - 2.0))
    } else {
        0.0
    };

    (0..n)
        .map(|i| (graph.id_at(i).to_string(), cb[i] * scale))
        .collect()
}
