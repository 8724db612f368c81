//! Eigenvector centrality via power iteration.
//!
//! Iterates on `A + I` rather than the bare adjacency matrix: the identity
//! shift keeps the eigenvectors unchanged but breaks the symmetric spectrum
//! of bipartite graphs (paths, stars), where iterating `A` alone oscillates
//! forever. Each step renormalizes to unit L2 norm; the loop stops when the
//! change drops below the tolerance. Running out of iterations is reported
//! as a [`ConvergenceFailure`] so the engine can default the column and
//! surface a warning instead of crashing the pipeline.

use std::collections::HashMap;

use interactome_common::config::PowerIterationConfig;

use crate::build::PpiGraph;
use crate::centrality::{CentralityKind, ConvergenceFailure};

pub fn eigenvector_centrality(
    graph: &PpiGraph,
    config: &PowerIterationConfig,
) -> Result<HashMap<String, f64>, ConvergenceFailure> {
    let n = graph.node_count();

    // A single node has no adjacency structure to score.
    if n <= 1 {
        return Ok(graph.node_ids().map(|id| (id.to_string(), 0.0)).collect());
    }

    let adj = graph.adjacency();
    let mut scores = vec![1.0 / (n as f64).sqrt(); n];
    let mut converged = false;

    for _ in 0..config.max_iter {
        // next = (A + I) * scores
        let mut next = scores.clone();
        for (v, neighbors) in adj.iter().enumerate() {
            for &u in neighbors {
                next[v] += scores[u];
            }
        }

        let norm: f64 = next.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > 0.0 {
            for x in next.iter_mut() {
                *x /= norm;
            }
        }

        let diff: f64 = scores
            .iter()
            .zip(next.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt();

        scores = next;

        if diff < config.tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        return Err(ConvergenceFailure {
            measure: CentralityKind::Eigenvector,
            iterations: config.max_iter,
        });
    }

    Ok((0..n)
        .map(|i| (graph.id_at(i).to_string(), scores[i]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use interactome_common::InteractionRecord;

    fn graph(pairs: &[(&str, &str)]) -> PpiGraph {
        let records: Vec<InteractionRecord> = pairs
            .iter()
            .map(|(a, b)| InteractionRecord {
                source_id: (*a).to_string(),
                target_id: (*b).to_string(),
                source_label: (*a).to_string(),
                target_label: (*b).to_string(),
                confidence: None,
            })
            .collect();
        PpiGraph::build(&records).unwrap()
    }

    #[test]
    fn star_center_dominates() {
        let g = graph(&[("HUB", "A"), ("HUB", "B"), ("HUB", "C")]);
        let scores = eigenvector_centrality(&g, &PowerIterationConfig::default()).unwrap();

        assert!(scores["HUB"] > scores["A"]);
        assert!((scores["A"] - scores["B"]).abs() < 1e-6);
        assert!((scores["B"] - scores["C"]).abs() < 1e-6);
    }

    #[test]
    fn triangle_is_symmetric() {
        let g = graph(&[("A", "B"), ("B", "C"), ("A", "C")]);
        let scores = eigenvector_centrality(&g, &PowerIterationConfig::default()).unwrap();

        assert!((scores["A"] - scores["B"]).abs() < 1e-9);
        assert!((scores["B"] - scores["C"]).abs() < 1e-9);
        // Unit L2 norm over three equal entries.
        assert!((scores["A"] - 1.0 / 3.0_f64.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn iteration_cap_of_one_fails_on_a_path() {
        let g = graph(&[("A", "B"), ("B", "C")]);
        let config = PowerIterationConfig {
            max_iter: 1,
            tolerance: 1e-6,
        };

        let failure = eigenvector_centrality(&g, &config).unwrap_err();
        assert_eq!(failure.measure, CentralityKind::Eigenvector);
        assert_eq!(failure.iterations, 1);
    }

    #[test]
    fn scores_are_non_negative() {
        let g = graph(&[("A", "B"), ("B", "C"), ("C", "D"), ("A", "D")]);
        let scores = eigenvector_centrality(&g, &PowerIterationConfig::default()).unwrap();
        for (_, score) in scores {
            assert!(score >= 0.0);
        }
    }
}
