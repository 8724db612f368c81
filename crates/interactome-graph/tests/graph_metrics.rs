//! Integration tests for graph construction, the centrality engine, and hub
//! selection, over small networks with hand-checked scores.

use interactome_common::config::{AnalysisConfig, PowerIterationConfig};
use interactome_common::{InteractionRecord, InteractomeError};
use interactome_graph::{compute, select, CentralityKind, CentralityWarning, PpiGraph};

fn records(pairs: &[(&str, &str)]) -> Vec<InteractionRecord> {
    pairs
        .iter()
        .map(|(a, b)| InteractionRecord {
            source_id: (*a).to_string(),
            target_id: (*b).to_string(),
            source_label: (*a).to_string(),
            target_label: (*b).to_string(),
            confidence: None,
        })
        .collect()
}

fn graph(pairs: &[(&str, &str)]) -> PpiGraph {
    PpiGraph::build(&records(pairs)).unwrap()
}

#[test]
fn noisy_triangle_end_to_end() {
    // Duplicate A-C records and a self-interaction collapse into a clean
    // triangle.
    let g = graph(&[("A", "B"), ("B", "C"), ("A", "C"), ("A", "C"), ("B", "B")]);
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 3);

    let report = compute(&g, &AnalysisConfig::default());
    assert!(report.warnings.is_empty());

    for id in ["A", "B", "C"] {
        let row = report.table.get(id).unwrap();
        assert!((row.degree - 1.0).abs() < 1e-12);
        assert!(row.betweenness.abs() < 1e-12);
        assert!((row.closeness - 1.0).abs() < 1e-12);
        assert!((row.pagerank - 1.0 / 3.0).abs() < 1e-6);
    }
}

#[test]
fn every_node_gets_exactly_one_row() {
    let g = graph(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "E")]);
    let report = compute(&g, &AnalysisConfig::default());

    assert_eq!(report.table.len(), g.node_count());
    for id in g.node_ids() {
        assert!(report.table.get(id).is_some());
    }
}

#[test]
fn path_graph_hand_checked_scores() {
    let g = graph(&[("A", "B"), ("B", "C")]);
    let report = compute(&g, &AnalysisConfig::default());
    let table = &report.table;

    // Center of the path.
    let b = table.get("B").unwrap();
    assert!((b.degree - 1.0).abs() < 1e-12);
    assert!((b.betweenness - 1.0).abs() < 1e-12);
    assert!((b.closeness - 1.0).abs() < 1e-12);

    // Endpoint: distance sum 1 + 2 = 3 over 2 reachable nodes.
    let a = table.get("A").unwrap();
    assert!((a.degree - 0.5).abs() < 1e-12);
    assert!(a.betweenness.abs() < 1e-12);
    assert!((a.closeness - 2.0 / 3.0).abs() < 1e-12);

    // The center also dominates the spectral measures.
    assert!(b.eigenvector > a.eigenvector);
    assert!(b.pagerank > a.pagerank);
}

#[test]
fn single_edge_graph_scores() {
    let g = graph(&[("A", "B")]);
    let report = compute(&g, &AnalysisConfig::default());

    for id in ["A", "B"] {
        let row = report.table.get(id).unwrap();
        assert!((row.degree - 1.0).abs() < 1e-12);
        assert!(row.betweenness.abs() < 1e-12);
        assert!((row.closeness - 1.0).abs() < 1e-12);
        assert!((row.pagerank - 0.5).abs() < 1e-6);
    }
}

#[test]
fn disconnected_components_compute_without_error() {
    // Components of size 3 (path) and 2 (single edge).
    let g = graph(&[("A", "B"), ("B", "C"), ("D", "E")]);
    let report = compute(&g, &AnalysisConfig::default());
    let table = &report.table;

    // Cross-component pairs contribute no flow and no distance.
    let b = table.get("B").unwrap();
    assert!((b.betweenness - 1.0 / 6.0).abs() < 1e-12);

    // Wasserman-Faust closeness scales by the reachable fraction:
    // B reaches 2 of 4 others at distance 1 each.
    assert!((b.closeness - (2.0 / 4.0) * (2.0 / 2.0)).abs() < 1e-12);
    let d = table.get("D").unwrap();
    assert!((d.closeness - (1.0 / 4.0) * (1.0 / 1.0)).abs() < 1e-12);

    // PageRank mass still sums to 1 across components.
    let sum: f64 = ["A", "B", "C", "D", "E"]
        .iter()
        .map(|id| table.get(id).unwrap().pagerank)
        .sum();
    assert!((sum - 1.0).abs() < 1e-6);
}

#[test]
fn pagerank_sums_to_one_on_larger_graphs() {
    let g = graph(&[
        ("A", "B"),
        ("A", "C"),
        ("A", "D"),
        ("B", "C"),
        ("D", "E"),
        ("E", "F"),
        ("C", "F"),
    ]);
    let report = compute(&g, &AnalysisConfig::default());
    let sum: f64 = report.table.iter().map(|(_, row)| row.pagerank).sum();
    assert!((sum - 1.0).abs() < 1e-6);
}

#[test]
fn forced_non_convergence_defaults_the_column_only() {
    let config = AnalysisConfig {
        eigenvector: PowerIterationConfig {
            max_iter: 1,
            tolerance: 1e-12,
        },
        ..AnalysisConfig::default()
    };

    let g = graph(&[("A", "B"), ("B", "C")]);
    let report = compute(&g, &config);

    assert_eq!(report.warnings.len(), 1);
    assert!(matches!(
        report.warnings[0],
        CentralityWarning::NonConvergence {
            measure: CentralityKind::Eigenvector,
            iterations: 1
        }
    ));

    // The eigenvector column is sentinel zero; the other four stay valid.
    let b = report.table.get("B").unwrap();
    assert!(b.eigenvector.abs() < 1e-12);
    assert!((b.degree - 1.0).abs() < 1e-12);
    assert!((b.betweenness - 1.0).abs() < 1e-12);
    assert!((b.closeness - 1.0).abs() < 1e-12);
    assert!(b.pagerank > 0.0);
}

#[test]
fn star_center_tops_every_measure() {
    let g = graph(&[("HUB", "A"), ("HUB", "B"), ("HUB", "C"), ("HUB", "D")]);
    let report = compute(&g, &AnalysisConfig::default());

    for kind in CentralityKind::ALL {
        let hubs = select(&report.table, kind, 5);
        assert_eq!(hubs.hubs[0].id, "HUB", "measure {kind}");
    }
}

#[test]
fn hub_selection_is_capped_and_deterministic() {
    let g = graph(&[
        ("HUB", "L1"),
        ("HUB", "L2"),
        ("HUB", "L3"),
        ("HUB", "L4"),
        ("HUB", "L5"),
        ("HUB", "L6"),
    ]);
    let report = compute(&g, &AnalysisConfig::default());

    let first = select(&report.table, CentralityKind::Degree, 5);
    let second = select(&report.table, CentralityKind::Degree, 5);
    assert_eq!(first, second);

    // Top hub by degree, then the tied leaves in ascending ID order.
    assert_eq!(first.hubs.len(), 5);
    let ids: Vec<&str> = first.hub_ids().collect();
    assert_eq!(ids, vec!["HUB", "L1", "L2", "L3", "L4"]);
    assert_eq!(first.peripheral, vec!["L5", "L6"]);

    // Partition covers the node set exactly.
    assert_eq!(first.hubs.len() + first.peripheral.len(), g.node_count());
    assert!(first.peripheral.iter().all(|id| !first.is_hub(id)));
}

#[test]
fn small_graphs_yield_fewer_than_five_hubs() {
    let g = graph(&[("A", "B"), ("B", "C")]);
    let report = compute(&g, &AnalysisConfig::default());

    let hubs = select(&report.table, CentralityKind::Betweenness, 5);
    assert_eq!(hubs.hubs.len(), 3);
    assert!(hubs.peripheral.is_empty());
    assert_eq!(hubs.hubs[0].id, "B");
}

#[test]
fn scores_ride_along_with_hubs() {
    let g = graph(&[("A", "B"), ("B", "C")]);
    let report = compute(&g, &AnalysisConfig::default());

    let hubs = select(&report.table, CentralityKind::Degree, 5);
    assert!((hubs.hubs[0].score - 1.0).abs() < 1e-12);
    assert!(hubs
        .hubs
        .windows(2)
        .all(|pair| pair[0].score >= pair[1].score));
}

#[test]
fn table_serializes_as_a_plain_map() {
    let g = graph(&[("A", "B")]);
    let report = compute(&g, &AnalysisConfig::default());

    let value = serde_json::to_value(&report.table).unwrap();
    assert!(value.get("A").is_some());
    assert!(value["A"].get("pagerank").is_some());

    let kind = serde_json::to_value(CentralityKind::Eigenvector).unwrap();
    assert_eq!(kind, serde_json::json!("eigenvector"));
}

#[test]
fn empty_input_is_a_graph_error_not_a_panic() {
    let err = PpiGraph::build(&[]).unwrap_err();
    assert!(matches!(err, InteractomeError::EmptyGraph));
}
