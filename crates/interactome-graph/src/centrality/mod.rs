//! The five-measure centrality engine.
//!
//! Measures are computed independently over the same graph. The two
//! power-iteration measures can fail to converge; that failure defaults the
//! affected column to 0 and surfaces a [`CentralityWarning`] — it never
//! aborts the run or disturbs the other four columns.

pub mod betweenness;
pub mod closeness;
pub mod degree;
pub mod eigenvector;
pub mod pagerank;

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use interactome_common::config::AnalysisConfig;
use interactome_common::InteractomeError;

use crate::build::PpiGraph;

// ── Measure kinds ──────────────────────────────────────────────────────────

/// The recognized centrality measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CentralityKind {
    Degree,
    Betweenness,
    Closeness,
    Eigenvector,
    Pagerank,
}

impl CentralityKind {
    pub const ALL: [CentralityKind; 5] = [
        CentralityKind::Degree,
        CentralityKind::Betweenness,
        CentralityKind::Closeness,
        CentralityKind::Eigenvector,
        CentralityKind::Pagerank,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CentralityKind::Degree => "degree",
            CentralityKind::Betweenness => "betweenness",
            CentralityKind::Closeness => "closeness",
            CentralityKind::Eigenvector => "eigenvector",
            CentralityKind::Pagerank => "pagerank",
        }
    }
}

impl fmt::Display for CentralityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CentralityKind {
    type Err = InteractomeError;

    /// Parses the lowercase measure name; anything else is an
    /// `InvalidRankingKey` error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "degree" => Ok(CentralityKind::Degree),
            "betweenness" => Ok(CentralityKind::Betweenness),
            "closeness" => Ok(CentralityKind::Closeness),
            "eigenvector" => Ok(CentralityKind::Eigenvector),
            "pagerank" => Ok(CentralityKind::Pagerank),
            _ => Err(InteractomeError::InvalidRankingKey(s.to_string())),
        }
    }
}

// ── Table ──────────────────────────────────────────────────────────────────

/// One node's row of the centrality table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeCentrality {
    pub degree: f64,
    pub betweenness: f64,
    pub closeness: f64,
    pub eigenvector: f64,
    pub pagerank: f64,
}

impl NodeCentrality {
    pub fn get(&self, kind: CentralityKind) -> f64 {
        match kind {
            CentralityKind::Degree => self.degree,
            CentralityKind::Betweenness => self.betweenness,
            CentralityKind::Closeness => self.closeness,
            CentralityKind::Eigenvector => self.eigenvector,
            CentralityKind::Pagerank => self.pagerank,
        }
    }
}

/// Per-node scores for one engine run. Iteration order is ascending by node
/// ID, so repeated runs over the same graph report identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CentralityTable {
    rows: BTreeMap<String, NodeCentrality>,
}

impl CentralityTable {
    pub fn get(&self, id: &str) -> Option<&NodeCentrality> {
        self.rows.get(id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &NodeCentrality)> {
        self.rows.iter()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &String> {
        self.rows.keys()
    }
}

// ── Warnings ───────────────────────────────────────────────────────────────

/// Non-fatal engine conditions the caller must be shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CentralityWarning {
    NonConvergence {
        measure: CentralityKind,
        iterations: usize,
    },
}

impl fmt::Display for CentralityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CentralityWarning::NonConvergence {
                measure,
                iterations,
            } => write!(
                f,
                "{measure} centrality did not converge within {iterations} iterations; scores defaulted to 0"
            ),
        }
    }
}

/// Internal signal from a power-iteration measure that ran out of
/// iterations. `compute` turns it into a warning; callers running a measure
/// directly can promote it to the hard error.
#[derive(Debug, Clone, Copy)]
pub struct ConvergenceFailure {
    pub measure: CentralityKind,
    pub iterations: usize,
}

impl From<ConvergenceFailure> for InteractomeError {
    fn from(failure: ConvergenceFailure) -> Self {
        InteractomeError::Convergence {
            measure: failure.measure.as_str(),
            iterations: failure.iterations,
        }
    }
}

/// The engine output: the table plus any surfaced warnings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CentralityReport {
    pub table: CentralityTable,
    pub warnings: Vec<CentralityWarning>,
}

// ── Engine ─────────────────────────────────────────────────────────────────

/// Computes all five measures for every node of the graph.
///
/// Single-node graphs produce an all-zero row, which is a valid output, not
/// an error.
#[instrument(skip(graph, config))]
pub fn compute(graph: &PpiGraph, config: &AnalysisConfig) -> CentralityReport {
    let mut warnings = Vec::new();

    let degree = degree::degree_centrality(graph);
    let betweenness = betweenness::betweenness_centrality(graph);
    let closeness = closeness::closeness_centrality(graph);

    let eigenvector = sentinel_on_failure(
        eigenvector::eigenvector_centrality(graph, &config.eigenvector),
        &mut warnings,
    );
    let pagerank = sentinel_on_failure(
        pagerank::pagerank(graph, config.damping, &config.pagerank),
        &mut warnings,
    );

    let mut rows = BTreeMap::new();
    for id in graph.node_ids() {
        rows.insert(
            id.to_string(),
            NodeCentrality {
                degree: score_of(&degree, id),
                betweenness: score_of(&betweenness, id),
                closeness: score_of(&closeness, id),
                eigenvector: score_of(&eigenvector, id),
                pagerank: score_of(&pagerank, id),
            },
        );
    }

    debug!(
        nodes = rows.len(),
        warnings = warnings.len(),
        "Centrality table computed"
    );

    CentralityReport {
        table: CentralityTable { rows },
        warnings,
    }
}

fn sentinel_on_failure(
    result: Result<HashMap<String, f64>, ConvergenceFailure>,
    warnings: &mut Vec<CentralityWarning>,
) -> HashMap<String, f64> {
    match result {
        Ok(scores) => scores,
        Err(failure) => {
            warn!(
                measure = failure.measure.as_str(),
                iterations = failure.iterations,
                "Centrality measure did not converge; defaulting its column to 0"
            );
            warnings.push(CentralityWarning::NonConvergence {
                measure: failure.measure,
                iterations: failure.iterations,
            });
            // Missing entries read back as 0 during row assembly.
            HashMap::new()
        }
    }
}

fn score_of(scores: &HashMap<String, f64>, id: &str) -> f64 {
    scores.get(id).copied().unwrap_or(0.0)
}
