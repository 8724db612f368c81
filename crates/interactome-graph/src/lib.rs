//! interactome-graph — Interaction graph construction, the five centrality
//! measures, and hub selection.

pub mod build;
pub mod centrality;
pub mod hubs;

pub use build::PpiGraph;
pub use centrality::{
    compute, CentralityKind, CentralityReport, CentralityTable, CentralityWarning,
    NodeCentrality,
};
pub use hubs::{select, HubSet, RankedNode};
