//! interactome-engine — the end-to-end query pipeline: fetch, build, score,
//! select.

pub mod pipeline;

pub use pipeline::{Analyzer, NetworkAnalysis, NodeView};
