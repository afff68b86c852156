//! Aggregate statistics artifact, written as YAML.
//!
//! Field names are stable and grep-friendly. Every known node kind appears in
//! `node_types`, including kinds with a zero count. The document carries no
//! timestamps, so identical graphs serialize byte-identically.

use crate::error::{Error, Result};
use crate::export::write_err;
use crate::model::CodeGraph;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Counts derived from one graph snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    /// Node count per kind; zero counts are present, not omitted.
    pub node_types: BTreeMap<String, usize>,
}

impl GraphStats {
    pub fn from_graph(graph: &CodeGraph) -> Self {
        Self {
            total_nodes: graph.node_count(),
            total_edges: graph.edge_count(),
            node_types: graph.counts_by_kind(),
        }
    }
}

/// Write the statistics document to `path`.
pub fn write_stats(path: &Path, graph: &CodeGraph) -> Result<()> {
    let stats = GraphStats::from_graph(graph);
    let doc = serde_yml::to_string(&stats).map_err(|e| Error::ArtifactWrite {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })?;
    std::fs::write(path, doc).map_err(write_err(path))?;

    info!("stats: wrote -> {}", path.display());
    Ok(())
}
