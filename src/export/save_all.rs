//! Persist all artifacts into the given output directory.
//!
//! Layout:
//!   out_dir/
//!     code_graph.graphml
//!     code_graph.json
//!     graph_statistics.yaml
//!     code_graph.txt
//!
//! All four files are derived from the same graph snapshot. Writes are
//! sequential and best-effort: if a later write fails, files written earlier
//! remain on disk and the error propagates with the failing path.

use crate::error::Result;
use crate::export::{graphml, json, stats, text, write_err};
use crate::model::CodeGraph;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

pub const GRAPHML_FILE: &str = "code_graph.graphml";
pub const JSON_FILE: &str = "code_graph.json";
pub const STATS_FILE: &str = "graph_statistics.yaml";
pub const TEXT_FILE: &str = "code_graph.txt";

/// Paths of the persisted artifacts.
#[derive(Debug, Clone)]
pub struct Artifacts {
    pub graphml: PathBuf,
    pub json: PathBuf,
    pub statistics: PathBuf,
    pub text: PathBuf,
}

/// Write all artifacts to `out_dir`, creating it if needed.
pub fn persist_all(out_dir: &Path, graph: &CodeGraph) -> Result<Artifacts> {
    fs::create_dir_all(out_dir).map_err(write_err(out_dir))?;
    info!("persist: dir prepared -> {}", out_dir.display());

    let artifacts = Artifacts {
        graphml: out_dir.join(GRAPHML_FILE),
        json: out_dir.join(JSON_FILE),
        statistics: out_dir.join(STATS_FILE),
        text: out_dir.join(TEXT_FILE),
    };

    graphml::write_graphml(&artifacts.graphml, graph)?;
    json::write_json(&artifacts.json, graph)?;
    stats::write_stats(&artifacts.statistics, graph)?;
    text::write_summary(&artifacts.text, graph)?;

    info!("persist: all artifacts written");
    Ok(artifacts)
}
