//! JSON view of the graph, intended for visualization frontends.
//!
//! Shape:
//! ```json
//! {
//!   "nodes": [ { "id": "...", "type": "module", "color": "#A5D6A7", "path": "..." } ],
//!   "edges": [ { "source": "...", "target": "...", "relationship": "imports" } ]
//! }
//! ```
//! Nodes and edges appear in graph insertion order; `path` is an empty string
//! for non-module nodes. The shape is stable across runs; avoid breaking
//! changes unless versioned explicitly.

use crate::error::Result;
use crate::export::{kind_color, write_err};
use crate::model::CodeGraph;
use serde::Serialize;
use std::{fs::File, io::BufWriter, path::Path};
use tracing::info;

#[derive(Debug, Serialize)]
struct JsonNode<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    color: &'static str,
    path: &'a str,
}

#[derive(Debug, Serialize)]
struct JsonEdge<'a> {
    source: &'a str,
    target: &'a str,
    relationship: String,
}

#[derive(Debug, Serialize)]
struct JsonGraph<'a> {
    nodes: Vec<JsonNode<'a>>,
    edges: Vec<JsonEdge<'a>>,
}

/// Write the pretty-printed JSON document to `path`.
pub fn write_json(path: &Path, graph: &CodeGraph) -> Result<()> {
    let doc = JsonGraph {
        nodes: graph
            .nodes()
            .map(|n| JsonNode {
                id: &n.id,
                kind: n.kind.as_str(),
                color: kind_color(n.kind),
                path: n.path.as_deref().unwrap_or(""),
            })
            .collect(),
        edges: graph
            .edges()
            .map(|(s, d, r)| JsonEdge {
                source: &s.id,
                target: &d.id,
                relationship: r.to_string(),
            })
            .collect(),
    };

    let f = File::create(path).map_err(write_err(path))?;
    let w = BufWriter::new(f);
    serde_json::to_writer_pretty(w, &doc)
        .map_err(std::io::Error::from)
        .map_err(write_err(path))?;

    info!("json: wrote -> {}", path.display());
    Ok(())
}
