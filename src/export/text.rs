//! Human-readable text summary of the graph.
//!
//! Overall totals, per-kind distribution, then one section per module sorted
//! by module id. Each section lists the module path, its imported names
//! (sorted), and the short names of its classes and functions (qualifying
//! module prefix stripped, sorted). Empty subsections are omitted.

use crate::error::Result;
use crate::export::write_err;
use crate::model::{CodeGraph, NodeKind};
use std::path::Path;
use tracing::info;

/// Render the summary for one graph snapshot.
pub fn render_summary(graph: &CodeGraph) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push("# Code Graph Overview".to_string());
    parts.push(format!("Total nodes: {}", graph.node_count()));
    parts.push(format!("Total edges: {}\n", graph.edge_count()));

    parts.push("## Node Type Distribution".to_string());
    let counts = graph.counts_by_kind();
    for kind in NodeKind::ALL {
        parts.push(format!("- {}: {}", kind.as_str(), counts[kind.as_str()]));
    }
    parts.push(String::new());

    parts.push("## Module Structure".to_string());
    let mut modules: Vec<_> = graph.nodes().filter(|n| n.kind == NodeKind::Module).collect();
    modules.sort_by(|a, b| a.id.cmp(&b.id));

    for module in modules {
        parts.push(format!("\n### Module: {}", module.id));
        if let Some(path) = &module.path {
            parts.push(format!("Path: {path}"));
        }

        // node_index is guaranteed to resolve: `module` came from this graph.
        let Some(idx) = graph.node_index(&module.id) else {
            continue;
        };

        let imports = graph.successors_of_kind(idx, NodeKind::Import);
        if !imports.is_empty() {
            parts.push("\nImports:".to_string());
            for imp in imports {
                parts.push(format!("- {}", imp.id));
            }
        }

        let classes = graph.successors_of_kind(idx, NodeKind::Class);
        if !classes.is_empty() {
            parts.push("\nClasses:".to_string());
            for class in classes {
                parts.push(format!("- {}", class.short_name()));
            }
        }

        let functions = graph.successors_of_kind(idx, NodeKind::Function);
        if !functions.is_empty() {
            parts.push("\nFunctions:".to_string());
            for func in functions {
                parts.push(format!("- {}", func.short_name()));
            }
        }
    }

    parts.join("\n")
}

/// Write the summary to `path`.
pub fn write_summary(path: &Path, graph: &CodeGraph) -> Result<()> {
    std::fs::write(path, render_summary(graph)).map_err(write_err(path))?;
    info!("text: wrote -> {}", path.display());
    Ok(())
}
