//! GraphBuilder: file units → code graph.
//!
//! One pass over the units, in sequence order. Every node referenced by an
//! edge is inserted before the edge, so edge endpoints always exist at the
//! time the edge is recorded. Imports iterate in sorted order and edges
//! dedupe on insert, which makes the build deterministic for a given unit
//! order: two runs over identical input produce identical node and edge sets.

use crate::core::extract::{extract_classes_and_functions, extract_imports};
use crate::core::splitter::FileUnit;
use crate::model::{CodeGraph, EdgeRelation, Node, NodeKind};
use tracing::debug;

/// Assembles a [`CodeGraph`] from parsed file units.
#[derive(Debug, Default)]
pub struct GraphBuilder;

impl GraphBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the graph. The returned graph is owned by the caller; exporters
    /// receive it by shared reference and never mutate it.
    pub fn build(&self, units: &[FileUnit]) -> CodeGraph {
        let mut graph = CodeGraph::new();

        for unit in units {
            let module = unit.module_name().to_string();
            let module_idx = graph.upsert_node(Node::module(module.clone(), unit.path.clone()));

            for name in extract_imports(&unit.content) {
                // Only create the import node if the id is still unclaimed;
                // a name that collides with an existing node is reused.
                let import_idx = graph.ensure_node(Node::new(name, NodeKind::Import));
                graph.add_edge_once(module_idx, import_idx, EdgeRelation::Imports);
            }

            let (classes, functions) = extract_classes_and_functions(&unit.content);
            for class_name in classes {
                let id = format!("{module}.{class_name}");
                let idx = graph.upsert_node(Node::new(id, NodeKind::Class));
                graph.add_edge_once(module_idx, idx, EdgeRelation::Contains);
            }
            for func_name in functions {
                let id = format!("{module}.{func_name}");
                let idx = graph.upsert_node(Node::new(id, NodeKind::Function));
                graph.add_edge_once(module_idx, idx, EdgeRelation::Contains);
            }

            debug!(module = %module, "assembled module subgraph");
        }

        graph
    }
}
