//! Data model: typed nodes, edge relations, and the graph container.

pub mod graph;
pub mod node;

pub use graph::{CodeGraph, EdgeRelation};
pub use node::{Node, NodeKind};
