//! Graph container shared by the builder and the exporters.
//!
//! Wraps a petgraph `DiGraph` with an id→index map so nodes can be addressed
//! by their string ids. Edges behave as a set (re-adding an identical edge is
//! a no-op), and node upserts are last-writer-wins on attributes without ever
//! duplicating a node. Nodes are never deleted; a graph only grows during a
//! single build pass.

use crate::model::node::{Node, NodeKind};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt::{Display, Formatter};

/// Relationship carried by a directed edge.
///
/// Avoid renaming existing variants, as they are part of exported artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeRelation {
    /// Module → imported name.
    Imports,
    /// Module → class/function it defines.
    Contains,
}

impl Display for EdgeRelation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EdgeRelation::Imports => "imports",
            EdgeRelation::Contains => "contains",
        };
        f.write_str(s)
    }
}

/// Directed code graph with string-keyed nodes.
#[derive(Debug, Default)]
pub struct CodeGraph {
    graph: DiGraph<Node, EdgeRelation>,
    index_by_id: HashMap<String, NodeIndex>,
}

impl CodeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node`, or overwrite the attributes of an existing node with
    /// the same id (last-writer-wins). Never duplicates.
    pub fn upsert_node(&mut self, node: Node) -> NodeIndex {
        match self.index_by_id.get(&node.id) {
            Some(&idx) => {
                self.graph[idx] = node;
                idx
            }
            None => {
                let id = node.id.clone();
                let idx = self.graph.add_node(node);
                self.index_by_id.insert(id, idx);
                idx
            }
        }
    }

    /// Insert a node only if no node with that id exists yet; otherwise the
    /// existing node is reused untouched, whatever its kind.
    pub fn ensure_node(&mut self, node: Node) -> NodeIndex {
        match self.index_by_id.get(&node.id) {
            Some(&idx) => idx,
            None => self.upsert_node(node),
        }
    }

    /// Add a directed edge unless an identical (source, target, relation)
    /// edge is already present. Edges are a set, not a multiset.
    pub fn add_edge_once(&mut self, src: NodeIndex, dst: NodeIndex, rel: EdgeRelation) {
        let exists = self
            .graph
            .edges_connecting(src, dst)
            .any(|e| *e.weight() == rel);
        if !exists {
            self.graph.add_edge(src, dst, rel);
        }
    }

    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.index_by_id.get(id).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> &Node {
        &self.graph[idx]
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_indices().map(|i| &self.graph[i])
    }

    /// Edges in insertion order as (source, target, relation).
    pub fn edges(&self) -> impl Iterator<Item = (&Node, &Node, EdgeRelation)> {
        self.graph.edge_indices().filter_map(|e| {
            let (s, d) = self.graph.edge_endpoints(e)?;
            Some((&self.graph[s], &self.graph[d], self.graph[e]))
        })
    }

    /// Successors of `idx` restricted to `kind`, sorted by id.
    pub fn successors_of_kind(&self, idx: NodeIndex, kind: NodeKind) -> Vec<&Node> {
        let mut out: Vec<&Node> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|n| &self.graph[n])
            .filter(|n| n.kind == kind)
            .collect();
        out.sort_by(|a, b| a.id.cmp(&b.id));
        out
    }

    /// Node count per kind; kinds with no nodes report zero.
    pub fn counts_by_kind(&self) -> BTreeMap<String, usize> {
        let mut m: BTreeMap<String, usize> = NodeKind::ALL
            .iter()
            .map(|k| (k.as_str().to_string(), 0))
            .collect();
        for n in self.nodes() {
            *m.entry(n.kind.as_str().to_string()).or_insert(0) += 1;
        }
        m
    }

    /// Node ids as a set, for structural comparison across builds.
    pub fn node_ids(&self) -> BTreeSet<String> {
        self.nodes().map(|n| n.id.clone()).collect()
    }

    /// Edges as a set of (source id, target id, relation).
    pub fn edge_set(&self) -> BTreeSet<(String, String, EdgeRelation)> {
        self.edges()
            .map(|(s, d, r)| (s.id.clone(), d.id.clone(), r))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_overwrites_without_duplicating() {
        let mut g = CodeGraph::new();
        g.upsert_node(Node::new("util", NodeKind::Import));
        g.upsert_node(Node::module("util", "src/util.py"));

        assert_eq!(g.node_count(), 1);
        let idx = g.node_index("util").unwrap();
        assert_eq!(g.node(idx).kind, NodeKind::Module);
        assert_eq!(g.node(idx).path.as_deref(), Some("src/util.py"));
    }

    #[test]
    fn ensure_keeps_existing_node_untouched() {
        let mut g = CodeGraph::new();
        g.upsert_node(Node::module("util", "src/util.py"));
        g.ensure_node(Node::new("util", NodeKind::Import));

        assert_eq!(g.node_count(), 1);
        let idx = g.node_index("util").unwrap();
        assert_eq!(g.node(idx).kind, NodeKind::Module);
    }

    #[test]
    fn duplicate_edges_collapse() {
        let mut g = CodeGraph::new();
        let a = g.upsert_node(Node::module("a", "a.py"));
        let b = g.ensure_node(Node::new("os", NodeKind::Import));

        g.add_edge_once(a, b, EdgeRelation::Imports);
        g.add_edge_once(a, b, EdgeRelation::Imports);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn counts_include_zero_kinds() {
        let mut g = CodeGraph::new();
        g.upsert_node(Node::module("a", "a.py"));

        let counts = g.counts_by_kind();
        assert_eq!(counts["module"], 1);
        assert_eq!(counts["class"], 0);
        assert_eq!(counts["function"], 0);
        assert_eq!(counts["import"], 0);
    }
}
