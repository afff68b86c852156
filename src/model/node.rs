//! Graph node model.
//!
//! Nodes are language-agnostic and intentionally small: an id, a kind, and
//! (for modules only) the originating file path. Display attributes such as
//! color are *not* stored here; the kind→color palette is an enumerated
//! configuration owned by the exporters.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Node kind within the code graph.
///
/// Avoid renaming existing variants, as they are part of exported artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// One ingested file unit, keyed by base file name.
    Module,
    /// A class definition found inside a module.
    Class,
    /// A function definition found inside a module.
    Function,
    /// A referenced name with no file unit of its own.
    Import,
}

impl NodeKind {
    /// All kinds, in the order statistics and summaries report them.
    pub const ALL: [NodeKind; 4] = [
        NodeKind::Module,
        NodeKind::Class,
        NodeKind::Function,
        NodeKind::Import,
    ];

    /// Stable snake_case key used across every exported artifact.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Module => "module",
            NodeKind::Class => "class",
            NodeKind::Function => "function",
            NodeKind::Import => "import",
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single graph node.
///
/// `id` is globally unique within a graph. Module ids are the file stem;
/// class/function ids are qualified as `<module>.<name>`; import ids are the
/// raw import token, possibly dotted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    /// Originating file path; populated for modules only.
    #[serde(default)]
    pub path: Option<String>,
}

impl Node {
    /// A module node carrying its source path.
    pub fn module(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: NodeKind::Module,
            path: Some(path.into()),
        }
    }

    /// A node without a path (class, function, or import).
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            path: None,
        }
    }

    /// Short name with any qualifying `module.` prefix stripped.
    pub fn short_name(&self) -> &str {
        self.id.rsplit('.').next().unwrap_or(&self.id)
    }
}
