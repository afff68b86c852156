//! Serializers: one graph snapshot → all output artifacts.
//!
//! Every exporter takes `&CodeGraph` and never mutates it; all artifacts of a
//! run are derived from the same snapshot. The kind→color palette lives here
//! as an explicit enumerated configuration rather than as state on the nodes
//! or a shared global.

pub mod graphml;
pub mod json;
pub mod save_all;
pub mod stats;
pub mod text;

pub use save_all::{Artifacts, persist_all};

use crate::error::Error;
use crate::model::NodeKind;
use std::path::Path;

/// Fixed display color per node kind, used by the GraphML and JSON views.
pub fn kind_color(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Module => "#A5D6A7",   // light green
        NodeKind::Class => "#90CAF9",    // light blue
        NodeKind::Function => "#FFCC80", // light orange
        NodeKind::Import => "#CE93D8",   // light purple
    }
}

/// Map an I/O failure to [`Error::ArtifactWrite`] carrying the artifact path.
pub(crate) fn write_err(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |source| Error::ArtifactWrite {
        path: path.to_path_buf(),
        source,
    }
}
