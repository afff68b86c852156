//! repo-minify: build a dependency/containment graph from a Repomix dump.
//!
//! The pipeline converts a concatenated, delimiter-based dump of source files
//! into a directed graph of typed nodes (modules, classes, functions,
//! imports) and relationship edges (imports, contains), then serializes that
//! graph into GraphML, JSON, YAML statistics, and a plain-text summary —
//! all derived from a single graph snapshot.
//!
//! Stages, in dependency order:
//! 1. **Splitter** ([`core::splitter`]) — dump text → ordered file units.
//! 2. **Extractor** ([`core::extract`]) — per-unit imports/classes/functions
//!    via line-pattern heuristics (no AST; approximate by design).
//! 3. **GraphBuilder** ([`core::builder`]) — file units → [`model::CodeGraph`].
//! 4. **Serializer** ([`export`]) — one snapshot → all output artifacts.
//!
//! The single public entry point for the whole pipeline is [`run::run`].

pub mod core;
pub mod error;
pub mod export;
pub mod model;
pub mod run;

pub use error::{Error, Result};
pub use model::{CodeGraph, EdgeRelation, Node, NodeKind};
