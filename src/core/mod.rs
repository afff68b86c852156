//! Core pipeline stages: dump splitting, fact extraction, graph assembly.

pub mod builder;
pub mod extract;
pub mod splitter;

pub use builder::GraphBuilder;
pub use splitter::FileUnit;
