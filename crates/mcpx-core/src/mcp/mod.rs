//! Canonical MCP server model produced by configuration resolution.

pub mod spec;

pub use spec::{CommandSpec, ServerDefinition, ServerSource, SourceKind};
