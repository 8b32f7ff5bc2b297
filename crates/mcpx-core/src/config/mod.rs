//! Configuration resolution pipeline.
//!
//! Targets are examined in precedence order: an explicit path wins outright,
//! otherwise the project-level `mcp.json` overlays the user-level
//! `~/.mcpx/mcp.json`. Merging, legacy migration, and normalization into the
//! canonical server model all hang off [`load_server_definitions`].

pub mod loader;
pub mod merge;
pub mod normalize;
pub mod schema;
pub mod store;
pub mod targets;

pub use loader::{LoadOptions, load_server_definitions};
pub use merge::{MergedEntry, merge_targets};
pub use normalize::normalize_server_entry;
pub use schema::{CommandField, ImportKind, RawConfig, RawEntry};
pub use targets::{ConfigTarget, resolve_config_targets};
