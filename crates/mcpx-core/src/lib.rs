//! mcpx Core Library
//!
//! Resolves a canonical list of MCP server definitions from project-level
//! and user-level `mcp.json` files, migrating other developer tools'
//! configurations into a first user-level config when none exists yet.

pub mod config;
pub mod error;
pub mod import;
pub mod mcp;

/// Re-exports of commonly used types
pub mod prelude {
    // Configuration
    pub use crate::config::{
        CommandField, ConfigTarget, ImportKind, LoadOptions, RawConfig, RawEntry,
        load_server_definitions, resolve_config_targets,
    };

    // Canonical model
    pub use crate::mcp::{CommandSpec, ServerDefinition, ServerSource, SourceKind};

    // Legacy migration
    pub use crate::import::{
        MigrationOptions, MigrationReport, migrate_legacy_configs, to_file_url,
    };

    // Errors
    pub use crate::error::ConfigError;
}
