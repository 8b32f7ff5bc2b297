//! Top-level resolution entry point.

use std::path::PathBuf;

use anyhow::Context;
use tracing::debug;

use super::merge::merge_targets;
use super::normalize::normalize_server_entry;
use super::targets::{has_existing_config, resolve_config_targets};
use crate::import::{self, MigrationOptions};
use crate::mcp::ServerDefinition;

/// Options for [`load_server_definitions`].
///
/// Ambient process state (working directory, home directory) is defaulted at
/// this boundary only; inner components receive explicit paths.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file; a missing file at this path is a hard failure.
    pub config_path: Option<PathBuf>,
    /// Project root searched for `mcp.json`; defaults to the current directory.
    pub root_dir: Option<PathBuf>,
    /// Home directory holding `.mcpx/mcp.json`; defaults to the user's home.
    pub home_dir: Option<PathBuf>,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn with_root_dir(mut self, dir: PathBuf) -> Self {
        self.root_dir = Some(dir);
        self
    }

    pub fn with_home_dir(mut self, dir: PathBuf) -> Self {
        self.home_dir = Some(dir);
        self
    }
}

/// Resolve the canonical list of MCP server definitions.
///
/// Flow: resolve targets; when no explicit path was given and no target file
/// exists, synthesize a user-level config from legacy tool configurations;
/// then merge the targets in order and normalize every merged entry. Returns
/// a complete, fully normalized list or fails outright.
pub fn load_server_definitions(options: &LoadOptions) -> anyhow::Result<Vec<ServerDefinition>> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let root_dir = match &options.root_dir {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => cwd.join(path),
        None => cwd,
    };
    let home_dir = match &options.home_dir {
        Some(path) => path.clone(),
        None => dirs::home_dir().context("Could not determine home directory")?,
    };

    let targets = resolve_config_targets(options.config_path.as_deref(), &root_dir, &home_dir);

    if options.config_path.is_none() && !has_existing_config(&targets) {
        debug!("no canonical config found, attempting legacy migration");
        import::migrate_legacy_configs(&MigrationOptions::new(root_dir, home_dir))?;
    }

    let merged = merge_targets(&targets)?;

    let mut servers = Vec::with_capacity(merged.len());
    for (name, entry) in merged {
        servers.push(normalize_server_entry(
            &name,
            &entry.raw,
            &entry.base_dir,
            entry.source,
        )?);
    }

    debug!(servers = servers.len(), "resolved server definitions");
    Ok(servers)
}
