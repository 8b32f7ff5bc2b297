//! One-time migration of legacy tool configurations.
//!
//! When neither the project-level nor the user-level `mcp.json` exists, the
//! loader scans the native configuration of other developer tools and
//! synthesizes `<home>/.mcpx/mcp.json` from whatever it finds. The file is
//! written even when nothing was found, so the scan happens at most once;
//! later resolutions see the user-level file and skip migration entirely.
//!
//! Importers are a fixed mapping from [`ImportKind`] to one function per
//! tool. An importer locates the tool's native configuration under the given
//! root and home directories and reports any MCP-style server entries it can
//! recognize; failing to locate or parse a file means "nothing found", never
//! an error.

mod claude_code;
mod claude_desktop;
mod codex;
mod cursor;
mod vscode;
mod windsurf;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::config::schema::{CommandField, ImportKind, RawConfig, RawEntry};
use crate::config::store;
use crate::mcp::ServerSource;

/// Zero or more server entries recovered from one native config file.
#[derive(Debug, Clone)]
pub struct ConfigFragment {
    /// Native file the entries were read from.
    pub origin: PathBuf,
    pub servers: BTreeMap<String, RawEntry>,
}

fn import(kind: ImportKind, root_dir: &Path, home_dir: &Path) -> Vec<ConfigFragment> {
    match kind {
        ImportKind::Cursor => cursor::import(root_dir, home_dir),
        ImportKind::ClaudeCode => claude_code::import(root_dir, home_dir),
        ImportKind::ClaudeDesktop => claude_desktop::import(root_dir, home_dir),
        ImportKind::Codex => codex::import(root_dir, home_dir),
        ImportKind::Windsurf => windsurf::import(root_dir, home_dir),
        ImportKind::VSCode => vscode::import(root_dir, home_dir),
    }
}

/// Options for [`migrate_legacy_configs`].
#[derive(Debug, Clone)]
pub struct MigrationOptions {
    pub root_dir: PathBuf,
    pub home_dir: PathBuf,
    /// Kinds to attempt, in order. Defaults to every known tool.
    pub imports: Vec<ImportKind>,
}

impl MigrationOptions {
    pub fn new(root_dir: PathBuf, home_dir: PathBuf) -> Self {
        Self {
            root_dir,
            home_dir,
            imports: ImportKind::ALL.to_vec(),
        }
    }

    pub fn with_imports(mut self, imports: Vec<ImportKind>) -> Self {
        self.imports = imports;
        self
    }
}

/// One server discovered during migration.
#[derive(Debug, Clone)]
pub struct MigratedServer {
    pub name: String,
    pub kind: ImportKind,
    /// Native file the entry came from, as import provenance.
    pub source: ServerSource,
}

/// Outcome of one migration run.
#[derive(Debug, Clone)]
pub struct MigrationReport {
    /// The synthesized user-level config file.
    pub config_path: PathBuf,
    pub servers: Vec<MigratedServer>,
}

/// Scan legacy tools in order and write the synthesized user-level config.
///
/// The first tool to define a server name wins; later occurrences of the
/// same name are ignored. Writes only to `<home>/.mcpx/mcp.json`, never to
/// the project-level path.
pub fn migrate_legacy_configs(options: &MigrationOptions) -> anyhow::Result<MigrationReport> {
    let mut merged = RawConfig::default();
    let mut discovered = Vec::new();

    for kind in &options.imports {
        for fragment in import(*kind, &options.root_dir, &options.home_dir) {
            debug!(
                kind = %kind,
                origin = %fragment.origin.display(),
                servers = fragment.servers.len(),
                "found legacy config"
            );
            for (name, entry) in fragment.servers {
                if merged.mcp_servers.contains_key(&name) {
                    continue;
                }
                discovered.push(MigratedServer {
                    name: name.clone(),
                    kind: *kind,
                    source: ServerSource::import(fragment.origin.clone()),
                });
                merged.mcp_servers.insert(name, entry);
            }
        }
    }

    let config_path = options.home_dir.join(".mcpx").join("mcp.json");
    store::write_config(&config_path, &merged)
        .context("Failed to write migrated configuration")?;

    info!(
        path = %config_path.display(),
        servers = discovered.len(),
        "migrated legacy MCP configuration"
    );

    Ok(MigrationReport {
        config_path,
        servers: discovered,
    })
}

/// Convert a filesystem path to a `file://` URL.
pub fn to_file_url(path: &Path) -> anyhow::Result<Url> {
    Url::from_file_path(path)
        .map_err(|()| anyhow::anyhow!("Cannot convert path to file URL: {}", path.display()))
}

/// Read a JSON file and recognize server entries under the named key.
///
/// Returns `None` when the file is absent, unreadable, unparsable, or holds
/// no recognizable entries.
fn json_fragment(path: &Path, key: &str) -> Option<ConfigFragment> {
    let contents = std::fs::read_to_string(path).ok()?;
    let value: Value = serde_json::from_str(&contents).ok()?;
    let servers = value.get(key)?.as_object()?;

    let mut out = BTreeMap::new();
    for (name, entry) in servers {
        match entry_from_value(entry) {
            Some(entry) => {
                out.insert(name.clone(), entry);
            }
            None => {
                debug!(
                    server = %name,
                    path = %path.display(),
                    "skipping unrecognizable legacy entry"
                );
            }
        }
    }

    if out.is_empty() {
        return None;
    }
    Some(ConfigFragment {
        origin: path.to_path_buf(),
        servers: out,
    })
}

/// Map one foreign server object onto the raw entry schema.
///
/// A string `command` with separate `args` is the common legacy shape; it
/// maps onto the `executable`/`args` fields so the arguments survive
/// normalization. Entries naming neither a command nor a URL are dropped.
fn entry_from_value(value: &Value) -> Option<RawEntry> {
    let object = value.as_object()?;
    let mut entry = RawEntry::default();

    match object.get("command") {
        Some(Value::String(command)) if !command.is_empty() => {
            entry.executable = Some(command.clone());
        }
        Some(Value::Array(argv)) => {
            entry.command = Some(CommandField::Argv(string_vec(argv)));
        }
        _ => {}
    }
    if let Some(args) = object.get("args").and_then(Value::as_array) {
        entry.args = Some(string_vec(args));
    }

    for key in ["url", "serverUrl", "baseUrl"] {
        if entry.url.is_some() {
            break;
        }
        if let Some(url) = object.get(key).and_then(Value::as_str)
            && !url.is_empty()
        {
            entry.url = Some(url.to_string());
        }
    }

    entry.env = string_map(object.get("env"));
    entry.headers = string_map(object.get("headers"));
    entry.description = object
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);

    if entry.executable.is_none() && entry.command.is_none() && entry.url.is_none() {
        return None;
    }
    Some(entry)
}

fn string_vec(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .filter_map(|value| value.as_str().map(str::to_string))
        .collect()
}

fn string_map(value: Option<&Value>) -> Option<std::collections::HashMap<String, String>> {
    let object = value?.as_object()?;
    let map: std::collections::HashMap<String, String> = object
        .iter()
        .filter_map(|(key, value)| value.as_str().map(|v| (key.clone(), v.to_string())))
        .collect();
    if map.is_empty() { None } else { Some(map) }
}
