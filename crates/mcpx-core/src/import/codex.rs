//! Codex importer: `~/.codex/config.toml`, `[mcp_servers.<name>]` tables.

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::schema::RawEntry;

use super::{ConfigFragment, string_map};

pub(super) fn import(_root_dir: &Path, home_dir: &Path) -> Vec<ConfigFragment> {
    let path = home_dir.join(".codex").join("config.toml");
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return Vec::new();
    };
    let Ok(table) = contents.parse::<toml::Table>() else {
        return Vec::new();
    };
    let Some(toml::Value::Table(servers)) = table.get("mcp_servers") else {
        return Vec::new();
    };

    let mut out = BTreeMap::new();
    for (name, value) in servers {
        let toml::Value::Table(server) = value else {
            continue;
        };
        if let Some(entry) = entry_from_table(server) {
            out.insert(name.clone(), entry);
        }
    }

    if out.is_empty() {
        return Vec::new();
    }
    vec![ConfigFragment {
        origin: path,
        servers: out,
    }]
}

fn entry_from_table(server: &toml::Table) -> Option<RawEntry> {
    let mut entry = RawEntry::default();

    if let Some(toml::Value::String(command)) = server.get("command")
        && !command.is_empty()
    {
        entry.executable = Some(command.clone());
    }
    if let Some(toml::Value::Array(args)) = server.get("args") {
        entry.args = Some(
            args.iter()
                .filter_map(|value| value.as_str().map(str::to_string))
                .collect(),
        );
    }
    if let Some(toml::Value::String(url)) = server.get("url")
        && !url.is_empty()
    {
        entry.url = Some(url.clone());
    }
    if let Some(env) = server.get("env") {
        // toml::Value serializes cleanly into a JSON value for reuse of the
        // shared string-map filter.
        let env = serde_json::to_value(env).ok();
        entry.env = string_map(env.as_ref());
    }

    if entry.executable.is_none() && entry.url.is_none() {
        return None;
    }
    Some(entry)
}
