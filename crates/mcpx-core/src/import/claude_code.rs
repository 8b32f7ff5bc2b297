//! Claude Code importer: project `.mcp.json`, then user `~/.claude.json`.

use std::path::Path;

use super::{ConfigFragment, json_fragment};

pub(super) fn import(root_dir: &Path, home_dir: &Path) -> Vec<ConfigFragment> {
    [
        root_dir.join(".mcp.json"),
        home_dir.join(".claude.json"),
    ]
    .iter()
    .filter_map(|path| json_fragment(path, "mcpServers"))
    .collect()
}
