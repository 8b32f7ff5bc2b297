//! Cursor importer: `.cursor/mcp.json` at project level, then user level.

use std::path::Path;

use super::{ConfigFragment, json_fragment};

pub(super) fn import(root_dir: &Path, home_dir: &Path) -> Vec<ConfigFragment> {
    [
        root_dir.join(".cursor").join("mcp.json"),
        home_dir.join(".cursor").join("mcp.json"),
    ]
    .iter()
    .filter_map(|path| json_fragment(path, "mcpServers"))
    .collect()
}
