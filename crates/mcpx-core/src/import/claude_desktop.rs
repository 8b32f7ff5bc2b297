//! Claude Desktop importer.
//!
//! The desktop app keeps `claude_desktop_config.json` under a per-platform
//! application-support directory; all known locations are probed relative to
//! the injected home directory.

use std::path::Path;

use super::{ConfigFragment, json_fragment};

pub(super) fn import(_root_dir: &Path, home_dir: &Path) -> Vec<ConfigFragment> {
    [
        home_dir.join("Library/Application Support/Claude/claude_desktop_config.json"),
        home_dir.join(".config/Claude/claude_desktop_config.json"),
        home_dir.join("AppData/Roaming/Claude/claude_desktop_config.json"),
    ]
    .iter()
    .filter_map(|path| json_fragment(path, "mcpServers"))
    .collect()
}
