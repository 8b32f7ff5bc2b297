//! Windsurf importer: `~/.codeium/windsurf/mcp_config.json`.

use std::path::Path;

use super::{ConfigFragment, json_fragment};

pub(super) fn import(_root_dir: &Path, home_dir: &Path) -> Vec<ConfigFragment> {
    json_fragment(
        &home_dir.join(".codeium").join("windsurf").join("mcp_config.json"),
        "mcpServers",
    )
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_user_config() {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path().join(".codeium/windsurf");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("mcp_config.json"),
            r#"{"mcpServers": {"surf": {"command": "mcp-surf"}}}"#,
        )
        .unwrap();

        let fragments = import(&temp.path().join("proj"), temp.path());

        assert_eq!(fragments.len(), 1);
        assert!(fragments[0].servers.contains_key("surf"));
    }
}
