//! VS Code importer: project `.vscode/mcp.json`, which keys servers under
//! `servers` rather than `mcpServers`.

use std::path::Path;

use super::{ConfigFragment, json_fragment};

pub(super) fn import(root_dir: &Path, _home_dir: &Path) -> Vec<ConfigFragment> {
    json_fragment(&root_dir.join(".vscode").join("mcp.json"), "servers")
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_servers_key() {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path().join(".vscode");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("mcp.json"),
            r#"{"servers": {"code": {"command": "mcp-code", "args": ["--stdio"]}}}"#,
        )
        .unwrap();

        let fragments = import(temp.path(), &temp.path().join("home"));

        assert_eq!(fragments.len(), 1);
        let entry = &fragments[0].servers["code"];
        assert_eq!(entry.executable.as_deref(), Some("mcp-code"));
    }

    #[test]
    fn mcp_servers_key_is_not_recognized_here() {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path().join(".vscode");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("mcp.json"),
            r#"{"mcpServers": {"code": {"command": "mcp-code"}}}"#,
        )
        .unwrap();

        assert!(import(temp.path(), &temp.path().join("home")).is_empty());
    }
}
