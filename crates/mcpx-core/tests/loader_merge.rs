use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use mcpx_core::error::ConfigError;
use mcpx_core::mcp::{CommandSpec, SourceKind};
use mcpx_core::prelude::{LoadOptions, load_server_definitions};

fn write_config(dir: &Path, relative: &str, body: &str) -> PathBuf {
    let path = dir.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, body).unwrap();
    path
}

fn options(root: &Path, home: &Path) -> LoadOptions {
    LoadOptions::new()
        .with_root_dir(root.to_path_buf())
        .with_home_dir(home.to_path_buf())
}

#[test]
fn disjoint_configs_resolve_to_their_union() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");
    let home = temp.path().join("home");
    write_config(
        &root,
        "mcp.json",
        r#"{"mcpServers": {"alpha": {"url": "https://alpha.test"}}}"#,
    );
    write_config(
        &home,
        ".mcpx/mcp.json",
        r#"{"mcpServers": {"beta": {"command": ["beta-server", "--stdio"]}}}"#,
    );

    let servers = load_server_definitions(&options(&root, &home)).unwrap();

    let names: Vec<&str> = servers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "beta"]);
}

#[test]
fn project_config_wins_for_shared_names() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");
    let home = temp.path().join("home");
    let project_path = write_config(
        &root,
        "mcp.json",
        r#"{"mcpServers": {"shared": {"url": "https://project.test"}}}"#,
    );
    write_config(
        &home,
        ".mcpx/mcp.json",
        r#"{"mcpServers": {"shared": {"url": "https://user.test"}}}"#,
    );

    let servers = load_server_definitions(&options(&root, &home)).unwrap();

    assert_eq!(servers.len(), 1);
    let shared = &servers[0];
    match &shared.command {
        CommandSpec::Http { url, .. } => assert_eq!(url.as_str(), "https://project.test/"),
        CommandSpec::Stdio { .. } => panic!("expected http"),
    }
    assert_eq!(shared.source.kind, SourceKind::Local);
    assert_eq!(shared.source.path, project_path);
}

#[test]
fn http_entry_keeps_url_and_headers() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");
    let home = temp.path().join("home");
    write_config(
        &root,
        "mcp.json",
        r#"{
            "mcpServers": {
                "remote": {
                    "url": "https://example.test",
                    "headers": {"Authorization": "Bearer abc"}
                }
            }
        }"#,
    );

    let servers = load_server_definitions(&options(&root, &home)).unwrap();

    let mut expected = HashMap::new();
    expected.insert("Authorization".to_string(), "Bearer abc".to_string());
    match &servers[0].command {
        CommandSpec::Http { url, headers } => {
            assert_eq!(url.as_str(), "https://example.test/");
            assert_eq!(headers.as_ref(), Some(&expected));
        }
        CommandSpec::Stdio { .. } => panic!("expected http"),
    }
}

#[test]
fn stdio_entry_gets_absolute_source_directory_as_cwd() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");
    let home = temp.path().join("home");
    write_config(
        &root,
        "mcp.json",
        r#"{"mcpServers": {"local": {"command": ["node", "server.js"]}}}"#,
    );

    let servers = load_server_definitions(&options(&root, &home)).unwrap();

    match &servers[0].command {
        CommandSpec::Stdio { command, args, cwd } => {
            assert_eq!(command, "node");
            assert_eq!(args, &vec!["server.js".to_string()]);
            assert_eq!(cwd, &root);
            assert!(cwd.is_absolute());
        }
        CommandSpec::Http { .. } => panic!("expected stdio"),
    }
}

#[test]
fn optional_fields_survive_normalization() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");
    let home = temp.path().join("home");
    write_config(
        &root,
        "mcp.json",
        r#"{
            "mcpServers": {
                "full": {
                    "description": "documentation server",
                    "executable": "mcp-docs",
                    "args": ["--serve"],
                    "env": {"DOCS_ROOT": "/srv/docs"},
                    "auth": "oauth",
                    "tokenCacheDir": "/tmp/tokens",
                    "client_name": "mcpx",
                    "bearerTokenEnv": "DOCS_TOKEN"
                }
            }
        }"#,
    );

    let servers = load_server_definitions(&options(&root, &home)).unwrap();

    let full = &servers[0];
    assert_eq!(full.description.as_deref(), Some("documentation server"));
    assert_eq!(full.env.as_ref().unwrap()["DOCS_ROOT"], "/srv/docs");
    assert_eq!(full.auth.as_deref(), Some("oauth"));
    assert_eq!(full.token_cache_dir.as_deref(), Some("/tmp/tokens"));
    assert_eq!(full.client_name.as_deref(), Some("mcpx"));
    assert_eq!(full.bearer_token_env.as_deref(), Some("DOCS_TOKEN"));
}

#[test]
fn incomplete_entry_fails_the_whole_resolution() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");
    let home = temp.path().join("home");
    write_config(
        &root,
        "mcp.json",
        r#"{
            "mcpServers": {
                "good": {"command": "fine"},
                "bad": {"description": "no command, no url"}
            }
        }"#,
    );

    let err = load_server_definitions(&options(&root, &home)).unwrap_err();

    match err.downcast_ref::<ConfigError>() {
        Some(ConfigError::IncompleteEntry { name }) => assert_eq!(name, "bad"),
        other => panic!("expected IncompleteEntry, got {:?}", other),
    }
}

#[test]
fn invalid_url_fails_the_whole_resolution() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("proj");
    let home = temp.path().join("home");
    write_config(
        &root,
        "mcp.json",
        r#"{"mcpServers": {"broken": {"url": "definitely not a url"}}}"#,
    );

    let err = load_server_definitions(&options(&root, &home)).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::InvalidAddress { .. })
    ));
}
