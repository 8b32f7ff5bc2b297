//! Resolved MCP server specification.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;
use url::Url;

/// How a server is reached: over HTTP or by spawning a local process.
///
/// Exactly one variant per server, decided during normalization. The stdio
/// working directory is always absolute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CommandSpec {
    Http {
        url: Url,
        #[serde(skip_serializing_if = "Option::is_none")]
        headers: Option<HashMap<String, String>>,
    },
    Stdio {
        command: String,
        args: Vec<String>,
        cwd: PathBuf,
    },
}

impl CommandSpec {
    pub fn http(url: Url, headers: Option<HashMap<String, String>>) -> Self {
        CommandSpec::Http { url, headers }
    }

    pub fn stdio(command: String, args: Vec<String>, cwd: PathBuf) -> Self {
        CommandSpec::Stdio { command, args, cwd }
    }

    pub fn is_http(&self) -> bool {
        matches!(self, CommandSpec::Http { .. })
    }
}

/// Which kind of file a server definition came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A canonical `mcp.json` file.
    Local,
    /// Another tool's native configuration, seen during legacy migration.
    Import,
}

/// Provenance of a server definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerSource {
    pub kind: SourceKind,
    pub path: PathBuf,
}

impl ServerSource {
    pub fn local(path: PathBuf) -> Self {
        Self {
            kind: SourceKind::Local,
            path,
        }
    }

    pub fn import(path: PathBuf) -> Self {
        Self {
            kind: SourceKind::Import,
            path,
        }
    }
}

/// One fully resolved MCP server, keyed by unique name.
///
/// Constructed once per resolution call and not mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub command: CommandSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_cache_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_redirect_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_token_env: Option<String>,
    pub source: ServerSource,
}
