//! Loose input schema for `mcp.json`.
//!
//! Raw shapes are alias-tolerant: a network address may arrive under five
//! spellings and several scalar attributes under a camelCase and a snake_case
//! key. No field is required at the entry level; unknown fields are ignored
//! for forward compatibility. Collapsing the aliases into one canonical value
//! happens in the normalizer, not here.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Legacy tools whose native configuration can seed a first `mcp.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportKind {
    Cursor,
    ClaudeCode,
    ClaudeDesktop,
    Codex,
    Windsurf,
    #[serde(rename = "vscode")]
    VSCode,
}

impl ImportKind {
    /// Every known kind, in the order migration attempts them.
    pub const ALL: [ImportKind; 6] = [
        ImportKind::Cursor,
        ImportKind::ClaudeCode,
        ImportKind::ClaudeDesktop,
        ImportKind::Codex,
        ImportKind::Windsurf,
        ImportKind::VSCode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImportKind::Cursor => "cursor",
            ImportKind::ClaudeCode => "claude-code",
            ImportKind::ClaudeDesktop => "claude-desktop",
            ImportKind::Codex => "codex",
            ImportKind::Windsurf => "windsurf",
            ImportKind::VSCode => "vscode",
        }
    }
}

impl std::fmt::Display for ImportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `command` field is either one command line string or an argv sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandField {
    Line(String),
    Argv(Vec<String>),
}

/// One raw server entry as found on disk.
///
/// The camelCase spellings carry their own fields so that a file defining
/// both spellings round-trips untouched; precedence is applied later.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "baseUrl", skip_serializing_if = "Option::is_none")]
    pub base_url_camel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "serverUrl", skip_serializing_if = "Option::is_none")]
    pub server_url_camel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<CommandField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,

    #[serde(rename = "tokenCacheDir", skip_serializing_if = "Option::is_none")]
    pub token_cache_dir_camel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_cache_dir: Option<String>,

    #[serde(rename = "clientName", skip_serializing_if = "Option::is_none")]
    pub client_name_camel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,

    #[serde(rename = "oauthRedirectUrl", skip_serializing_if = "Option::is_none")]
    pub oauth_redirect_url_camel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth_redirect_url: Option<String>,

    #[serde(rename = "bearerToken", skip_serializing_if = "Option::is_none")]
    pub bearer_token_camel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,

    #[serde(rename = "bearerTokenEnv", skip_serializing_if = "Option::is_none")]
    pub bearer_token_env_camel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bearer_token_env: Option<String>,
}

/// One config file: named server entries plus an optional import list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    #[serde(rename = "mcpServers")]
    pub mcp_servers: BTreeMap<String, RawEntry>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub imports: Option<Vec<ImportKind>>,
}
