//! Normalization of raw entries into canonical server definitions.
//!
//! Aliased fields collapse under a fixed, declared precedence order: for the
//! network address `baseUrl`, `base_url`, `url`, `serverUrl`, `server_url`;
//! for camelCase/snake_case scalar pairs the camelCase spelling first. In
//! every case the first non-empty candidate wins. An entry naming neither an
//! address nor a command is rejected here, not in the schema.

use std::path::Path;

use url::Url;

use super::schema::{CommandField, RawEntry};
use crate::error::ConfigError;
use crate::mcp::{CommandSpec, ServerDefinition, ServerSource};

/// Convert one merged entry into a [`ServerDefinition`].
///
/// `base_dir` is the directory containing the file that defined the entry;
/// callers pass it absolute and it becomes the stdio working directory.
/// Normalization is deterministic: the same inputs yield a field-identical
/// definition.
pub fn normalize_server_entry(
    name: &str,
    raw: &RawEntry,
    base_dir: &Path,
    source: ServerSource,
) -> Result<ServerDefinition, ConfigError> {
    let command = resolve_command(name, raw, base_dir)?;

    Ok(ServerDefinition {
        name: name.to_string(),
        description: raw.description.clone(),
        command,
        env: raw.env.clone(),
        auth: raw.auth.clone(),
        token_cache_dir: collapse_pair(&raw.token_cache_dir_camel, &raw.token_cache_dir),
        client_name: collapse_pair(&raw.client_name_camel, &raw.client_name),
        oauth_redirect_url: collapse_pair(
            &raw.oauth_redirect_url_camel,
            &raw.oauth_redirect_url,
        ),
        bearer_token: collapse_pair(&raw.bearer_token_camel, &raw.bearer_token),
        bearer_token_env: collapse_pair(&raw.bearer_token_env_camel, &raw.bearer_token_env),
        source,
    })
}

/// Network address aliases in precedence order, first non-empty wins.
fn address_of(raw: &RawEntry) -> Option<&str> {
    first_non_empty([
        raw.base_url_camel.as_deref(),
        raw.base_url.as_deref(),
        raw.url.as_deref(),
        raw.server_url_camel.as_deref(),
        raw.server_url.as_deref(),
    ])
}

/// camelCase spelling before snake_case, first non-empty wins.
fn collapse_pair(camel: &Option<String>, snake: &Option<String>) -> Option<String> {
    first_non_empty([camel.as_deref(), snake.as_deref()]).map(str::to_string)
}

fn first_non_empty<const N: usize>(candidates: [Option<&str>; N]) -> Option<&str> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
}

/// Decide the command variant.
///
/// Any present address alias makes the server HTTP. Otherwise the command is
/// resolved from, in order: an argv-form `command`, a string-form `command`
/// (sole executable, no args), or separate `executable`/`args` fields. An
/// empty argv and an empty string are treated as absent.
fn resolve_command(
    name: &str,
    raw: &RawEntry,
    base_dir: &Path,
) -> Result<CommandSpec, ConfigError> {
    if let Some(address) = address_of(raw) {
        let url = Url::parse(address).map_err(|source| ConfigError::InvalidAddress {
            name: name.to_string(),
            value: address.to_string(),
            source,
        })?;
        return Ok(CommandSpec::http(url, raw.headers.clone()));
    }

    let cwd = base_dir.to_path_buf();
    match &raw.command {
        Some(CommandField::Argv(argv)) if !argv.is_empty() => {
            return Ok(CommandSpec::stdio(
                argv[0].clone(),
                argv[1..].to_vec(),
                cwd,
            ));
        }
        Some(CommandField::Line(line)) if !line.is_empty() => {
            return Ok(CommandSpec::stdio(line.clone(), Vec::new(), cwd));
        }
        _ => {}
    }

    if let Some(executable) = raw.executable.as_deref().filter(|e| !e.is_empty()) {
        return Ok(CommandSpec::stdio(
            executable.to_string(),
            raw.args.clone().unwrap_or_default(),
            cwd,
        ));
    }

    Err(ConfigError::IncompleteEntry {
        name: name.to_string(),
    })
}
