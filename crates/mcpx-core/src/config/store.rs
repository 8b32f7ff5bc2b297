//! Reading and writing canonical `mcp.json` files.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;

use super::schema::RawConfig;
use crate::error::ConfigError;

/// Read and validate one config file.
///
/// Returns `Ok(None)` when the file is absent and `optional` is set; a
/// missing required file and any present-but-invalid file are hard errors.
pub fn read_config(path: &Path, optional: bool) -> Result<Option<RawConfig>, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            if optional {
                return Ok(None);
            }
            return Err(ConfigError::MissingExplicitConfig {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config = serde_json::from_str(&contents).map_err(|err| ConfigError::Malformed {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    Ok(Some(config))
}

/// Write a config file, creating parent directories as needed.
pub fn write_config(path: &Path, config: &RawConfig) -> anyhow::Result<()> {
    let contents =
        serde_json::to_string_pretty(config).context("Failed to serialize config to JSON")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory: {}", parent.display())
        })?;
    }
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    Ok(())
}
