//! Error taxonomy for configuration resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Failure modes of one resolution call.
///
/// Optional targets swallow a not-found condition; every other condition
/// aborts the whole resolution. There is no partial success mode.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly given config path does not exist.
    #[error("config file not found: {path}")]
    MissingExplicitConfig { path: PathBuf },

    /// A present file is invalid JSON or has the wrong shape.
    #[error("malformed config file {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    /// An entry defines neither a network address nor a command.
    #[error("server '{name}' defines neither a server URL nor a command")]
    IncompleteEntry { name: String },

    /// A matched network-address alias does not parse as a URL.
    #[error("server '{name}' has an invalid URL '{value}'")]
    InvalidAddress {
        name: String,
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// A config file could not be read for a reason other than absence.
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
