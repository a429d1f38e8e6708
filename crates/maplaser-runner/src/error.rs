//! Error types for the command-line runner.

use maplaser_client::ClientError;
use maplaser_request::RequestError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by `maplaser` commands.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Could not read the config file.
    #[error("failed to read config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid YAML for the client settings.
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for runner operations.
pub type RunnerResult<T> = Result<T, RunnerError>;
