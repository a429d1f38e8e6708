//! Client settings: YAML file plus command-line overrides.
//!
//! ```yaml
//! endpoint: https://maptolaser.geo-fun.org
//! job_path: ""
//! poll_interval_secs: 5
//! max_attempts: 120
//! request_timeout_secs: 60
//! ```
//!
//! Every key is optional.

use crate::cli::Cli;
use crate::error::{RunnerError, RunnerResult};
use maplaser_client::ClientConfig;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load settings from `path`, or defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> RunnerResult<ClientConfig> {
    let Some(path) = path else {
        return Ok(ClientConfig::default());
    };
    let text = fs::read_to_string(path).map_err(|source| RunnerError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&text)?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Parse settings from YAML text. An empty document yields defaults.
pub fn parse_config(text: &str) -> RunnerResult<ClientConfig> {
    if text.trim().is_empty() {
        return Ok(ClientConfig::default());
    }
    Ok(serde_yaml::from_str(text)?)
}

/// Apply `--endpoint`, `--poll-interval` and `--max-attempts`.
pub fn apply_overrides(config: &mut ClientConfig, cli: &Cli) {
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    if let Some(secs) = cli.poll_interval {
        config.poll_interval_secs = secs;
    }
    if let Some(max) = cli.max_attempts {
        config.max_attempts = max;
    }
}
