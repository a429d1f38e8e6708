//! Client configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default rendering service endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://maptolaser.geo-fun.org";

/// Default delay between poll attempts, in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Default poll attempt bound (ten minutes at the default interval).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 120;

/// Default HTTP request timeout, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Settings for talking to the rendering service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL requests are posted to.
    pub endpoint: String,
    /// Path segment inserted between the endpoint and the job id when polling
    /// (empty for `<endpoint>/<id>`, `job/` for `<endpoint>/job/<id>`).
    pub job_path: String,
    /// Seconds between poll attempts.
    pub poll_interval_secs: u64,
    /// Maximum poll attempts before giving up. Zero polls forever.
    pub max_attempts: u32,
    /// Per-request HTTP timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            job_path: String::new(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Delay between poll attempts.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// HTTP request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// URL the request record is posted to.
    pub fn submit_url(&self) -> &str {
        &self.endpoint
    }

    /// URL polled for a job's result.
    pub fn job_url(&self, job_id: &str) -> String {
        format!(
            "{}/{}{}",
            self.endpoint.trim_end_matches('/'),
            self.job_path,
            job_id
        )
    }

    /// Whether polling has an attempt bound.
    pub fn is_bounded(&self) -> bool {
        self.max_attempts > 0
    }
}
