//! Job status reported by the service while a map is not ready.

use serde::Deserialize;
use std::fmt;

/// Progress of a queued map job, parsed from `{"Status": "..."}` bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Queued,
    Started,
    Deferred,
    /// The worker gave up; carries the service's message.
    Failed(String),
    /// Any other status text.
    Other(String),
}

#[derive(Deserialize)]
struct StatusBody {
    #[serde(rename = "Status")]
    status: String,
}

impl JobStatus {
    /// Parse a status body. Returns `None` if the body is not a status object.
    pub fn parse(body: &str) -> Option<Self> {
        let parsed: StatusBody = serde_json::from_str(body).ok()?;
        Some(Self::from_text(parsed.status))
    }

    fn from_text(text: String) -> Self {
        match text.as_str() {
            "Queued" => JobStatus::Queued,
            "Started" => JobStatus::Started,
            "Job deferred" => JobStatus::Deferred,
            t if t.starts_with("Failed") => JobStatus::Failed(text),
            _ => JobStatus::Other(text),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, JobStatus::Failed(_))
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Queued => f.write_str("queued"),
            JobStatus::Started => f.write_str("started"),
            JobStatus::Deferred => f.write_str("deferred"),
            JobStatus::Failed(msg) | JobStatus::Other(msg) => f.write_str(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(JobStatus::parse(r#"{"Status": "Queued"}"#), Some(JobStatus::Queued));
        assert_eq!(JobStatus::parse(r#"{"Status": "Started"}"#), Some(JobStatus::Started));
        assert_eq!(JobStatus::parse(r#"{"Status": "Job deferred"}"#), Some(JobStatus::Deferred));
    }

    #[test]
    fn test_parse_failed() {
        let status = JobStatus::parse(
            r#"{"Status": "Failed - Maybe timed out, please select a smaller area or fewer features"}"#,
        )
        .unwrap();
        assert!(status.is_failed());
        assert!(status.to_string().contains("smaller area"));
    }

    #[test]
    fn test_parse_other_and_garbage() {
        assert_eq!(
            JobStatus::parse(r#"{"Status": "Paused"}"#),
            Some(JobStatus::Other("Paused".to_string()))
        );
        assert_eq!(JobStatus::parse("<html>502</html>"), None);
        assert_eq!(JobStatus::parse(r#"{"Error": "nope"}"#), None);
    }
}
