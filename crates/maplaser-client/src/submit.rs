//! Submission client: posts a request record and returns a job ticket.

use crate::transport::HttpTransport;
use crate::{ClientConfig, ClientError, Result};
use chrono::{DateTime, Utc};
use maplaser_request::MapRequest;
use tracing::{debug, info};

/// A submitted job: where to poll for it and what to call the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobTicket {
    /// Identifier returned by the service.
    pub id: String,
    /// URL polled for the generated image.
    pub url: String,
    /// Suggested filename for the download.
    pub filename: String,
    /// When the job was submitted (or resumed).
    pub submitted_at: DateTime<Utc>,
}

impl JobTicket {
    /// Ticket for a known job id.
    ///
    /// The id ends up in both the poll URL and the saved filename, so only
    /// ids made of ASCII letters, digits, `_` and `-` are accepted.
    pub fn for_job(config: &ClientConfig, id: &str) -> Result<Self> {
        if !is_valid_job_id(id) {
            return Err(ClientError::InvalidJobId(id.to_string()));
        }
        Ok(JobTicket {
            id: id.to_string(),
            url: config.job_url(id),
            filename: format!("{}.svg", id),
            submitted_at: Utc::now(),
        })
    }
}

/// Whether `id` is safe to use as a URL segment and a file stem.
pub fn is_valid_job_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Posts request records to the rendering service.
pub struct SubmissionClient<'a, T> {
    transport: &'a T,
    config: &'a ClientConfig,
}

impl<'a, T: HttpTransport> SubmissionClient<'a, T> {
    pub fn new(transport: &'a T, config: &'a ClientConfig) -> Self {
        Self { transport, config }
    }

    /// Serialize and post one request. No retry.
    pub fn submit(&self, request: &MapRequest) -> Result<JobTicket> {
        let body = request.to_json()?;
        debug!(url = self.config.submit_url(), %body, "posting map request");

        let response = self.transport.post_json(self.config.submit_url(), &body)?;
        if !response.is_success() {
            return Err(ClientError::SubmitRejected {
                status: response.status,
                body: response.body,
            });
        }

        let id = response.body.trim();
        if id.is_empty() {
            return Err(ClientError::EmptyJobId);
        }

        let ticket = JobTicket::for_job(self.config, id)?;
        info!(job = %ticket.id, url = %ticket.url, "map job submitted");
        Ok(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::HttpResponse;
    use maplaser_request::{AreaSelection, MapForm};
    use std::cell::RefCell;

    struct OnePost {
        response: HttpResponse,
        posted: RefCell<Vec<(String, String)>>,
    }

    impl HttpTransport for OnePost {
        fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse> {
            self.posted.borrow_mut().push((url.to_string(), body.to_string()));
            Ok(self.response.clone())
        }

        fn get(&self, _url: &str) -> Result<HttpResponse> {
            panic!("submission must not GET");
        }
    }

    fn transport(status: u16, body: &str) -> OnePost {
        OnePost {
            response: HttpResponse {
                status,
                content_type: Some("text/html; charset=utf-8".to_string()),
                body: body.to_string(),
            },
            posted: RefCell::new(Vec::new()),
        }
    }

    fn request() -> MapRequest {
        let mut form = MapForm::new();
        form.set_name("Ada");
        form.set_email("ada@example.org");
        form.sync_selection(&AreaSelection::default());
        form.build_request().unwrap()
    }

    #[test]
    fn test_submit_builds_ticket_from_body() {
        let config = ClientConfig::default();
        let transport = transport(200, "5f1c-77aa\n");
        let ticket = SubmissionClient::new(&transport, &config).submit(&request()).unwrap();

        assert_eq!(ticket.id, "5f1c-77aa");
        assert_eq!(ticket.url, "https://maptolaser.geo-fun.org/5f1c-77aa");
        assert_eq!(ticket.filename, "5f1c-77aa.svg");

        let posted = transport.posted.borrow();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].0, "https://maptolaser.geo-fun.org");
        let body: serde_json::Value = serde_json::from_str(&posted[0].1).unwrap();
        assert_eq!(body["user"]["email"], "ada@example.org");
    }

    #[test]
    fn test_submit_rejected() {
        let config = ClientConfig::default();
        let transport = transport(400, r#"{"Error": "Unable to parse json job request"}"#);
        let err = SubmissionClient::new(&transport, &config).submit(&request()).unwrap_err();
        assert!(matches!(err, ClientError::SubmitRejected { status: 400, .. }));
    }

    #[test]
    fn test_submit_empty_id() {
        let config = ClientConfig::default();
        let transport = transport(200, "  ");
        let err = SubmissionClient::new(&transport, &config).submit(&request()).unwrap_err();
        assert!(matches!(err, ClientError::EmptyJobId));
    }

    #[test]
    fn test_job_id_charset() {
        assert!(is_valid_job_id("5f1c-77aa"));
        assert!(is_valid_job_id("job_42"));
        for bad in ["", "..", "../x", "a/b", "a\\b", "/etc/passwd", "C:x", "a b", "id?x=1", "caf\u{e9}"] {
            assert!(!is_valid_job_id(bad), "{:?} accepted", bad);
        }
    }

    #[test]
    fn test_submit_rejects_path_like_id() {
        let config = ClientConfig::default();
        let transport = transport(200, "/tmp/evil\n");
        let err = SubmissionClient::new(&transport, &config).submit(&request()).unwrap_err();
        assert!(matches!(err, ClientError::InvalidJobId(ref id) if id == "/tmp/evil"));
    }
}
