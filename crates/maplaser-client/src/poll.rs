//! Polling client: waits for a submitted job's image.
//!
//! Every poll interval the ticket URL is fetched. The job is done when the
//! response's `Content-Type` is exactly `image/svg+xml`; any other response,
//! including HTTP errors and transport failures, means "not ready yet".
//! Polling stops after `max_attempts` requests unless that bound is zero.

use crate::status::JobStatus;
use crate::submit::JobTicket;
use crate::transport::HttpTransport;
use crate::{ClientConfig, ClientError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Content type that marks a finished map.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Pauses between poll attempts.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl<S: Sleeper + ?Sized> Sleeper for &S {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}

/// What one poll attempt observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollProgress {
    /// 1-based attempt number.
    pub attempt: u32,
    /// HTTP status, if a response arrived.
    pub status_code: Option<u16>,
    /// Response `Content-Type`, if any.
    pub content_type: Option<String>,
    /// Parsed job status, if the body was a status object.
    pub job_status: Option<JobStatus>,
    /// Transport error text, if the request failed.
    pub error: Option<String>,
    /// Whether this attempt found the finished image.
    pub ready: bool,
}

/// Callback invoked after every poll attempt.
pub type PollObserver = Box<dyn Fn(&PollProgress) + Send + Sync>;

/// A finished map image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyImage {
    pub ticket: JobTicket,
    /// SVG document text.
    pub svg: String,
}

impl ReadyImage {
    /// Write the SVG into `dir` under the ticket's filename.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.ticket.filename);
        fs::write(&path, self.svg.as_bytes())?;
        info!(path = %path.display(), bytes = self.svg.len(), "map saved");
        Ok(path)
    }
}

/// Whether a response's content type marks the finished image.
pub fn is_ready_content_type(content_type: Option<&str>) -> bool {
    content_type == Some(SVG_CONTENT_TYPE)
}

/// Polls a job URL until the image is ready.
pub struct PollingClient<'a, T, S> {
    transport: &'a T,
    sleeper: &'a S,
    config: &'a ClientConfig,
}

impl<'a, T: HttpTransport, S: Sleeper> PollingClient<'a, T, S> {
    pub fn new(transport: &'a T, sleeper: &'a S, config: &'a ClientConfig) -> Self {
        Self {
            transport,
            sleeper,
            config,
        }
    }

    /// Issue one GET and classify the response.
    pub fn check(&self, ticket: &JobTicket, attempt: u32) -> (PollProgress, Option<String>) {
        match self.transport.get(&ticket.url) {
            Ok(response) => {
                let ready = is_ready_content_type(response.content_type.as_deref());
                let job_status = if ready {
                    None
                } else {
                    JobStatus::parse(&response.body)
                };
                let progress = PollProgress {
                    attempt,
                    status_code: Some(response.status),
                    content_type: response.content_type,
                    job_status,
                    error: None,
                    ready,
                };
                let image = ready.then_some(response.body);
                (progress, image)
            }
            Err(e) => {
                warn!(job = %ticket.id, attempt, error = %e, "poll request failed");
                let progress = PollProgress {
                    attempt,
                    status_code: None,
                    content_type: None,
                    job_status: None,
                    error: Some(e.to_string()),
                    ready: false,
                };
                (progress, None)
            }
        }
    }

    /// Poll until the image is ready or the attempt bound is reached.
    ///
    /// `attempts` is the caller-owned attempt counter; it is incremented
    /// before each request and left at the number of requests issued.
    pub fn wait(
        &self,
        ticket: &JobTicket,
        attempts: &mut u32,
        observer: Option<&PollObserver>,
    ) -> Result<ReadyImage> {
        loop {
            if self.config.is_bounded() && *attempts >= self.config.max_attempts {
                warn!(job = %ticket.id, attempts = *attempts, "giving up on map job");
                return Err(ClientError::PollTimeout {
                    attempts: *attempts,
                });
            }

            self.sleeper.sleep(self.config.poll_interval());
            *attempts = attempts.saturating_add(1);

            let (progress, image) = self.check(ticket, *attempts);
            debug!(
                job = %ticket.id,
                attempt = progress.attempt,
                content_type = ?progress.content_type,
                status = ?progress.job_status,
                "poll attempt"
            );
            if let Some(JobStatus::Failed(msg)) = &progress.job_status {
                warn!(job = %ticket.id, %msg, "service reports job failed");
            }
            if let Some(cb) = observer {
                cb(&progress);
            }

            if let Some(svg) = image {
                info!(job = %ticket.id, attempts = *attempts, "map ready");
                return Ok(ReadyImage {
                    ticket: ticket.clone(),
                    svg,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::HttpResponse;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    struct Scripted {
        responses: RefCell<VecDeque<HttpResponse>>,
        gets: Cell<u32>,
    }

    impl Scripted {
        fn new(responses: Vec<HttpResponse>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                gets: Cell::new(0),
            }
        }
    }

    impl HttpTransport for Scripted {
        fn post_json(&self, _url: &str, _body: &str) -> Result<HttpResponse> {
            panic!("polling must not POST");
        }

        fn get(&self, _url: &str) -> Result<HttpResponse> {
            self.gets.set(self.gets.get() + 1);
            Ok(self
                .responses
                .borrow_mut()
                .pop_front()
                .expect("script exhausted"))
        }
    }

    #[derive(Default)]
    struct CountingSleeper(Cell<u32>);

    impl Sleeper for CountingSleeper {
        fn sleep(&self, duration: Duration) {
            assert_eq!(duration, Duration::from_secs(5));
            self.0.set(self.0.get() + 1);
        }
    }

    fn status(text: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            content_type: Some("application/json".to_string()),
            body: format!(r#"{{"Status": "{}"}}"#, text),
        }
    }

    fn svg() -> HttpResponse {
        HttpResponse {
            status: 200,
            content_type: Some(SVG_CONTENT_TYPE.to_string()),
            body: "<svg/>".to_string(),
        }
    }

    fn ticket(config: &ClientConfig) -> JobTicket {
        JobTicket::for_job(config, "job-1").unwrap()
    }

    #[test]
    fn test_stops_exactly_on_svg() {
        let config = ClientConfig::default();
        let transport = Scripted::new(vec![status("Queued"), status("Started"), svg(), svg()]);
        let sleeper = CountingSleeper::default();
        let poller = PollingClient::new(&transport, &sleeper, &config);

        let mut attempts = 0;
        let image = poller.wait(&ticket(&config), &mut attempts, None).unwrap();

        assert_eq!(image.svg, "<svg/>");
        assert_eq!(attempts, 3);
        assert_eq!(transport.gets.get(), 3);
        assert_eq!(sleeper.0.get(), 3);
    }

    #[test]
    fn test_near_miss_content_types_keep_polling() {
        let config = ClientConfig::default();
        let near_misses = ["image/svg", "text/xml", "image/png", "application/json"];
        let mut script: Vec<HttpResponse> = near_misses
            .iter()
            .map(|ct| HttpResponse {
                status: 200,
                content_type: Some(ct.to_string()),
                body: "<svg/>".to_string(),
            })
            .collect();
        script.push(HttpResponse {
            status: 404,
            content_type: None,
            body: String::new(),
        });
        script.push(svg());

        let transport = Scripted::new(script);
        let sleeper = CountingSleeper::default();
        let poller = PollingClient::new(&transport, &sleeper, &config);

        let mut attempts = 0;
        poller.wait(&ticket(&config), &mut attempts, None).unwrap();
        assert_eq!(attempts, 6);
    }

    #[test]
    fn test_timeout_after_max_attempts() {
        let config = ClientConfig {
            max_attempts: 2,
            ..ClientConfig::default()
        };
        let transport = Scripted::new(vec![status("Queued"), status("Queued")]);
        let sleeper = CountingSleeper::default();
        let poller = PollingClient::new(&transport, &sleeper, &config);

        let mut attempts = 0;
        let err = poller.wait(&ticket(&config), &mut attempts, None).unwrap_err();
        assert!(matches!(err, ClientError::PollTimeout { attempts: 2 }));
        assert_eq!(transport.gets.get(), 2);
    }

    #[test]
    fn test_failed_status_does_not_stop_polling() {
        let config = ClientConfig::default();
        let transport = Scripted::new(vec![status("Failed - timed out"), svg()]);
        let sleeper = CountingSleeper::default();
        let poller = PollingClient::new(&transport, &sleeper, &config);

        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = seen.clone();
        let observer: PollObserver = Box::new(move |p: &PollProgress| {
            sink.lock().unwrap().push(p.clone());
        });

        let mut attempts = 0;
        poller.wait(&ticket(&config), &mut attempts, Some(&observer)).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].job_status.as_ref().unwrap().is_failed());
        assert!(!seen[0].ready);
        assert!(seen[1].ready);
    }

    #[test]
    fn test_unbounded_counter_saturates() {
        let config = ClientConfig {
            max_attempts: 0,
            ..ClientConfig::default()
        };
        let transport = Scripted::new(vec![svg()]);
        let sleeper = CountingSleeper::default();
        let poller = PollingClient::new(&transport, &sleeper, &config);

        let mut attempts = u32::MAX;
        poller.wait(&ticket(&config), &mut attempts, None).unwrap();
        assert_eq!(attempts, u32::MAX);
    }

    #[test]
    fn test_ready_content_type_is_exact() {
        assert!(is_ready_content_type(Some("image/svg+xml")));
        assert!(!is_ready_content_type(Some("image/svg+xml; charset=utf-8")));
        assert!(!is_ready_content_type(None));
    }
}
