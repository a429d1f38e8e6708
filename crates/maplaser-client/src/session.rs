//! Submit-then-poll flow for one form.
//!
//! [`JobSession`] owns the state the flow needs between steps: the current
//! phase, the ticket being polled and the attempt counter.

use crate::poll::{PollObserver, PollingClient, ReadyImage, Sleeper, ThreadSleeper};
use crate::submit::{JobTicket, SubmissionClient};
use crate::transport::HttpTransport;
use crate::{ClientConfig, ClientError, Result};
use maplaser_request::MapForm;
use tracing::{debug, info};

/// Where the session is in the submit/poll flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// Accepting form edits; nothing in flight.
    Editing,
    /// Submitted; waiting for the image.
    Generating { ticket: JobTicket },
    /// The image is available for download.
    Ready { image: ReadyImage },
}

/// Drives one form through submission and polling.
pub struct JobSession<T, S = ThreadSleeper> {
    config: ClientConfig,
    transport: T,
    sleeper: S,
    phase: SessionPhase,
    attempts: u32,
}

impl<T: HttpTransport> JobSession<T, ThreadSleeper> {
    /// Session that sleeps the current thread between polls.
    pub fn new(config: ClientConfig, transport: T) -> Self {
        Self::with_sleeper(config, transport, ThreadSleeper)
    }
}

impl<T: HttpTransport, S: Sleeper> JobSession<T, S> {
    pub fn with_sleeper(config: ClientConfig, transport: T, sleeper: S) -> Self {
        Self {
            config,
            transport,
            sleeper,
            phase: SessionPhase::Editing,
            attempts: 0,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    /// Poll requests issued for the current ticket.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Whether a download is currently offered.
    pub fn download_available(&self) -> bool {
        matches!(self.phase, SessionPhase::Ready { .. })
    }

    /// A form input changed: hide any finished download.
    pub fn form_edited(&mut self) {
        if let SessionPhase::Ready { .. } = self.phase {
            debug!("form edited, hiding download");
            self.phase = SessionPhase::Editing;
        }
    }

    /// Collect the form and submit it.
    ///
    /// On failure the session returns to [`SessionPhase::Editing`].
    pub fn submit(&mut self, form: &MapForm) -> Result<JobTicket> {
        if let SessionPhase::Generating { .. } = self.phase {
            return Err(ClientError::InvalidState("a map is already being generated"));
        }

        let request = form.build_request()?;
        let result = SubmissionClient::new(&self.transport, &self.config).submit(&request);
        match result {
            Ok(ticket) => {
                self.attempts = 0;
                self.phase = SessionPhase::Generating {
                    ticket: ticket.clone(),
                };
                Ok(ticket)
            }
            Err(e) => {
                self.phase = SessionPhase::Editing;
                Err(e)
            }
        }
    }

    /// Start waiting on a job submitted elsewhere.
    ///
    /// An invalid job id returns the session to [`SessionPhase::Editing`].
    pub fn resume(&mut self, job_id: &str) -> Result<JobTicket> {
        if let SessionPhase::Generating { .. } = self.phase {
            return Err(ClientError::InvalidState("a map is already being generated"));
        }
        let ticket = match JobTicket::for_job(&self.config, job_id) {
            Ok(ticket) => ticket,
            Err(e) => {
                self.phase = SessionPhase::Editing;
                return Err(e);
            }
        };
        info!(job = %ticket.id, url = %ticket.url, "resuming map job");
        self.attempts = 0;
        self.phase = SessionPhase::Generating {
            ticket: ticket.clone(),
        };
        Ok(ticket)
    }

    /// Poll the in-flight job until its image is ready.
    ///
    /// Giving up after the attempt bound returns the session to
    /// [`SessionPhase::Editing`].
    pub fn wait(&mut self, observer: Option<&PollObserver>) -> Result<ReadyImage> {
        let ticket = match &self.phase {
            SessionPhase::Generating { ticket } => ticket.clone(),
            _ => return Err(ClientError::InvalidState("no map is being generated")),
        };

        let poller = PollingClient::new(&self.transport, &self.sleeper, &self.config);
        match poller.wait(&ticket, &mut self.attempts, observer) {
            Ok(image) => {
                self.phase = SessionPhase::Ready {
                    image: image.clone(),
                };
                Ok(image)
            }
            Err(e) => {
                self.phase = SessionPhase::Editing;
                Err(e)
            }
        }
    }
}
