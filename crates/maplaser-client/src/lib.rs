//! # maplaser-client
//!
//! Client for the map-to-laser rendering service.
//!
//! A map request is posted as JSON; the service answers with a job id. The
//! finished SVG is then fetched from `<endpoint>/<id>` by polling at a fixed
//! interval until the response carries `Content-Type: image/svg+xml`.
//!
//! ## Example
//!
//! ```no_run
//! use maplaser_client::{ClientConfig, JobSession, ReqwestTransport};
//! use maplaser_request::{AreaSelection, MapForm};
//!
//! let config = ClientConfig::default();
//! let transport = ReqwestTransport::new(&config)?;
//! let mut session = JobSession::new(config, transport);
//!
//! let mut form = MapForm::new();
//! form.set_name("Ada");
//! form.set_email("ada@example.org");
//! form.sync_selection(&AreaSelection::default());
//!
//! session.submit(&form)?;
//! let image = session.wait(None)?;
//! image.save(".")?;
//! # Ok::<(), maplaser_client::ClientError>(())
//! ```

mod config;
mod error;
mod poll;
mod session;
mod status;
mod submit;
mod transport;

pub use config::{
    ClientConfig, DEFAULT_ENDPOINT, DEFAULT_MAX_ATTEMPTS, DEFAULT_POLL_INTERVAL_SECS,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};
pub use error::ClientError;
pub use poll::{
    is_ready_content_type, PollObserver, PollProgress, PollingClient, ReadyImage, Sleeper,
    ThreadSleeper, SVG_CONTENT_TYPE,
};
pub use session::{JobSession, SessionPhase};
pub use status::JobStatus;
pub use submit::{is_valid_job_id, JobTicket, SubmissionClient};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
