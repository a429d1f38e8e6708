//! Error types for the rendering service client.

use maplaser_request::RequestError;
use thiserror::Error;

/// Errors that can occur while submitting or waiting for a map job.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The form could not be turned into a request.
    #[error("request error: {0}")]
    Request(#[from] RequestError),

    /// HTTP transport error.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered the submission with a non-success status.
    #[error("submission rejected with HTTP {status}: {body}")]
    SubmitRejected {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The service accepted the submission but returned no job identifier.
    #[error("service returned an empty job identifier")]
    EmptyJobId,

    /// The job identifier contains characters unsafe for a URL or filename.
    #[error("invalid job identifier {0:?}")]
    InvalidJobId(String),

    /// The image was not ready after the configured number of attempts.
    #[error("map not ready after {attempts} poll attempts")]
    PollTimeout {
        /// Number of GET requests issued.
        attempts: u32,
    },

    /// I/O error saving the image.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The session was asked to do something its current phase does not allow.
    #[error("invalid session state: {0}")]
    InvalidState(&'static str),
}
