//! Error types for building map requests.

use thiserror::Error;

/// Errors that can occur while collecting form state into a request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The name field is empty.
    #[error("name must not be empty")]
    MissingName,

    /// The email field does not look like an address.
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    /// No area selection has been synced into the form.
    #[error("no map area selected")]
    NoSelection,

    /// A print dimension is not a positive, finite number of millimetres.
    #[error("invalid {axis} dimension: {value}")]
    InvalidDimension {
        /// Which axis was being set ("width" or "height").
        axis: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Bounding box corners are inverted, non-finite or off the globe.
    #[error("invalid bounds: lat {min_lat}..{max_lat}, lon {min_lon}..{max_lon}")]
    InvalidBounds {
        /// Minimum latitude.
        min_lat: f64,
        /// Minimum longitude.
        min_lon: f64,
        /// Maximum latitude.
        max_lat: f64,
        /// Maximum longitude.
        max_lon: f64,
    },

    /// A layer identifier that the rendering service does not know.
    #[error("unknown layer: {0}")]
    UnknownLayer(String),

    /// The contour interval is not a positive, finite number.
    #[error("invalid contour interval: {0}")]
    InvalidContourInterval(f64),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
