//! # maplaser-request
//!
//! Collects a map-to-laser print request: the selected map area, the print
//! size in millimetres, contour options and layers, and who the map is for.
//!
//! ## Overview
//!
//! - [`AreaSelection`] stands in for the map's area-select widget. It holds a
//!   bounding box and the print size, and resizes the box when the print size
//!   changes.
//! - [`MapForm`] collects form inputs and gates submission on a non-empty name
//!   and a valid email address.
//! - [`MapRequest`] is the JSON record posted to the rendering service.
//!
//! ## Example
//!
//! ```
//! use maplaser_request::{AreaSelection, Layer, MapForm};
//!
//! let mut selection = AreaSelection::default();
//! selection.set_dimensions(Some(250.0), None)?;
//!
//! let mut form = MapForm::new();
//! form.set_name("Ada");
//! form.set_email("ada@example.org");
//! form.toggle_layer(Layer::Contours, true);
//! assert!(form.sync_selection(&selection));
//!
//! let json = form.build_request()?.to_json()?;
//! assert!(json.contains("\"x_mm\":250"));
//! # Ok::<(), maplaser_request::RequestError>(())
//! ```

mod email;
mod error;
mod form;
mod layers;
mod request;
mod selection;

pub use email::is_email;
pub use error::RequestError;
pub use form::{MapForm, DEFAULT_CONTOUR_INTERVAL};
pub use layers::Layer;
pub use request::{ContourOptions, MapRequest, RequestBounds, UserInfo};
pub use selection::{
    AreaSelection, BoundingBox, PrintDimensions, DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON,
    DEFAULT_HEIGHT_MM, DEFAULT_WIDTH_MM,
};

/// Result type for request building.
pub type Result<T> = std::result::Result<T, RequestError>;
