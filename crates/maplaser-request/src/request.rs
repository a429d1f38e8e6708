//! The JSON record sent to the rendering service.
//!
//! Field names are fixed by the service:
//!
//! ```json
//! {
//!   "user":     { "name": "...", "email": "..." },
//!   "bounds":   { "minlat": 0.0, "minlon": 0.0, "maxlat": 0.0, "maxlon": 0.0, "x_mm": 200, "y_mm": 300 },
//!   "contours": { "interval": 10.0 },
//!   "layers":   ["buildings", "contours"]
//! }
//! ```

use crate::selection::{BoundingBox, PrintDimensions};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Who the map is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: String,
    pub email: String,
}

/// Selected area and print size, flattened the way the service expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RequestBounds {
    pub minlat: f64,
    pub minlon: f64,
    pub maxlat: f64,
    pub maxlon: f64,
    pub x_mm: u32,
    pub y_mm: u32,
}

impl RequestBounds {
    pub fn new(bounds: BoundingBox, dims: PrintDimensions) -> Self {
        Self {
            minlat: bounds.min_lat,
            minlon: bounds.min_lon,
            maxlat: bounds.max_lat,
            maxlon: bounds.max_lon,
            x_mm: dims.x_mm,
            y_mm: dims.y_mm,
        }
    }
}

/// Contour line options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContourOptions {
    /// Elevation spacing between contour lines, in metres.
    pub interval: f64,
}

/// One map generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapRequest {
    pub user: UserInfo,
    pub bounds: RequestBounds,
    pub contours: ContourOptions,
    /// Selected layer identifiers. Serialized in sorted order.
    pub layers: BTreeSet<String>,
}

impl MapRequest {
    /// Serialize to the JSON body posted to the service.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Pretty-printed JSON, for display.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sample() -> MapRequest {
        MapRequest {
            user: UserInfo {
                name: "Ada".to_string(),
                email: "ada@example.org".to_string(),
            },
            bounds: RequestBounds {
                minlat: 51.44,
                minlon: -0.99,
                maxlat: 51.47,
                maxlon: -0.97,
                x_mm: 200,
                y_mm: 300,
            },
            contours: ContourOptions { interval: 10.0 },
            layers: ["water", "buildings"].iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_wire_field_names() {
        let value: Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(value["user"]["name"], "Ada");
        assert_eq!(value["user"]["email"], "ada@example.org");
        assert_eq!(value["bounds"]["minlat"].as_f64(), Some(51.44));
        assert_eq!(value["bounds"]["maxlon"].as_f64(), Some(-0.97));
        assert_eq!(value["bounds"]["x_mm"].as_u64(), Some(200));
        assert_eq!(value["bounds"]["y_mm"].as_u64(), Some(300));
        assert_eq!(value["contours"]["interval"].as_f64(), Some(10.0));
    }

    #[test]
    fn test_layers_serialized_sorted() {
        let value: Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
        assert_eq!(value["layers"], serde_json::json!(["buildings", "water"]));
    }
}
