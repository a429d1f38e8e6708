//! The rectangular map area chosen for printing.
//!
//! An [`AreaSelection`] ties a geographic bounding box to the physical size of
//! the print in millimetres. Changing the print size resizes the rectangle
//! about its centre while keeping the map scale (degrees per millimetre), the
//! same way the interactive area-select widget behaves when its width or
//! height inputs are edited.

use crate::{RequestError, Result};
use serde::{Deserialize, Serialize};

/// Latitude of the initial map view.
pub const DEFAULT_CENTER_LAT: f64 = 51.457861;

/// Longitude of the initial map view.
pub const DEFAULT_CENTER_LON: f64 = -0.979969;

/// Initial print width in millimetres.
pub const DEFAULT_WIDTH_MM: u32 = 200;

/// Initial print height in millimetres.
pub const DEFAULT_HEIGHT_MM: u32 = 300;

/// Degrees per millimetre used for the initial selection.
const DEFAULT_DEG_PER_MM: f64 = 0.0001;

/// A geographic bounding box in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Southern edge.
    pub min_lat: f64,
    /// Western edge.
    pub min_lon: f64,
    /// Northern edge.
    pub max_lat: f64,
    /// Eastern edge.
    pub max_lon: f64,
}

impl BoundingBox {
    /// Create a bounding box, checking the corners are ordered and on the globe.
    pub fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Result<Self> {
        let bbox = Self {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        };
        if bbox.is_valid() {
            Ok(bbox)
        } else {
            Err(RequestError::InvalidBounds {
                min_lat,
                min_lon,
                max_lat,
                max_lon,
            })
        }
    }

    /// Create a bounding box from its centre and its spans in degrees.
    pub fn from_center(center_lat: f64, center_lon: f64, lat_span: f64, lon_span: f64) -> Result<Self> {
        Self::new(
            center_lat - lat_span / 2.0,
            center_lon - lon_span / 2.0,
            center_lat + lat_span / 2.0,
            center_lon + lon_span / 2.0,
        )
    }

    fn is_valid(&self) -> bool {
        let finite = [self.min_lat, self.min_lon, self.max_lat, self.max_lon]
            .iter()
            .all(|v| v.is_finite());
        finite
            && self.min_lat < self.max_lat
            && self.min_lon < self.max_lon
            && self.min_lat >= -90.0
            && self.max_lat <= 90.0
            && self.min_lon >= -180.0
            && self.max_lon <= 180.0
    }

    /// Centre of the box as (lat, lon).
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// North-south extent in degrees.
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// East-west extent in degrees.
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }
}

/// Physical print size in whole millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintDimensions {
    /// Width (east-west) in millimetres.
    pub x_mm: u32,
    /// Height (north-south) in millimetres.
    pub y_mm: u32,
}

impl Default for PrintDimensions {
    fn default() -> Self {
        Self {
            x_mm: DEFAULT_WIDTH_MM,
            y_mm: DEFAULT_HEIGHT_MM,
        }
    }
}

impl PrintDimensions {
    /// Print size from millimetre inputs, rounded to whole millimetres.
    pub fn from_mm(width_mm: f64, height_mm: f64) -> Result<Self> {
        Ok(Self {
            x_mm: round_mm("width", width_mm)?,
            y_mm: round_mm("height", height_mm)?,
        })
    }
}

/// Round a millimetre input the way the form does, rejecting nonsense.
fn round_mm(axis: &'static str, value: f64) -> Result<u32> {
    let rounded = value.round();
    if !value.is_finite() || rounded < 1.0 || rounded > u32::MAX as f64 {
        return Err(RequestError::InvalidDimension { axis, value });
    }
    Ok(rounded as u32)
}

/// A selected map rectangle and the print size it maps onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaSelection {
    bounds: BoundingBox,
    dims: PrintDimensions,
}

impl Default for AreaSelection {
    fn default() -> Self {
        let dims = PrintDimensions::default();
        let bounds = BoundingBox {
            min_lat: DEFAULT_CENTER_LAT - dims.y_mm as f64 * DEFAULT_DEG_PER_MM / 2.0,
            min_lon: DEFAULT_CENTER_LON - dims.x_mm as f64 * DEFAULT_DEG_PER_MM / 2.0,
            max_lat: DEFAULT_CENTER_LAT + dims.y_mm as f64 * DEFAULT_DEG_PER_MM / 2.0,
            max_lon: DEFAULT_CENTER_LON + dims.x_mm as f64 * DEFAULT_DEG_PER_MM / 2.0,
        };
        Self { bounds, dims }
    }
}

impl AreaSelection {
    /// Create a selection from an explicit box and print size.
    pub fn new(bounds: BoundingBox, dims: PrintDimensions) -> Result<Self> {
        if dims.x_mm == 0 {
            return Err(RequestError::InvalidDimension { axis: "width", value: 0.0 });
        }
        if dims.y_mm == 0 {
            return Err(RequestError::InvalidDimension { axis: "height", value: 0.0 });
        }
        if !bounds.is_valid() {
            return Err(RequestError::InvalidBounds {
                min_lat: bounds.min_lat,
                min_lon: bounds.min_lon,
                max_lat: bounds.max_lat,
                max_lon: bounds.max_lon,
            });
        }
        Ok(Self { bounds, dims })
    }

    /// Current bounding box.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Current print size.
    pub fn dimensions(&self) -> PrintDimensions {
        self.dims
    }

    /// Resize the print, keeping the rectangle centre and map scale.
    ///
    /// Values are rounded to whole millimetres. Axes passed as `None` are left
    /// unchanged. On error the selection is not modified.
    pub fn set_dimensions(&mut self, width_mm: Option<f64>, height_mm: Option<f64>) -> Result<()> {
        let x_mm = match width_mm {
            Some(w) => round_mm("width", w)?,
            None => self.dims.x_mm,
        };
        let y_mm = match height_mm {
            Some(h) => round_mm("height", h)?,
            None => self.dims.y_mm,
        };

        let lon_per_mm = self.bounds.lon_span() / self.dims.x_mm as f64;
        let lat_per_mm = self.bounds.lat_span() / self.dims.y_mm as f64;
        let (center_lat, center_lon) = self.bounds.center();

        let bounds = BoundingBox::from_center(
            center_lat,
            center_lon,
            lat_per_mm * y_mm as f64,
            lon_per_mm * x_mm as f64,
        )?;

        tracing::trace!(x_mm, y_mm, ?bounds, "selection resized");
        self.bounds = bounds;
        self.dims = PrintDimensions { x_mm, y_mm };
        Ok(())
    }

    /// Move the rectangle so it is centred on the given point.
    pub fn move_to(&mut self, center_lat: f64, center_lon: f64) -> Result<()> {
        self.bounds = BoundingBox::from_center(
            center_lat,
            center_lon,
            self.bounds.lat_span(),
            self.bounds.lon_span(),
        )?;
        Ok(())
    }
}
