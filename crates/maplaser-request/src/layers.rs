//! Map layers understood by the rendering service.

use crate::RequestError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A selectable map layer.
///
/// The string form is the checkbox value sent in the `layers` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Forests,
    Sand,
    Waterways,
    Water,
    Airstrips,
    Contours,
    Buildings,
    Footpaths,
    Tracks,
    Residential,
    MinorRoads,
    MajorRoads,
    Motorways,
    Railways,
    Coastline,
}

impl Layer {
    /// Every layer in the catalog, in drawing order.
    pub const ALL: [Layer; 15] = [
        Layer::Forests,
        Layer::Sand,
        Layer::Waterways,
        Layer::Water,
        Layer::Airstrips,
        Layer::Contours,
        Layer::Buildings,
        Layer::Footpaths,
        Layer::Tracks,
        Layer::Residential,
        Layer::MinorRoads,
        Layer::MajorRoads,
        Layer::Motorways,
        Layer::Railways,
        Layer::Coastline,
    ];

    /// Identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Forests => "forests",
            Layer::Sand => "sand",
            Layer::Waterways => "waterways",
            Layer::Water => "water",
            Layer::Airstrips => "airstrips",
            Layer::Contours => "contours",
            Layer::Buildings => "buildings",
            Layer::Footpaths => "footpaths",
            Layer::Tracks => "tracks",
            Layer::Residential => "residential",
            Layer::MinorRoads => "minor_roads",
            Layer::MajorRoads => "major_roads",
            Layer::Motorways => "motorways",
            Layer::Railways => "railways",
            Layer::Coastline => "coastline",
        }
    }

    /// Short human-readable description of what the layer draws.
    pub fn description(&self) -> &'static str {
        match self {
            Layer::Forests => "woods and forest areas",
            Layer::Sand => "sand, beaches and dunes",
            Layer::Waterways => "rivers and streams",
            Layer::Water => "lakes and other water areas",
            Layer::Airstrips => "runways and airstrips",
            Layer::Contours => "elevation contour lines",
            Layer::Buildings => "building outlines",
            Layer::Footpaths => "pedestrian ways, footways and paths",
            Layer::Tracks => "tracks and service roads",
            Layer::Residential => "residential streets",
            Layer::MinorRoads => "tertiary and unclassified roads",
            Layer::MajorRoads => "trunk, primary and secondary roads",
            Layer::Motorways => "motorways and motorway links",
            Layer::Railways => "railway lines",
            Layer::Coastline => "coastline",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layer::ALL
            .iter()
            .copied()
            .find(|layer| layer.as_str() == s)
            .ok_or_else(|| RequestError::UnknownLayer(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_layer() {
        for layer in Layer::ALL {
            assert_eq!(layer.as_str().parse::<Layer>().unwrap(), layer);
        }
    }

    #[test]
    fn test_serde_name_matches_wire_name() {
        let json = serde_json::to_string(&Layer::MinorRoads).unwrap();
        assert_eq!(json, "\"minor_roads\"");
    }

    #[test]
    fn test_unknown_layer() {
        let err = "lava".parse::<Layer>().unwrap_err();
        assert!(matches!(err, RequestError::UnknownLayer(ref s) if s == "lava"));
    }
}
