//! GeoJSON-facing geometry types: coordinates, line strings and trip markers.

use serde::{Deserialize, Serialize};

/// A position in GeoJSON order, serialized as `[lon, lat]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(coord: Coordinate) -> Self {
        [coord.lon, coord.lat]
    }
}

/// A GeoJSON LineString.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeometry", into = "RawGeometry")]
pub struct LineString {
    pub coordinates: Vec<Coordinate>,
}

impl LineString {
    pub fn new(coordinates: Vec<Coordinate>) -> Self {
        Self { coordinates }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Vec<Coordinate>,
}

impl TryFrom<RawGeometry> for LineString {
    type Error = String;

    fn try_from(raw: RawGeometry) -> Result<Self, Self::Error> {
        if raw.kind != "LineString" {
            return Err(format!("expected LineString geometry, got {}", raw.kind));
        }
        Ok(Self {
            coordinates: raw.coordinates,
        })
    }
}

impl From<LineString> for RawGeometry {
    fn from(line: LineString) -> Self {
        Self {
            kind: "LineString".to_string(),
            coordinates: line.coordinates,
        }
    }
}

/// Resolved positions of the three trip locations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Markers {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub current: Option<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pickup: Option<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dropoff: Option<Coordinate>,
}

impl Markers {
    /// Markers in travel order: current, pickup, dropoff.
    pub fn in_order(&self) -> Vec<Coordinate> {
        [self.current, self.pickup, self.dropoff]
            .into_iter()
            .flatten()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.in_order().is_empty()
    }

    /// Straight line through the markers, for trips without route geometry.
    pub fn fallback_line(&self) -> Option<LineString> {
        let coordinates = self.in_order();
        if coordinates.is_empty() {
            None
        } else {
            Some(LineString::new(coordinates))
        }
    }
}
