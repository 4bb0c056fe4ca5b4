//! Polyline representation for route geometries.
//!
//! Routing services may return geometry as an encoded polyline string
//! (precision 5). Decoding happens at the boundary, when receiving a route;
//! the rest of the crate works with GeoJSON line strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Coordinate, LineString};

const PRECISION: f64 = 1e5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolylineError {
    #[error("invalid polyline character {character:?} at position {position}")]
    InvalidCharacter { position: usize, character: char },
    #[error("polyline ended in the middle of a coordinate")]
    Truncated,
    #[error("polyline value overflows at position {0}")]
    Overflow(usize),
}

/// A polyline representing a route geometry as decoded coordinates.
///
/// Points are stored as (latitude, longitude), the order the encoding uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    ///
    /// Each point is a (latitude, longitude) tuple.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Decodes a precision-5 encoded polyline string.
    pub fn decode(encoded: &str) -> Result<Self, PolylineError> {
        let bytes = encoded.as_bytes();
        let mut index = 0;
        let mut lat: i64 = 0;
        let mut lng: i64 = 0;
        let mut points = Vec::new();

        while index < bytes.len() {
            lat = accumulate(lat, bytes, &mut index)?;
            lng = accumulate(lng, bytes, &mut index)?;
            points.push((lat as f64 / PRECISION, lng as f64 / PRECISION));
        }

        Ok(Self { points })
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    /// Converts to a GeoJSON line string, reordering each point to `[lon, lat]`.
    pub fn to_line_string(&self) -> LineString {
        LineString::new(
            self.points
                .iter()
                .map(|&(lat, lng)| Coordinate::new(lng, lat))
                .collect(),
        )
    }
}

/// Adds the next delta to a running coordinate.
fn accumulate(total: i64, bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let position = *index;
    let delta = next_value(bytes, index)?;
    total
        .checked_add(delta)
        .ok_or(PolylineError::Overflow(position))
}

fn next_value(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let mut result: i64 = 0;
    let mut shift = 0;

    loop {
        let position = *index;
        let byte = *bytes.get(position).ok_or(PolylineError::Truncated)?;
        if !(63..=126).contains(&byte) {
            return Err(PolylineError::InvalidCharacter {
                position,
                character: byte as char,
            });
        }
        if shift > 55 {
            return Err(PolylineError::Overflow(position));
        }

        let chunk = i64::from(byte - 63);
        result |= (chunk & 0x1f) << shift;
        shift += 5;
        *index += 1;

        if chunk < 0x20 {
            break;
        }
    }

    Ok(if result & 1 != 0 { !(result >> 1) } else { result >> 1 })
}
