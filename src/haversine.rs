//! Haversine route provider (fallback when no routing service is available).
//!
//! Uses great-circle distance and an assumed average speed. Ignores roads
//! entirely, so it never returns route geometry.

use crate::error::PlanError;
use crate::geometry::Coordinate;
use crate::traits::{Route, RouteProvider};

/// Average truck speed assumption for time estimation.
const DEFAULT_SPEED_MPH: f64 = 55.0;

/// Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3958.8;

#[derive(Debug, Clone)]
pub struct HaversineRouter {
    /// Assumed average driving speed in miles per hour.
    pub speed_mph: f64,
}

impl Default for HaversineRouter {
    fn default() -> Self {
        Self {
            speed_mph: DEFAULT_SPEED_MPH,
        }
    }
}

impl HaversineRouter {
    pub fn new(speed_mph: f64) -> Self {
        Self { speed_mph }
    }

    /// Great-circle distance between two points in miles.
    fn haversine_miles(from: Coordinate, to: Coordinate) -> f64 {
        let lat1_rad = from.lat.to_radians();
        let lat2_rad = to.lat.to_radians();
        let delta_lat = (to.lat - from.lat).to_radians();
        let delta_lng = (to.lon - from.lon).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_MILES * c
    }
}

impl RouteProvider for HaversineRouter {
    fn route(&self, origin: Coordinate, destination: Coordinate) -> Result<Route, PlanError> {
        if !(self.speed_mph.is_finite() && self.speed_mph > 0.0) {
            return Err(PlanError::RouteUnavailable(format!(
                "assumed speed must be positive, got {}",
                self.speed_mph
            )));
        }

        let distance_miles = Self::haversine_miles(origin, destination);
        Ok(Route {
            distance_miles,
            duration_hours: distance_miles / self.speed_mph,
            geometry: None,
        })
    }
}
