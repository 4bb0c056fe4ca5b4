//! Collaborator seams for the trip planner.
//!
//! The HOS engine itself is pure; these traits cover everything it needs
//! from the outside world. Concrete adapters live in `ors`, `haversine` and
//! `store`, and tests provide their own.

use crate::error::PlanError;
use crate::geometry::{Coordinate, LineString};
use crate::planner::{TripPlan, TripRequest};
use crate::store::TripRecord;

/// Resolves free-text locations to coordinates.
pub trait Geocoder {
    /// Fails with `PlanError::NotFound` when nothing matches.
    fn geocode(&self, location: &str) -> Result<Coordinate, PlanError>;
}

/// Route metrics between two coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub distance_miles: f64,
    pub duration_hours: f64,
    /// None when the provider has no road geometry.
    pub geometry: Option<LineString>,
}

/// Computes a driving route between two coordinates.
pub trait RouteProvider {
    /// Fails with `PlanError::RouteUnavailable` when no route can be produced.
    fn route(&self, origin: Coordinate, destination: Coordinate) -> Result<Route, PlanError>;
}

/// Stores planned trips.
///
/// A save persists the trip, its legs and its daily logs together or not at
/// all.
pub trait TripStore {
    fn save(&mut self, request: &TripRequest, plan: &TripPlan) -> Result<TripRecord, PlanError>;
}
