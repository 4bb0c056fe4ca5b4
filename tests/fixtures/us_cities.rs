//! Real US freight hubs for realistic test fixtures.
//!
//! Coordinates are city centers from OpenStreetMap, in (lon, lat) order.

use eld_planner::error::PlanError;
use eld_planner::geometry::Coordinate;
use eld_planner::traits::Geocoder;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lon: f64,
    pub lat: f64,
}

impl Location {
    pub const fn new(name: &'static str, lon: f64, lat: f64) -> Self {
        Self { name, lon, lat }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lon, self.lat)
    }
}

pub const CITIES: &[Location] = &[
    Location::new("Chicago, IL", -87.6298, 41.8781),
    Location::new("St. Louis, MO", -90.1994, 38.6270),
    Location::new("Denver, CO", -104.9903, 39.7392),
    Location::new("Dallas, TX", -96.7970, 32.7767),
    Location::new("Atlanta, GA", -84.3880, 33.7490),
    Location::new("Los Angeles, CA", -118.2437, 34.0522),
    Location::new("Memphis, TN", -90.0490, 35.1495),
];

pub fn city(name: &str) -> &'static Location {
    CITIES
        .iter()
        .find(|location| location.name == name)
        .unwrap_or_else(|| panic!("unknown fixture city {}", name))
}

/// Resolves names from [`CITIES`]; anything else is not found.
#[derive(Debug, Clone, Default)]
pub struct CityGeocoder;

impl Geocoder for CityGeocoder {
    fn geocode(&self, location: &str) -> Result<Coordinate, PlanError> {
        CITIES
            .iter()
            .find(|city| city.name.eq_ignore_ascii_case(location))
            .map(Location::coordinate)
            .ok_or_else(|| PlanError::NotFound(format!("could not geocode location: {}", location)))
    }
}
