//! OpenRouteService HTTP adapter for geocoding and directions.

use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::error::PlanError;
use crate::geometry::{Coordinate, LineString};
use crate::polyline::Polyline;
use crate::traits::{Geocoder, Route, RouteProvider};

const METERS_PER_MILE: f64 = 1609.34;
const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone)]
pub struct OrsConfig {
    pub base_url: String,
    pub api_key: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OrsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openrouteservice.org".to_string(),
            api_key: String::new(),
            profile: "driving-car".to_string(),
            timeout_secs: 10,
        }
    }
}

impl OrsConfig {
    /// Reads `ORS_API_KEY` (required), `ORS_BASE_URL`, `ORS_PROFILE` and
    /// `ORS_TIMEOUT_SECS` from the process environment.
    pub fn from_env() -> Result<Self, PlanError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, PlanError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_key = lookup("ORS_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| PlanError::Config("missing ORS_API_KEY in environment".to_string()))?;

        let timeout_secs = match lookup("ORS_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                PlanError::Config(format!("ORS_TIMEOUT_SECS must be a whole number of seconds, got {:?}", raw))
            })?,
            None => defaults.timeout_secs,
        };

        Ok(Self {
            base_url: lookup("ORS_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            api_key,
            profile: lookup("ORS_PROFILE").unwrap_or(defaults.profile),
            timeout_secs,
        })
    }
}

#[derive(Debug, Clone)]
pub struct OrsClient {
    config: OrsConfig,
    client: reqwest::blocking::Client,
}

impl OrsClient {
    pub fn new(config: OrsConfig) -> Result<Self, PlanError> {
        if config.api_key.trim().is_empty() {
            return Err(PlanError::Config("OpenRouteService API key is empty".to_string()));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| PlanError::Config(format!("failed to build HTTP client: {}", err)))?;

        Ok(Self { config, client })
    }
}

impl Geocoder for OrsClient {
    fn geocode(&self, location: &str) -> Result<Coordinate, PlanError> {
        let url = format!("{}/geocode/search", self.config.base_url);
        debug!(location, "Geocoding location");

        let body = self
            .client
            .get(url)
            .query(&[("api_key", self.config.api_key.as_str()), ("text", location)])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(|err| {
                warn!(location, error = %err, "Geocoding request failed");
                PlanError::Unexpected(format!("geocoding request failed for {:?}: {}", location, err))
            })?;

        parse_geocode(location, &body)
    }
}

impl RouteProvider for OrsClient {
    fn route(&self, origin: Coordinate, destination: Coordinate) -> Result<Route, PlanError> {
        let url = format!("{}/v2/directions/{}", self.config.base_url, self.config.profile);
        let request = json!({
            "coordinates": [origin, destination],
            "format": "geojson",
        });

        let body = self
            .client
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(|err| {
                warn!(error = %err, "Directions request failed");
                PlanError::RouteUnavailable(format!("directions request failed: {}", err))
            })?;

        parse_directions(&body)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    features: Vec<GeocodeFeature>,
}

#[derive(Debug, Deserialize)]
struct GeocodeFeature {
    geometry: PointGeometry,
}

#[derive(Debug, Deserialize)]
struct PointGeometry {
    coordinates: Coordinate,
}

/// Picks the best match out of a geocoding search response.
pub fn parse_geocode(location: &str, body: &str) -> Result<Coordinate, PlanError> {
    let response: GeocodeResponse = serde_json::from_str(body).map_err(|err| {
        PlanError::Unexpected(format!("malformed geocoding response for {:?}: {}", location, err))
    })?;

    response
        .features
        .into_iter()
        .next()
        .map(|feature| feature.geometry.coordinates)
        .ok_or_else(|| PlanError::NotFound(format!("could not geocode location: {}", location)))
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DirectionsResponse {
    FeatureCollection { features: Vec<DirectionsFeature> },
    Routes { routes: Vec<DirectionsRoute> },
}

#[derive(Debug, Deserialize)]
struct DirectionsFeature {
    properties: FeatureProperties,
    geometry: LineString,
}

#[derive(Debug, Deserialize)]
struct FeatureProperties {
    summary: Summary,
}

#[derive(Debug, Deserialize)]
struct Summary {
    /// Meters.
    #[serde(default)]
    distance: f64,
    /// Seconds.
    #[serde(default)]
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    summary: Summary,
    #[serde(default)]
    geometry: Option<RouteGeometry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RouteGeometry {
    Encoded(String),
    GeoJson(LineString),
}

/// Extracts route metrics from a directions response.
///
/// Accepts both the GeoJSON feature-collection shape and the routes-array
/// shape, where geometry is either inline GeoJSON or an encoded polyline.
pub fn parse_directions(body: &str) -> Result<Route, PlanError> {
    let response: DirectionsResponse = serde_json::from_str(body)
        .map_err(|err| PlanError::RouteUnavailable(format!("unexpected route response format: {}", err)))?;

    let (summary, geometry) = match response {
        DirectionsResponse::FeatureCollection { features } => {
            let feature = features
                .into_iter()
                .next()
                .ok_or_else(|| PlanError::RouteUnavailable("response contains no route".to_string()))?;
            (feature.properties.summary, feature.geometry)
        }
        DirectionsResponse::Routes { routes } => {
            let route = routes
                .into_iter()
                .next()
                .ok_or_else(|| PlanError::RouteUnavailable("response contains no route".to_string()))?;
            let geometry = match route.geometry {
                Some(RouteGeometry::GeoJson(line)) => line,
                Some(RouteGeometry::Encoded(encoded)) => Polyline::decode(&encoded)
                    .map_err(|err| PlanError::RouteUnavailable(format!("route geometry is invalid: {}", err)))?
                    .to_line_string(),
                None => {
                    return Err(PlanError::RouteUnavailable("route geometry missing".to_string()));
                }
            };
            (route.summary, geometry)
        }
    };

    if geometry.coordinates.is_empty() {
        return Err(PlanError::RouteUnavailable("route geometry is empty".to_string()));
    }

    Ok(Route {
        distance_miles: summary.distance / METERS_PER_MILE,
        duration_hours: summary.duration / SECONDS_PER_HOUR,
        geometry: Some(geometry),
    })
}
