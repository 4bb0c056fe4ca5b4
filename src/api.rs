//! The "plan trip" request boundary.
//!
//! Turns a JSON request body into a stored trip and a JSON response. Errors
//! are reduced to their message for the caller; details go to the log.

use chrono::NaiveDate;
use serde_json::{json, Map, Value};
use tracing::{error, info, warn};

use crate::error::PlanError;
use crate::planner::{TripPlanner, TripRequest};
use crate::traits::{Geocoder, RouteProvider, TripStore};

pub const REQUIRED_FIELDS: [&str; 4] = [
    "current_location",
    "pickup_location",
    "dropoff_location",
    "current_cycle_used",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Validate a request body. Reports every missing field, not just the first.
pub fn parse_request(body: &Value) -> Result<TripRequest, PlanError> {
    let fields = body
        .as_object()
        .ok_or_else(|| PlanError::InvalidInput("request body must be a JSON object".to_string()))?;

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|name| fields.get(**name).is_none_or(Value::is_null))
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(PlanError::MissingFields(missing));
    }

    Ok(TripRequest {
        current_location: location_field(fields, "current_location")?,
        pickup_location: location_field(fields, "pickup_location")?,
        dropoff_location: location_field(fields, "dropoff_location")?,
        current_cycle_used: cycle_hours_field(fields, "current_cycle_used")?,
    })
}

fn location_field(fields: &Map<String, Value>, name: &str) -> Result<String, PlanError> {
    match fields.get(name).and_then(Value::as_str).map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(PlanError::InvalidInput(format!("{} must be a non-empty string", name))),
    }
}

fn cycle_hours_field(fields: &Map<String, Value>, name: &str) -> Result<f64, PlanError> {
    let hours = match fields.get(name) {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    match hours {
        Some(hours) if hours.is_finite() && hours >= 0.0 => Ok(hours),
        _ => Err(PlanError::InvalidInput(format!("{} must be a non-negative number", name))),
    }
}

/// Handle one plan-trip request.
///
/// The plan is computed in full before anything is stored, so a failure at
/// any step leaves the store untouched.
pub fn plan_trip<G, R, S>(
    planner: &TripPlanner<G, R>,
    store: &mut S,
    body: &Value,
    start_date: NaiveDate,
) -> ApiResponse
where
    G: Geocoder,
    R: RouteProvider,
    S: TripStore,
{
    let result = parse_request(body).and_then(|request| {
        let plan = planner.plan(&request, start_date)?;
        let record = store.save(&request, &plan)?;
        serde_json::to_value(&record)
            .map_err(|err| PlanError::Unexpected(format!("failed to serialize trip: {}", err)))
    });

    match result {
        Ok(body) => {
            info!(trip_id = ?body.get("id"), "Trip planned");
            ApiResponse { status: 200, body }
        }
        Err(err) => error_response(err),
    }
}

fn error_response(err: PlanError) -> ApiResponse {
    match err {
        PlanError::MissingFields(missing_fields) => {
            warn!(?missing_fields, "Rejected plan-trip request");
            ApiResponse {
                status: 400,
                body: json!({
                    "error": "Missing required fields",
                    "missing_fields": missing_fields,
                }),
            }
        }
        err if err.is_client_error() => {
            warn!(error = %err, "Rejected plan-trip request");
            ApiResponse {
                status: 400,
                body: json!({ "error": err.to_string() }),
            }
        }
        err => {
            error!(error = ?err, "Trip planning failed");
            ApiResponse {
                status: 500,
                body: json!({ "error": err.to_string() }),
            }
        }
    }
}
