//! Trip records and an in-memory store.

use serde::Serialize;
use tracing::debug;

use crate::error::PlanError;
use crate::geometry::{LineString, Markers};
use crate::itinerary::{DailyLog, Leg};
use crate::planner::{TripPlan, TripRequest};
use crate::traits::TripStore;

/// The only duty cycle currently supported.
pub const DEFAULT_CYCLE_TYPE: &str = "70hrs/8days";

/// A stored trip, shaped the way API callers receive it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    pub id: u64,
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub current_cycle_used: f64,
    pub cycle_type: String,
    pub total_distance: f64,
    pub estimated_duration: f64,
    pub legs: Vec<Leg>,
    pub daily_logs: Vec<DailyLog>,
    /// Route geometry, or a line through the markers if the route had none.
    pub route_geometry: Option<LineString>,
    #[serde(serialize_with = "serialize_markers")]
    pub markers: Markers,
}

fn serialize_markers<S>(markers: &Markers, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if markers.is_empty() {
        serializer.serialize_none()
    } else {
        markers.serialize(serializer)
    }
}

impl TripRecord {
    pub fn new(id: u64, request: &TripRequest, plan: &TripPlan) -> Self {
        Self {
            id,
            current_location: request.current_location.clone(),
            pickup_location: request.pickup_location.clone(),
            dropoff_location: request.dropoff_location.clone(),
            current_cycle_used: request.current_cycle_used,
            cycle_type: DEFAULT_CYCLE_TYPE.to_string(),
            total_distance: plan.total_distance,
            estimated_duration: plan.total_duration,
            legs: plan.legs.clone(),
            daily_logs: plan.daily_logs.clone(),
            route_geometry: plan.geometry_or_fallback(),
            markers: plan.markers.clone(),
        }
    }
}

/// Keeps trips in memory. Ids start at 1.
#[derive(Debug, Default)]
pub struct MemoryTripStore {
    trips: Vec<TripRecord>,
}

impl MemoryTripStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: u64) -> Option<&TripRecord> {
        self.trips.iter().find(|trip| trip.id == id)
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

impl TripStore for MemoryTripStore {
    fn save(&mut self, request: &TripRequest, plan: &TripPlan) -> Result<TripRecord, PlanError> {
        let id = u64::try_from(self.trips.len())
            .ok()
            .and_then(|count| count.checked_add(1))
            .ok_or_else(|| PlanError::PersistenceFailure("trip id space exhausted".to_string()))?;

        let record = TripRecord::new(id, request, plan);
        self.trips.push(record.clone());
        debug!(id, legs = record.legs.len(), days = record.daily_logs.len(), "Stored trip");
        Ok(record)
    }
}
