//! Trip planning: geocode, route, segment, aggregate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::daily_log::aggregate_daily_logs;
use crate::error::PlanError;
use crate::geometry::{LineString, Markers};
use crate::itinerary::{round2, DailyLog, Leg};
use crate::segmenter::{segment_legs, SegmentOptions};
use crate::traits::{Geocoder, RouteProvider};

/// A validated plan-trip request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    /// Hours already used in the current duty cycle. Recorded with the trip
    /// but not yet applied to segmentation.
    pub current_cycle_used: f64,
}

/// Everything computed for one trip, before it is stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripPlan {
    /// Miles, rounded to 2 decimals.
    pub total_distance: f64,
    /// Hours, rounded to 2 decimals.
    pub total_duration: f64,
    pub legs: Vec<Leg>,
    pub daily_logs: Vec<DailyLog>,
    pub route_geometry: Option<LineString>,
    pub markers: Markers,
}

#[derive(Debug, Clone)]
pub struct TripPlanner<G, R> {
    geocoder: G,
    router: R,
    options: SegmentOptions,
}

impl<G, R> TripPlanner<G, R>
where
    G: Geocoder,
    R: RouteProvider,
{
    pub fn new(geocoder: G, router: R) -> Self {
        Self::with_options(geocoder, router, SegmentOptions::default())
    }

    pub fn with_options(geocoder: G, router: R, options: SegmentOptions) -> Self {
        Self {
            geocoder,
            router,
            options,
        }
    }

    /// Plan a trip whose first daily log falls on `start_date`.
    ///
    /// Stops at the first failing step; nothing partial is returned.
    pub fn plan(&self, request: &TripRequest, start_date: NaiveDate) -> Result<TripPlan, PlanError> {
        let current = self.geocoder.geocode(&request.current_location)?;
        let pickup = self.geocoder.geocode(&request.pickup_location)?;
        let dropoff = self.geocoder.geocode(&request.dropoff_location)?;

        let route = self.router.route(pickup, dropoff)?;
        info!(
            distance_miles = route.distance_miles,
            duration_hours = route.duration_hours,
            "Computed route"
        );

        let legs = segment_legs(route.duration_hours, route.distance_miles, &self.options)?;
        let daily_logs = aggregate_daily_logs(&legs, start_date)?;
        info!(legs = legs.len(), days = daily_logs.len(), "Planned trip");

        Ok(TripPlan {
            total_distance: round2(route.distance_miles),
            total_duration: round2(route.duration_hours),
            legs,
            daily_logs,
            route_geometry: route.geometry,
            markers: Markers {
                current: Some(current),
                pickup: Some(pickup),
                dropoff: Some(dropoff),
            },
        })
    }
}

impl TripPlan {
    /// Route geometry, or a straight line through the markers when the
    /// router produced none.
    pub fn geometry_or_fallback(&self) -> Option<LineString> {
        self.route_geometry
            .clone()
            .or_else(|| self.markers.fallback_line())
    }
}
