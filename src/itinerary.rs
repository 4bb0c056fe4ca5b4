//! Itinerary records produced by the HOS engine.
//!
//! Legs and daily logs are created once per planning run and never mutated
//! afterwards; a re-plan produces a fresh set.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of activity a leg represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegKind {
    Driving,
    Rest,
    Fueling,
}

/// One atomic unit of the itinerary.
///
/// Locations are display labels ("Point 3", "Point 3 Rest Stop"), not
/// geocoded waypoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// 1-based, strictly increasing in emission order.
    pub sequence: u32,
    #[serde(rename = "type")]
    pub kind: LegKind,
    /// Hours, rounded to 2 decimals.
    #[serde(rename = "duration")]
    pub duration_hours: f64,
    /// Miles, rounded to 2 decimals. Always 0 for rest and fueling legs.
    #[serde(rename = "distance")]
    pub distance_miles: f64,
    pub start_location: String,
    pub end_location: String,
}

impl Leg {
    pub fn is_driving(&self) -> bool {
        self.kind == LegKind::Driving
    }
}

/// One calendar day's duty-hour summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    pub day_number: u32,
    pub date: NaiveDate,
    pub total_hours: f64,
    pub driving_hours: f64,
    pub off_duty_hours: f64,
    /// Aggregated rest hours.
    pub sleeper_berth_hours: f64,
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
