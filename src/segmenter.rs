//! Leg segmentation: splits a route's driving time into driving, rest and
//! fueling legs.
//!
//! Distance is apportioned to each driving segment in proportion to its share
//! of the total driving time (a uniform average-speed approximation), not
//! sampled from the route geometry.

use tracing::debug;

use crate::error::PlanError;
use crate::itinerary::{round2, Leg, LegKind};

#[derive(Debug, Clone)]
pub struct SegmentOptions {
    /// Longest continuous driving segment before a rest (hours).
    pub max_driving_segment_hours: f64,
    /// Distance after which a fueling stop is inserted (miles).
    pub fueling_interval_miles: f64,
    /// Duration of a fueling stop (hours).
    pub fueling_duration_hours: f64,
    /// Duration of a rest break (hours).
    pub rest_duration_hours: f64,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            max_driving_segment_hours: 11.0,
            fueling_interval_miles: 1000.0,
            fueling_duration_hours: 0.5,
            rest_duration_hours: 10.0,
        }
    }
}

/// Loop state threaded through each segmentation step.
#[derive(Debug)]
struct SegmentState {
    accumulated_driving: f64,
    distance_since_fuel: f64,
    sequence: u32,
    current_location: String,
    legs: Vec<Leg>,
}

impl SegmentState {
    fn new() -> Self {
        Self {
            accumulated_driving: 0.0,
            distance_since_fuel: 0.0,
            sequence: 1,
            current_location: "Start".to_string(),
            legs: Vec::new(),
        }
    }

    fn emit(&mut self, kind: LegKind, duration: f64, distance: f64, end_location: String) {
        self.legs.push(Leg {
            sequence: self.sequence,
            kind,
            duration_hours: round2(duration),
            distance_miles: round2(distance),
            start_location: self.current_location.clone(),
            end_location,
        });
        self.sequence += 1;
    }

    fn emit_fueling(&mut self, options: &SegmentOptions) {
        let end = format!("{} Fuel Stop", self.current_location);
        self.emit(LegKind::Fueling, options.fueling_duration_hours, 0.0, end);
        self.distance_since_fuel = 0.0;
    }

    fn emit_driving(&mut self, duration: f64, distance: f64) {
        let end = format!("Point {}", self.sequence);
        self.emit(LegKind::Driving, duration, distance, end.clone());
        self.current_location = end;
    }

    fn emit_rest(&mut self, options: &SegmentOptions) {
        let end = format!("{} Rest Stop", self.current_location);
        self.emit(LegKind::Rest, options.rest_duration_hours, 0.0, end);
    }
}

/// Segment a route into an ordered sequence of legs.
///
/// Each driving leg is at most `max_driving_segment_hours` long and every
/// driving leg except the last is followed by a rest leg. A fueling leg is
/// inserted before a driving leg whenever the distance since the last
/// fueling stop would reach the fueling interval by the end of that leg.
pub fn segment_legs(
    total_driving_hours: f64,
    total_distance_miles: f64,
    options: &SegmentOptions,
) -> Result<Vec<Leg>, PlanError> {
    if !total_driving_hours.is_finite() || total_driving_hours <= 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "total driving hours must be positive, got {}",
            total_driving_hours
        )));
    }
    if !total_distance_miles.is_finite() || total_distance_miles < 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "total distance must be non-negative, got {}",
            total_distance_miles
        )));
    }
    if !options.max_driving_segment_hours.is_finite() || options.max_driving_segment_hours <= 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "max driving segment must be positive, got {}",
            options.max_driving_segment_hours
        )));
    }

    let mut state = SegmentState::new();

    while state.accumulated_driving < total_driving_hours {
        let remaining = total_driving_hours - state.accumulated_driving;
        let is_last = remaining <= options.max_driving_segment_hours;
        let segment_duration = if is_last {
            remaining
        } else {
            options.max_driving_segment_hours
        };
        let segment_distance = (segment_duration / total_driving_hours) * total_distance_miles;

        if state.distance_since_fuel + segment_distance >= options.fueling_interval_miles {
            state.emit_fueling(options);
        }

        state.emit_driving(segment_duration, segment_distance);

        // Snap on the last segment so float residue can't leave a sliver behind.
        state.accumulated_driving = if is_last {
            total_driving_hours
        } else {
            state.accumulated_driving + segment_duration
        };
        state.distance_since_fuel += segment_distance;

        if state.accumulated_driving < total_driving_hours {
            state.emit_rest(options);
        }
    }

    debug!(
        total_driving_hours,
        total_distance_miles,
        legs = state.legs.len(),
        "Segmented route into legs"
    );

    Ok(state.legs)
}
