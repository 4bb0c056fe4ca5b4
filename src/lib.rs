//! eld-planner: hours-of-service trip itineraries
//!
//! Turns a route into driving, rest and fueling legs and rolls those legs up
//! into per-day duty logs. Geocoding, routing and storage sit behind the
//! traits in [`traits`].

pub mod api;
pub mod daily_log;
pub mod error;
pub mod geometry;
pub mod haversine;
pub mod itinerary;
pub mod ors;
pub mod planner;
pub mod polyline;
pub mod segmenter;
pub mod store;
pub mod traits;

pub use error::PlanError;
