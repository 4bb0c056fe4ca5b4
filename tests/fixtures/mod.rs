//! Test fixtures for eld-planner.
//!
//! Provides:
//! - Real US city locations and a geocoder that resolves them
//! - Recorded OpenRouteService directions responses in each supported shape
//! - A local mock of the OpenRouteService HTTP API

#![allow(dead_code)]

pub mod mock_ors;
pub mod ors_responses;
pub mod us_cities;

pub use us_cities::*;
