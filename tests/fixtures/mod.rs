//! Test fixtures for tour-planner.
//!
//! Provides realistic test data: real Munich-area locations around the
//! default depot in Planegg.

pub mod munich_locations;

pub use munich_locations::*;
