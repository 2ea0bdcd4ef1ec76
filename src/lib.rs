//! tour-planner core
//!
//! Capacity-constrained greedy tour construction for delivery stops.

pub mod traits;
pub mod haversine;
pub mod solver;
