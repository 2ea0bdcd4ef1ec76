//! Core domain traits for the tour planner.
//!
//! These are intentionally minimal and domain-agnostic. Concrete apps should
//! implement them for their own data models.

use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// A delivery stop to be placed on a tour.
pub trait Delivery {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Resolved coordinates (lat, lng). `None` when geocoding did not
    /// produce a position; such stops are never placed on a tour.
    fn location(&self) -> Option<(f64, f64)>;

    /// Demand for this stop in bottles.
    fn bottles(&self) -> u32;

    /// Delivery priority tier.
    fn priority(&self) -> Priority {
        Priority::Standard
    }
}

/// Delivery priority tier.
///
/// `Standard` is the implicit tier for stops without an explicit priority.
/// It ranks below `Low` for processing order but scores between `Medium`
/// and `Low` during candidate selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
    #[default]
    Standard,
}

impl Priority {
    /// Processing rank for the initial stop ordering (lower sorts first).
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
            Priority::Standard => 3,
        }
    }

    /// Score contribution during candidate selection (lower is better).
    pub fn score(self) -> f64 {
        match self {
            Priority::High => 0.0,
            Priority::Medium => 15.0,
            Priority::Low => 30.0,
            Priority::Standard => 22.5,
        }
    }

    /// Map the numeric levels used by upstream systems (1=high, 2=medium,
    /// 3=low). Absent or unknown levels fall back to `Standard`.
    pub fn from_level(level: Option<u8>) -> Self {
        match level {
            Some(1) => Priority::High,
            Some(2) => Priority::Medium,
            Some(3) => Priority::Low,
            _ => Priority::Standard,
        }
    }
}
