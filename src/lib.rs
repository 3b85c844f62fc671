//! `Angkor Guide` - Travel guide backend and smart day-trip planning for
//! Siem Reap, Cambodia
//!
//! This library provides the curated place catalog, the greedy day-trip
//! planner, crowd and heat timelines, tuk-tuk fare estimates, a current
//! weather snapshot, and the HTTP API the guide frontend talks to.

pub mod api;
pub mod clock;
pub mod config;
pub mod crowd;
pub mod error;
pub mod fare;
pub mod geo;
pub mod models;
pub mod places;
pub mod planner;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::GuideConfig;
pub use error::GuideError;
pub use models::{DayPlan, Language, Mood, Place, PlaceCategory, PlannedStop};
pub use planner::{DEFAULT_MAX_STOPS, build_day_plan};
pub use weather::WeatherSnapshot;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, GuideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
