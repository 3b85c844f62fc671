//! Day-trip itinerary model produced by the planner

use serde::{Deserialize, Serialize};

use super::Place;

/// One place included in a generated day itinerary, with the travel
/// required to reach it from the previous stop (or the starting point
/// for the first stop) and an estimate of how long to spend there.
///
/// Position in the plan's stop sequence is the visit order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlannedStop {
    /// The place to visit
    pub place: Place,
    /// Travel distance from the previous position in kilometers
    pub travel_km: f64,
    /// Travel time from the previous position in minutes
    pub travel_minutes: u32,
    /// Estimated visit duration in minutes
    pub visit_minutes: u32,
}

/// An ordered day itinerary with aggregate totals.
///
/// Rebuilt fresh on every planner invocation; never mutated or persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DayPlan {
    /// Stops in visit order
    pub stops: Vec<PlannedStop>,
    /// Sum of per-stop travel distances in kilometers
    pub total_travel_km: f64,
    /// Sum of per-stop travel times in minutes
    pub total_travel_minutes: u32,
    /// Sum of per-stop visit durations in minutes
    pub total_visit_minutes: u32,
}

impl DayPlan {
    /// Build a plan from an ordered stop list, computing the totals
    #[must_use]
    pub fn from_stops(stops: Vec<PlannedStop>) -> Self {
        let total_travel_km = stops.iter().map(|stop| stop.travel_km).sum();
        let total_travel_minutes = stops.iter().map(|stop| stop.travel_minutes).sum();
        let total_visit_minutes = stops.iter().map(|stop| stop.visit_minutes).sum();

        Self {
            stops,
            total_travel_km,
            total_travel_minutes,
            total_visit_minutes,
        }
    }

    /// A valid plan with zero stops and zero totals
    #[must_use]
    pub fn empty() -> Self {
        Self::from_stops(Vec::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Total time on the road plus time at the stops, in minutes
    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        self.total_travel_minutes + self.total_visit_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Place, PlaceCategory};

    fn stop(travel_km: f64, travel_minutes: u32, visit_minutes: u32) -> PlannedStop {
        PlannedStop {
            place: Place::sample(1, "Test", PlaceCategory::Temple, 13.0, 103.0),
            travel_km,
            travel_minutes,
            visit_minutes,
        }
    }

    #[test]
    fn test_empty_plan_has_zero_totals() {
        let plan = DayPlan::empty();
        assert!(plan.is_empty());
        assert_eq!(plan.total_travel_km, 0.0);
        assert_eq!(plan.total_travel_minutes, 0);
        assert_eq!(plan.total_visit_minutes, 0);
        assert_eq!(plan.total_minutes(), 0);
    }

    #[test]
    fn test_totals_are_sums_of_stops() {
        let plan = DayPlan::from_stops(vec![stop(1.5, 4, 60), stop(2.5, 6, 90)]);
        assert!((plan.total_travel_km - 4.0).abs() < 1e-10);
        assert_eq!(plan.total_travel_minutes, 10);
        assert_eq!(plan.total_visit_minutes, 150);
        assert_eq!(plan.total_minutes(), 160);
    }
}
