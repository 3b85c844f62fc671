//! Hourly crowd and heat timeline for a place
//!
//! Purely synthetic model: a per-category baseline with boosts around
//! lunch, sunset, and the evening, plus a midday heat curve. Good enough
//! to steer visitors toward quieter, cooler hours without live data.

use serde::{Deserialize, Serialize};

use crate::models::{Place, PlaceCategory};

/// Timeline covers the tourist day, 6:00 through 20:00
pub const FIRST_HOUR: u32 = 6;
pub const LAST_HOUR: u32 = 20;

/// Expected crowding and heat for one hour of the day, both in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub hour: u32,
    pub crowd: f64,
    pub heat: f64,
}

fn normalize(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

fn base_crowd(category: PlaceCategory) -> f64 {
    match category {
        PlaceCategory::Temple => 0.58,
        PlaceCategory::Nature => 0.42,
        PlaceCategory::Dining => 0.55,
        PlaceCategory::Shopping => 0.5,
        PlaceCategory::Museum => 0.47,
        PlaceCategory::Culture => 0.46,
    }
}

/// Hour-by-hour crowd/heat estimate for a place.
#[must_use]
pub fn crowd_heat_timeline(place: &Place) -> Vec<TimelinePoint> {
    let base = base_crowd(place.category);
    let mut points = Vec::with_capacity((LAST_HOUR - FIRST_HOUR + 1) as usize);

    for hour in FIRST_HOUR..=LAST_HOUR {
        let lunch_boost = if (11..=13).contains(&hour) { 0.12 } else { 0.0 };
        let sunset_boost = if (16..=18).contains(&hour) { 0.16 } else { 0.0 };
        let evening_boost = if hour >= 18 && place.category != PlaceCategory::Temple {
            0.18
        } else {
            0.0
        };
        let morning_quiet = if hour <= 8 { -0.12 } else { 0.0 };

        let crowd = normalize(base + lunch_boost + sunset_boost + evening_boost + morning_quiet);

        // Heat peaks at 13:00 and falls off as a gaussian
        let offset = f64::from(hour) - 13.0;
        let heat_peak = (-(offset * offset) / 10.0).exp();
        let heat = normalize(0.22 + heat_peak * 0.72);

        points.push(TimelinePoint { hour, crowd, heat });
    }

    points
}
