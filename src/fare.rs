//! Tuk-tuk fare estimate
//!
//! Flat base fare plus a per-kilometer rate that steps up past 8 km, which
//! tracks what drivers around the Old Market actually quote. Riel amounts
//! are rounded to the nearest 100 at 4100 riel per dollar.

use serde::{Deserialize, Serialize};

const BASE_PRICE_USD: f64 = 1.0;
const LOW_RATE_PER_KM: f64 = 0.75;
const HIGH_RATE_PER_KM: f64 = 1.0;
const HIGH_RATE_THRESHOLD_KM: f64 = 8.0;
const RIEL_PER_USD: f64 = 4100.0;

/// Estimated tuk-tuk fare for a trip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FareEstimate {
    pub distance_km: f64,
    /// Total in US dollars, rounded to cents
    pub total_usd: f64,
    /// Total in Cambodian riel, rounded to the nearest 100
    pub total_riel: i64,
}

/// Fare for a trip of the given length.
#[must_use]
pub fn estimate_fare(distance_km: f64) -> FareEstimate {
    let rate = if distance_km > HIGH_RATE_THRESHOLD_KM {
        HIGH_RATE_PER_KM
    } else {
        LOW_RATE_PER_KM
    };

    let total_usd = ((BASE_PRICE_USD + distance_km * rate) * 100.0).round() / 100.0;
    let total_riel = ((total_usd * RIEL_PER_USD / 100.0).round() * 100.0) as i64;

    FareEstimate {
        distance_km,
        total_usd,
        total_riel,
    }
}
