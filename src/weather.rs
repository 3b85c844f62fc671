//! Current weather snapshot for Siem Reap
//!
//! Thin wrapper over the Open-Meteo current-conditions endpoint (no API
//! key required). The planner never depends on this; it only feeds the
//! frontend's weather widget.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Siem Reap city center
pub const SIEM_REAP_LAT: f64 = 13.3671;
pub const SIEM_REAP_LNG: f64 = 103.8448;

/// Default Open-Meteo endpoint, overridable through config
pub const OPEN_METEO_BASE_URL: &str = "https://api.open-meteo.com/v1";

static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("default reqwest client")
});

/// Current conditions, already mapped for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// WMO weather code
    pub weather_code: u8,
    /// Human-readable condition, e.g. "Partly Cloudy"
    pub condition: String,
    /// Display icon for the condition
    pub icon: String,
}

/// Fetch the current conditions in Siem Reap.
#[tracing::instrument(level = "debug")]
pub async fn fetch_current(base_url: &str) -> Result<WeatherSnapshot> {
    let url = format!(
        "{base_url}/forecast?latitude={SIEM_REAP_LAT}&longitude={SIEM_REAP_LNG}&current=temperature_2m,weather_code,wind_speed_10m&timezone=Asia%2FBangkok"
    );

    let response = HTTP_CLIENT
        .get(url)
        .send()
        .await
        .context("Weather request failed")?;

    let current: openmeteo::CurrentResponse = response
        .json()
        .await
        .context("Failed to parse OpenMeteo current-conditions response")?;

    Ok(WeatherSnapshot::from(current))
}

impl From<openmeteo::CurrentResponse> for WeatherSnapshot {
    fn from(response: openmeteo::CurrentResponse) -> Self {
        let current = response.current.unwrap_or_default();
        let code = current.weather_code.unwrap_or(0);
        let (condition, icon) = openmeteo::weather_code_display(code);

        Self {
            temperature: current.temperature.unwrap_or(0.0),
            wind_speed: current.wind_speed.unwrap_or(0.0),
            weather_code: code,
            condition: condition.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// `OpenMeteo` API response structures and display mapping
pub mod openmeteo {
    use serde::Deserialize;

    /// Current-conditions response from `OpenMeteo`
    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub current: Option<CurrentData>,
    }

    /// Current weather block from `OpenMeteo`
    #[derive(Debug, Default, Deserialize)]
    pub struct CurrentData {
        #[serde(rename = "temperature_2m")]
        pub temperature: Option<f64>,
        pub weather_code: Option<u8>,
        #[serde(rename = "wind_speed_10m")]
        pub wind_speed: Option<f64>,
    }

    /// Map a WMO weather code to a condition label and icon.
    ///
    /// Unknown codes get a neutral fallback rather than an error; the
    /// widget always has something to show.
    #[must_use]
    pub fn weather_code_display(code: u8) -> (&'static str, &'static str) {
        match code {
            0 => ("Clear", "☀️"),
            1 => ("Mostly Clear", "🌤️"),
            2 => ("Partly Cloudy", "⛅"),
            3 => ("Overcast", "☁️"),
            45 | 48 => ("Fog", "🌫️"),
            51 => ("Light Drizzle", "🌦️"),
            53 => ("Drizzle", "🌦️"),
            55 => ("Heavy Drizzle", "🌧️"),
            61 => ("Light Rain", "🌦️"),
            63 => ("Rain", "🌧️"),
            65 => ("Heavy Rain", "⛈️"),
            80 => ("Rain Showers", "🌦️"),
            81 => ("Rain Showers", "🌧️"),
            82 => ("Strong Showers", "⛈️"),
            95 => ("Thunderstorm", "⛈️"),
            _ => ("Weather", "🌤️"),
        }
    }
}
