/// Current-conditions and elevation payload shaping
///
/// Turns the JSON bodies returned by the weather and elevation
/// collaborators into the plain values the scorers consume. No requests are
/// made here; callers fetch the bodies and hand them over as text.
///
/// Weather payloads follow the OpenWeather "current weather" shape
/// (`coord`, `main`, optional `rain`); elevation payloads follow the
/// Open-Meteo shape (`{"elevation": [..]}`).

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::logging::{self, Component};
use crate::model::{round_to, ClimateError, Coordinates, WeatherInput};

// ============================================================================
// Payload Structures
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    pub name: String,
    pub coord: CoordBlock,
    pub main: MainBlock,
    #[serde(default)]
    pub rain: Option<RainBlock>,
    /// Observation time, Unix seconds.
    #[serde(default)]
    pub dt: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CoordBlock {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub struct MainBlock {
    #[serde(rename = "temp")]
    pub temperature_c: f64,
    pub humidity: f64,
}

#[derive(Debug, Deserialize)]
pub struct RainBlock {
    /// Rain volume over the last hour, mm.
    #[serde(rename = "1h", default)]
    pub last_hour_mm: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ElevationResponse {
    #[serde(default)]
    pub elevation: Vec<f64>,
}

/// Processed observation ready for scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub city: String,
    pub lat: f64,
    pub lon: f64,
    pub observed_at: Option<DateTime<Utc>>,
    pub temperature_c: f64,
    pub humidity: f64,
    /// Daily rainfall estimate, mm. Zero when the payload reported no rain.
    pub rainfall_mm: f64,
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses a current-conditions body.
///
/// Hourly rain is scaled ×24 to a daily estimate. A missing rain block, or
/// one without an hourly value, counts as 0 mm.
pub fn parse_current_weather(body: &str) -> Result<WeatherObservation, ClimateError> {
    let response: CurrentWeatherResponse = serde_json::from_str(body).map_err(|e| {
        logging::warn(Component::Ingest, None, &format!("weather payload rejected: {}", e));
        ClimateError::Parse(format!("weather payload: {}", e))
    })?;

    let observed_at = response.dt.and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0));
    let rainfall_mm = response
        .rain
        .and_then(|r| r.last_hour_mm)
        .unwrap_or(0.0)
        * 24.0;

    Ok(WeatherObservation {
        city: response.name,
        lat: response.coord.lat,
        lon: response.coord.lon,
        observed_at,
        temperature_c: response.main.temperature_c,
        humidity: response.main.humidity,
        rainfall_mm,
    })
}

/// Parses an elevation body, returning the first value rounded to 0.1 m.
/// An empty array yields `None` so callers can apply their default.
pub fn parse_elevation(body: &str) -> Result<Option<f64>, ClimateError> {
    let response: ElevationResponse = serde_json::from_str(body)
        .map_err(|e| ClimateError::Parse(format!("elevation payload: {}", e)))?;

    Ok(response.elevation.first().map(|e| round_to(*e, 1)))
}

// ============================================================================
// Helpers
// ============================================================================

impl WeatherObservation {
    pub fn to_weather_input(&self) -> WeatherInput {
        WeatherInput {
            rainfall: self.rainfall_mm,
            humidity: self.humidity,
            temperature: self.temperature_c,
        }
    }

    pub fn coordinates(&self, elevation: Option<f64>) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lon: self.lon,
            elevation,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
