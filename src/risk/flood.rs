/// Flood risk: rainfall (≤40) + elevation (≤30) + drainage (≤20) +
/// humidity (≤10).

use crate::model::{round_to, Drainage, FloodFactors, FloodRisk};
use crate::risk::{advisories, hazards, risk_color, risk_level};

/// Humidity assumed when no observation is available, percent.
pub const DEFAULT_HUMIDITY: f64 = 70.0;

pub fn rainfall_score(rainfall_mm: f64) -> f64 {
    if rainfall_mm > 150.0 {
        40.0
    } else if rainfall_mm > 100.0 {
        35.0
    } else if rainfall_mm > 75.0 {
        30.0
    } else if rainfall_mm > 50.0 {
        25.0
    } else if rainfall_mm > 25.0 {
        20.0
    } else {
        rainfall_mm / 25.0 * 20.0
    }
}

pub fn elevation_score(elevation_m: f64) -> f64 {
    if elevation_m <= 0.0 {
        30.0
    } else if elevation_m <= 5.0 {
        28.0
    } else if elevation_m <= 10.0 {
        25.0
    } else if elevation_m <= 20.0 {
        20.0
    } else if elevation_m <= 50.0 {
        15.0
    } else {
        (15.0 - elevation_m / 50.0).max(0.0)
    }
}

pub fn drainage_score(drainage: Drainage) -> f64 {
    match drainage {
        Drainage::Poor => 20.0,
        Drainage::Moderate => 12.0,
        Drainage::Good => 5.0,
    }
}

pub fn humidity_score(humidity: f64) -> f64 {
    if humidity > 85.0 {
        10.0
    } else if humidity > 70.0 {
        7.0
    } else {
        humidity / 100.0 * 10.0
    }
}

/// Scores flood risk for `city` under the given conditions.
///
/// Only the city's drainage rating is looked up; unknown cities are rated
/// moderate.
pub fn calculate_flood_risk(city: &str, elevation_m: f64, rainfall_mm: f64, humidity: f64) -> FloodRisk {
    let rainfall = rainfall_score(rainfall_mm);
    let elevation = elevation_score(elevation_m);
    let drainage = drainage_score(hazards::drainage_for(city));
    let humidity = humidity_score(humidity);

    let score = (rainfall + elevation + drainage + humidity).min(100.0);
    let level = risk_level(score);

    FloodRisk {
        risk_score: round_to(score, 1),
        risk_level: level,
        risk_color: risk_color(level),
        factors: FloodFactors {
            rainfall: round_to(rainfall, 1),
            elevation: round_to(elevation, 1),
            drainage: round_to(drainage, 1),
            humidity: round_to(humidity, 1),
        },
        warnings: advisories::flood_warnings(level, rainfall_mm),
        actions: advisories::flood_actions(level),
    }
}
