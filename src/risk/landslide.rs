/// Landslide risk: slope (≤40) + rainfall (≤35) + soil (≤15) +
/// vegetation (≤10).
///
/// Without a surveyed slope angle, slope, soil and vegetation are all
/// proxied from elevation.

use crate::model::{round_to, LandslideFactors, LandslideRisk};
use crate::risk::{advisories, risk_color, risk_level};

/// Slope sub-score from a measured angle in degrees.
pub fn slope_score_from_angle(slope_deg: f64) -> f64 {
    if slope_deg > 45.0 {
        40.0
    } else if slope_deg > 30.0 {
        35.0
    } else if slope_deg > 20.0 {
        28.0
    } else if slope_deg > 10.0 {
        20.0
    } else {
        10.0
    }
}

/// Slope sub-score estimated from elevation: mountains, hills, moderate,
/// gentle, flat.
pub fn slope_score_from_elevation(elevation_m: f64) -> f64 {
    if elevation_m > 500.0 {
        38.0
    } else if elevation_m > 200.0 {
        32.0
    } else if elevation_m > 100.0 {
        25.0
    } else if elevation_m > 50.0 {
        15.0
    } else {
        5.0
    }
}

pub fn rainfall_score(rainfall_mm: f64) -> f64 {
    if rainfall_mm > 150.0 {
        35.0
    } else if rainfall_mm > 100.0 {
        30.0
    } else if rainfall_mm > 75.0 {
        25.0
    } else if rainfall_mm > 50.0 {
        20.0
    } else {
        rainfall_mm / 50.0 * 20.0
    }
}

/// Rocky/loose soil at altitude, clay lower down.
pub fn soil_score(elevation_m: f64) -> f64 {
    if elevation_m > 300.0 {
        15.0
    } else if elevation_m > 100.0 {
        12.0
    } else {
        7.0
    }
}

/// Sparser vegetation (less root stabilisation) higher up.
pub fn vegetation_score(elevation_m: f64) -> f64 {
    if elevation_m > 400.0 {
        8.0
    } else if elevation_m > 150.0 {
        6.0
    } else {
        3.0
    }
}

/// Scores landslide risk. A zero slope angle counts as "not surveyed" and
/// falls back to the elevation proxy.
pub fn calculate_landslide_risk(
    _city: &str,
    elevation_m: f64,
    rainfall_mm: f64,
    slope_angle: Option<f64>,
) -> LandslideRisk {
    let slope = match slope_angle.filter(|s| *s != 0.0) {
        Some(angle) => slope_score_from_angle(angle),
        None => slope_score_from_elevation(elevation_m),
    };
    let rainfall = rainfall_score(rainfall_mm);
    let soil = soil_score(elevation_m);
    let vegetation = vegetation_score(elevation_m);

    let score = (slope + rainfall + soil + vegetation).min(100.0);
    let level = risk_level(score);

    LandslideRisk {
        risk_score: round_to(score, 1),
        risk_level: level,
        risk_color: risk_color(level),
        factors: LandslideFactors {
            slope: round_to(slope, 1),
            rainfall: round_to(rainfall, 1),
            soil: round_to(soil, 1),
            vegetation: round_to(vegetation, 1),
        },
        warnings: advisories::landslide_warnings(level, elevation_m),
        actions: advisories::landslide_actions(level),
    }
}
