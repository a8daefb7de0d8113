/// Combined flood + landslide assessment for a city.

use crate::logging::{self, Component};
use crate::model::{round_to, FloodRisk, LandslideRisk, RiskAssessment, WeatherInput};
use crate::risk::{advisories, flood, hazards, landslide, overall_status};

/// Scores to at or above this contribute their first two actions to the
/// priority list.
const PRIORITY_THRESHOLD: f64 = 50.0;

/// Rainfall stand-in when there is no weather observation at all: half the
/// relative humidity, in mm. An observation that reports no rain is 0 mm,
/// not this.
pub fn rainfall_proxy(humidity: f64) -> f64 {
    humidity / 2.0
}

fn priority_actions(flood: &FloodRisk, landslide: &LandslideRisk) -> Vec<String> {
    let mut actions = Vec::new();

    if flood.risk_score >= PRIORITY_THRESHOLD {
        actions.extend(flood.actions.iter().take(2).cloned());
    }
    if landslide.risk_score >= PRIORITY_THRESHOLD {
        actions.extend(landslide.actions.iter().take(2).cloned());
    }
    if actions.is_empty() {
        actions.push(advisories::ALL_CLEAR.to_string());
    }
    actions
}

/// Full assessment: both hazards under the current weather, their mean as
/// the combined risk, and an overall status.
///
/// The landslide scorer always uses the elevation proxy here.
pub fn assess_city_risk(city: &str, elevation_m: f64, weather: WeatherInput) -> RiskAssessment {
    let flood_risk = flood::calculate_flood_risk(city, elevation_m, weather.rainfall, weather.humidity);
    let landslide_risk = landslide::calculate_landslide_risk(city, elevation_m, weather.rainfall, None);

    let combined = (flood_risk.risk_score + landslide_risk.risk_score) / 2.0;
    let status = overall_status(combined);

    logging::debug(
        Component::Scorer,
        Some(city),
        &format!(
            "flood {} ({}), landslide {} ({}), combined {:.1} -> {}",
            flood_risk.risk_score,
            flood_risk.risk_level,
            landslide_risk.risk_score,
            landslide_risk.risk_level,
            combined,
            status
        ),
    );

    RiskAssessment {
        city: city.to_string(),
        elevation: elevation_m,
        weather,
        priority_actions: priority_actions(&flood_risk, &landslide_risk),
        flood_risk,
        landslide_risk,
        combined_risk: round_to(combined, 1),
        overall_status: status,
        history: hazards::find_hazards(city).copied(),
    }
}
