/// Flood and landslide hazard scoring.
///
/// Each hazard is a weighted sum of four capped sub-scores, clipped to
/// 0–100 and banded into a `RiskLevel`. `assessment` combines the two into
/// an overall status with its own, different, thresholds.

pub mod advisories;
pub mod assessment;
pub mod flood;
pub mod hazards;
pub mod landslide;

use crate::model::{OverallStatus, RiskLevel};

pub use assessment::assess_city_risk;
pub use flood::calculate_flood_risk;
pub use landslide::calculate_landslide_risk;

/// Per-hazard band: ≥75 Critical, ≥50 High, ≥25 Medium, else Low.
pub fn risk_level(score: f64) -> RiskLevel {
    if score >= 75.0 {
        RiskLevel::Critical
    } else if score >= 50.0 {
        RiskLevel::High
    } else if score >= 25.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

pub fn risk_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Critical => "#ff0000",
        RiskLevel::High => "#ff6600",
        RiskLevel::Medium => "#ffcc00",
        RiskLevel::Low => "#00cc00",
    }
}

/// Combined-score status: ≥70 Emergency, ≥50 High Alert, ≥30 Moderate
/// Alert, else Normal. Not the same breakpoints as `risk_level`.
pub fn overall_status(combined: f64) -> OverallStatus {
    if combined >= 70.0 {
        OverallStatus::Emergency
    } else if combined >= 50.0 {
        OverallStatus::HighAlert
    } else if combined >= 30.0 {
        OverallStatus::ModerateAlert
    } else {
        OverallStatus::Normal
    }
}
