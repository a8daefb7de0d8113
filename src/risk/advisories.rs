/// Canned warning and action text, selected by score band.

use crate::model::RiskLevel;

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn flood_warnings(level: RiskLevel, rainfall_mm: f64) -> Vec<String> {
    match level {
        RiskLevel::Critical => vec![
            "🚨 CRITICAL: Immediate evacuation may be necessary".to_string(),
            format!("⚠️ Extreme rainfall: {}mm", rainfall_mm),
        ],
        RiskLevel::High => lines(&["⚠️ HIGH RISK: Monitor situation closely", "📍 Avoid low-lying areas"]),
        RiskLevel::Medium => lines(&["⚡ MODERATE: Be prepared for potential flooding"]),
        RiskLevel::Low => lines(&["✅ Low risk - Normal conditions"]),
    }
}

pub fn flood_actions(level: RiskLevel) -> Vec<String> {
    match level {
        RiskLevel::Critical => lines(&[
            "1. Move to higher ground immediately",
            "2. Avoid all flood-prone areas",
            "3. Prepare emergency kit",
            "4. Stay informed via official channels",
        ]),
        RiskLevel::High => lines(&[
            "1. Monitor weather updates",
            "2. Clear drainage systems",
            "3. Secure important documents",
            "4. Have evacuation plan ready",
        ]),
        RiskLevel::Medium => lines(&[
            "1. Stay alert to weather changes",
            "2. Check drainage systems",
            "3. Keep emergency contacts handy",
        ]),
        RiskLevel::Low => lines(&["No immediate action required"]),
    }
}

pub fn landslide_warnings(level: RiskLevel, elevation_m: f64) -> Vec<String> {
    match level {
        RiskLevel::Critical => vec![
            "🚨 CRITICAL: High landslide probability".to_string(),
            format!("⛰️ Elevation: {}m - Steep terrain", elevation_m),
        ],
        RiskLevel::High => lines(&["⚠️ HIGH RISK: Monitor slope stability", "🌧️ Soil saturation critical"]),
        RiskLevel::Medium => lines(&["⚡ MODERATE: Watch for ground movement"]),
        RiskLevel::Low => lines(&["✅ Low risk - Stable conditions"]),
    }
}

pub fn landslide_actions(level: RiskLevel) -> Vec<String> {
    match level {
        RiskLevel::Critical => lines(&[
            "1. Evacuate slope areas immediately",
            "2. Avoid hillside roads",
            "3. Watch for cracks in ground/walls",
            "4. Report unusual ground movement",
        ]),
        RiskLevel::High => lines(&[
            "1. Stay away from steep slopes",
            "2. Monitor for ground cracks",
            "3. Prepare to evacuate",
            "4. Listen for rumbling sounds",
        ]),
        RiskLevel::Medium => lines(&[
            "1. Be aware of surroundings",
            "2. Note changes in landscape",
            "3. Have evacuation route planned",
        ]),
        RiskLevel::Low => lines(&["No immediate action required"]),
    }
}

pub const ALL_CLEAR: &str = "✅ Continue normal activities - Monitor weather updates";
