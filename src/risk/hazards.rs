/// Historical hazard exposure per city.
///
/// `drainage` feeds the flood scorer; the history ratings (0-10) are
/// reported alongside an assessment but do not change any score.

use serde::Serialize;

use crate::model::Drainage;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CityHazards {
    pub city: &'static str,
    pub flood_history: u8,
    pub landslide_history: u8,
    pub drainage: Drainage,
}

const fn hazards(city: &'static str, flood_history: u8, landslide_history: u8, drainage: Drainage) -> CityHazards {
    CityHazards {
        city,
        flood_history,
        landslide_history,
        drainage,
    }
}

pub static HAZARD_REGISTRY: &[CityHazards] = &[
    hazards("Mumbai", 9, 6, Drainage::Poor),
    hazards("Bangkok", 9, 3, Drainage::Poor),
    hazards("Jakarta", 8, 5, Drainage::Poor),
    hazards("New York", 5, 2, Drainage::Good),
    hazards("Venice", 10, 1, Drainage::Poor),
    hazards("Miami", 8, 1, Drainage::Moderate),
    hazards("Shanghai", 7, 3, Drainage::Moderate),
    hazards("Tokyo", 6, 5, Drainage::Good),
    hazards("Rio de Janeiro", 6, 8, Drainage::Poor),
    hazards("Hong Kong", 5, 7, Drainage::Moderate),
    hazards("Seattle", 4, 6, Drainage::Good),
    hazards("San Francisco", 3, 5, Drainage::Good),
];

pub fn find_hazards(city: &str) -> Option<&'static CityHazards> {
    HAZARD_REGISTRY.iter().find(|h| h.city == city)
}

/// Drainage rating for a city; unknown cities are rated moderate.
pub fn drainage_for(city: &str) -> Drainage {
    find_hazards(city)
        .map(|h| h.drainage)
        .unwrap_or(Drainage::Moderate)
}
