/// City registry for the climate alert service.
///
/// Defines the canonical sea-level profiles for the cities this service
/// knows by name, and the coarse coastal/island boxes used to profile any
/// other point on the globe. Other modules look city factors up here rather
/// than hardcoding them.

use crate::logging::{self, Component};
use crate::model::{CityProfile, Vulnerability};

// ---------------------------------------------------------------------------
// Named city profiles
// ---------------------------------------------------------------------------

const fn city(
    name: &'static str,
    amplification_factor: f64,
    elevation_m: f64,
    vulnerability: Vulnerability,
) -> CityProfile {
    CityProfile {
        name,
        amplification_factor,
        elevation_m,
        vulnerability,
    }
}

use Vulnerability::{Critical, High, Low, Moderate};

/// All cities with a hand-tuned sea-level profile, roughly ordered from most
/// to least exposed.
pub static CITY_REGISTRY: &[CityProfile] = &[
    city("Miami", 1.8, 2.0, Critical),
    city("Venice", 2.0, 1.0, Critical),
    city("Amsterdam", 1.6, -2.0, Critical), // polders, below sea level
    city("Mumbai", 1.5, 14.0, Critical),
    city("Shanghai", 1.7, 4.0, Critical),
    city("Jakarta", 1.9, 8.0, Critical),
    city("New York", 1.4, 10.0, High),
    city("London", 1.3, 11.0, High),
    city("Tokyo", 1.2, 40.0, Moderate),
    city("Sydney", 1.1, 58.0, Moderate),
    city("Los Angeles", 1.2, 93.0, Moderate),
    city("San Francisco", 1.3, 16.0, High),
    city("Singapore", 1.6, 15.0, High),
    city("Hong Kong", 1.4, 32.0, High),
    city("Dubai", 1.5, 5.0, High),
    city("Bangkok", 1.7, 1.5, Critical),
    city("Manila", 1.6, 16.0, High),
    city("Rio de Janeiro", 1.3, 30.0, Moderate),
    city("Buenos Aires", 1.2, 25.0, Moderate),
    city("Delhi", 1.0, 216.0, Low),
    city("Copenhagen", 1.4, 14.0, High),
    city("Stockholm", 1.2, 28.0, Moderate),
    city("Boston", 1.4, 43.0, High),
    city("Seattle", 1.3, 52.0, Moderate),
    city("Barcelona", 1.3, 12.0, High),
    city("Lisbon", 1.3, 111.0, Low),
];

/// Looks up a city by exact name. Returns `None` if not found.
pub fn find_city(name: &str) -> Option<&'static CityProfile> {
    CITY_REGISTRY.iter().find(|c| c.name == name)
}

/// Looks up a city, falling back to `CityProfile::DEFAULT` for unknown names.
pub fn profile_or_default(name: &str) -> CityProfile {
    match find_city(name) {
        Some(profile) => *profile,
        None => {
            logging::debug(
                Component::Profiler,
                Some(name),
                "not in registry, using default profile",
            );
            CityProfile::DEFAULT
        }
    }
}

/// Names of every registered city, sorted ascending.
pub fn available_cities() -> Vec<&'static str> {
    let mut names: Vec<_> = CITY_REGISTRY.iter().map(|c| c.name).collect();
    names.sort_unstable();
    names
}

// ---------------------------------------------------------------------------
// Elevation ladder
// ---------------------------------------------------------------------------

/// Extra risk multiplier derived from elevation alone.
///
/// Applied on top of the city amplification factor, which already reflects
/// elevation.
pub fn elevation_risk_multiplier(elevation_m: f64) -> f64 {
    if elevation_m <= 5.0 {
        1.5
    } else if elevation_m <= 15.0 {
        1.2
    } else if elevation_m <= 30.0 {
        1.0
    } else {
        0.8
    }
}

// ---------------------------------------------------------------------------
// Coordinate-based profiling
// ---------------------------------------------------------------------------

/// Inclusive lat/lon box.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.lat_min <= lat && lat <= self.lat_max && self.lon_min <= lon && lon <= self.lon_max
    }
}

/// A stretch of major coastline with a nominal distance-to-water proxy.
#[derive(Debug, Clone, Copy)]
pub struct CoastalRegion {
    pub name: &'static str,
    pub bounds: BoundingBox,
    /// Nominal distance to open water, km.
    pub distance_km: f64,
}

/// Coastal distance assumed when a point is in no coastal region.
pub const INLAND_DISTANCE_KM: f64 = 200.0;

/// Tested in order; the first containing region wins.
pub static COASTAL_REGIONS: &[CoastalRegion] = &[
    CoastalRegion {
        name: "Atlantic coast",
        bounds: BoundingBox { lat_min: 25.0, lat_max: 45.0, lon_min: -80.0, lon_max: -70.0 },
        distance_km: 5.0,
    },
    CoastalRegion {
        name: "Pacific coast",
        bounds: BoundingBox { lat_min: 25.0, lat_max: 50.0, lon_min: -125.0, lon_max: -115.0 },
        distance_km: 5.0,
    },
    CoastalRegion {
        name: "European coast",
        bounds: BoundingBox { lat_min: 35.0, lat_max: 60.0, lon_min: -10.0, lon_max: 30.0 },
        distance_km: 10.0,
    },
    CoastalRegion {
        name: "Asian coast",
        bounds: BoundingBox { lat_min: 0.0, lat_max: 40.0, lon_min: 100.0, lon_max: 140.0 },
        distance_km: 10.0,
    },
    CoastalRegion {
        name: "Indian Ocean",
        bounds: BoundingBox { lat_min: -20.0, lat_max: 25.0, lon_min: 40.0, lon_max: 100.0 },
        distance_km: 10.0,
    },
];

/// Island regions. Points inside any of these get a higher factor.
///
/// The Pacific box spans the antimeridian but is stored as a plain
/// min/max range, so it never matches. Kept as published.
pub static ISLAND_REGIONS: &[BoundingBox] = &[
    // Caribbean
    BoundingBox { lat_min: 10.0, lat_max: 25.0, lon_min: -90.0, lon_max: -60.0 },
    // Pacific islands
    BoundingBox { lat_min: -30.0, lat_max: 30.0, lon_min: 140.0, lon_max: -120.0 },
    // Mediterranean islands
    BoundingBox { lat_min: 35.0, lat_max: 45.0, lon_min: 10.0, lon_max: 30.0 },
];

/// Distance-to-coast proxy for a point, in km.
pub fn estimate_coastal_distance(lat: f64, lon: f64) -> f64 {
    COASTAL_REGIONS
        .iter()
        .find(|r| r.bounds.contains(lat, lon))
        .map(|r| r.distance_km)
        .unwrap_or(INLAND_DISTANCE_KM)
}

pub fn is_island(lat: f64, lon: f64) -> bool {
    ISLAND_REGIONS.iter().any(|b| b.contains(lat, lon))
}

/// Profile derived for a point that has no registry entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateProfile {
    pub amplification_factor: f64,
    pub vulnerability: Vulnerability,
    pub coastal_distance_km: f64,
}

/// Derives vulnerability and amplification from elevation and coastal
/// distance.
///
/// Each rung is `elevation OR distance`, checked from most to least severe.
/// Island points get factor × 1.3 and moderate is upgraded to high.
pub fn profile_from_coordinates(lat: f64, lon: f64, elevation_m: f64) -> CoordinateProfile {
    let coastal_distance_km = estimate_coastal_distance(lat, lon);

    let (mut vulnerability, mut factor) = if elevation_m <= 5.0 || coastal_distance_km < 10.0 {
        (Vulnerability::Critical, 1.8)
    } else if elevation_m <= 15.0 || coastal_distance_km < 50.0 {
        (Vulnerability::High, 1.5)
    } else if elevation_m <= 30.0 || coastal_distance_km < 100.0 {
        (Vulnerability::Moderate, 1.2)
    } else {
        (Vulnerability::Low, 0.9)
    };

    if is_island(lat, lon) {
        factor *= 1.3;
        if vulnerability == Vulnerability::Moderate {
            vulnerability = Vulnerability::High;
        }
    }

    logging::debug(
        Component::Profiler,
        None,
        &format!(
            "({:.4}, {:.4}) elev {} m -> {} x{:.2}, coast {} km",
            lat, lon, elevation_m, vulnerability, factor, coastal_distance_km
        ),
    );

    CoordinateProfile {
        amplification_factor: factor,
        vulnerability,
        coastal_distance_km,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
