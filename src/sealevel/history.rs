/// Observed global mean sea level, mm above the 1900 baseline.
///
/// Decadal points to 2000, then five-yearly, then annual from 2020.
/// Non-decreasing by construction.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeaLevelObservation {
    pub year: i32,
    pub level_mm: f64,
}

const fn obs(year: i32, level_mm: f64) -> SeaLevelObservation {
    SeaLevelObservation { year, level_mm }
}

pub static HISTORICAL_SERIES: &[SeaLevelObservation] = &[
    obs(1900, 0.0),
    obs(1910, 10.0),
    obs(1920, 15.0),
    obs(1930, 25.0),
    obs(1940, 40.0),
    obs(1950, 50.0),
    obs(1960, 70.0),
    obs(1970, 95.0),
    obs(1980, 120.0),
    obs(1990, 155.0),
    obs(2000, 205.0),
    obs(2005, 225.0),
    obs(2010, 245.0),
    obs(2015, 270.0),
    obs(2020, 282.0),
    obs(2021, 287.0),
    obs(2022, 291.0),
    obs(2023, 298.0),
    obs(2024, 305.0),
];

/// "1900-2024"
pub fn training_period() -> String {
    match (HISTORICAL_SERIES.first(), HISTORICAL_SERIES.last()) {
        (Some(first), Some(last)) => format!("{}-{}", first.year, last.year),
        _ => String::new(),
    }
}
