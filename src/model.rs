/// Core data types for the climate alert service.
///
/// This module defines the shared domain model imported by all other modules:
/// scenarios, vulnerability classes, prediction records, hazard scores and
/// the crate error type. It contains no scoring logic and no I/O.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Baselines
// ---------------------------------------------------------------------------

/// Last year of observed data. Years after this are projections and get
/// scenario scaling plus acceleration.
pub const BASELINE_YEAR: i32 = 2024;

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

/// Emissions trajectory used to scale projected sea-level rise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    /// Strong climate action.
    Optimistic,
    /// Current trajectory.
    #[default]
    Moderate,
    /// High emissions.
    Pessimistic,
}

impl Scenario {
    /// Multiplicative factor applied to projected rise.
    pub fn multiplier(self) -> f64 {
        match self {
            Scenario::Optimistic => 0.85,
            Scenario::Moderate => 1.0,
            Scenario::Pessimistic => 1.35,
        }
    }

    /// Parses a scenario name. Unrecognized names fall back to `Moderate`;
    /// an unknown scenario is never an error.
    pub fn from_name(name: &str) -> Scenario {
        match name {
            "optimistic" => Scenario::Optimistic,
            "pessimistic" => Scenario::Pessimistic,
            _ => Scenario::Moderate,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scenario::Optimistic => "optimistic",
            Scenario::Moderate => "moderate",
            Scenario::Pessimistic => "pessimistic",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// City profiles
// ---------------------------------------------------------------------------

/// Ordinal risk category for a city, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vulnerability {
    Low,
    Moderate,
    High,
    Critical,
}

impl fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vulnerability::Low => write!(f, "low"),
            Vulnerability::Moderate => write!(f, "moderate"),
            Vulnerability::High => write!(f, "high"),
            Vulnerability::Critical => write!(f, "critical"),
        }
    }
}

/// Sea-level amplification metadata for a single city.
///
/// Profiles are stored in `cities::CITY_REGISTRY`; cities missing from the
/// registry use `CityProfile::DEFAULT`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CityProfile {
    pub name: &'static str,
    /// Local amplification of the global rise, always > 0.
    pub amplification_factor: f64,
    /// Mean elevation in metres. Negative for cities below sea level.
    pub elevation_m: f64,
    pub vulnerability: Vulnerability,
}

impl CityProfile {
    /// Profile used for cities that are not in the registry.
    pub const DEFAULT: CityProfile = CityProfile {
        name: "",
        amplification_factor: 1.0,
        elevation_m: 50.0,
        vulnerability: Vulnerability::Moderate,
    };
}

/// Geographic point supplied by the geocoding/elevation collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
    /// Elevation in metres, when an elevation lookup succeeded.
    pub elevation: Option<f64>,
}

impl Coordinates {
    /// Elevation assumed when no lookup is available.
    pub const DEFAULT_ELEVATION_M: f64 = 50.0;

    pub fn elevation_or_default(&self) -> f64 {
        self.elevation.unwrap_or(Self::DEFAULT_ELEVATION_M)
    }
}

// ---------------------------------------------------------------------------
// Sea-level prediction records
// ---------------------------------------------------------------------------

/// Global sea-level projection for one year, in mm above the 1900 baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlobalPrediction {
    pub year: i32,
    pub prediction: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Half-width of the band. Negative for years before the baseline.
    pub uncertainty: f64,
}

/// Local projection for one city and one year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub year: i32,
    pub global_rise: f64,
    pub local_rise: f64,
    pub elevation: f64,
    /// 0-100.
    pub flooding_risk: f64,
    /// 0-50.
    pub impact_percentage: f64,
    pub vulnerability: Vulnerability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coastal_distance: Option<f64>,
}

/// Full per-city result: the profile that was used plus one prediction per
/// requested year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityPredictionResult {
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub predictions: Vec<Prediction>,
    pub city_factor: f64,
    pub elevation: f64,
    pub vulnerability: Vulnerability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coastal_distance: Option<f64>,
}

/// One row of a multi-city comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub city: String,
    pub local_rise: f64,
    pub flooding_risk: f64,
    pub vulnerability: Vulnerability,
    pub elevation: f64,
}

// ---------------------------------------------------------------------------
// Hazard scoring records
// ---------------------------------------------------------------------------

/// Per-hazard severity band, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Critical => write!(f, "Critical"),
        }
    }
}

/// Overall status derived from the combined hazard score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OverallStatus {
    Normal,
    #[serde(rename = "Moderate Alert")]
    ModerateAlert,
    #[serde(rename = "High Alert")]
    HighAlert,
    Emergency,
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverallStatus::Normal => write!(f, "Normal"),
            OverallStatus::ModerateAlert => write!(f, "Moderate Alert"),
            OverallStatus::HighAlert => write!(f, "High Alert"),
            OverallStatus::Emergency => write!(f, "Emergency"),
        }
    }
}

/// Qualitative rating of a city's storm-water infrastructure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Drainage {
    Poor,
    Moderate,
    Good,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloodFactors {
    pub rainfall: f64,
    pub elevation: f64,
    pub drainage: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloodRisk {
    /// 0-100, one decimal.
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub risk_color: &'static str,
    pub factors: FloodFactors,
    pub warnings: Vec<String>,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandslideFactors {
    pub slope: f64,
    pub rainfall: f64,
    pub soil: f64,
    pub vegetation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandslideRisk {
    /// 0-100, one decimal.
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub risk_color: &'static str,
    pub factors: LandslideFactors,
    pub warnings: Vec<String>,
    pub actions: Vec<String>,
}

/// Current conditions fed into the hazard scorers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherInput {
    pub rainfall: f64,
    pub humidity: f64,
    pub temperature: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub city: String,
    pub elevation: f64,
    pub weather: WeatherInput,
    pub flood_risk: FloodRisk,
    pub landslide_risk: LandslideRisk,
    /// Mean of the two hazard scores, one decimal.
    pub combined_risk: f64,
    pub overall_status: OverallStatus,
    pub priority_actions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<crate::risk::hazards::CityHazards>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised at the boundaries of the service: argument parsing,
/// configuration loading, payload parsing and fitting arbitrary series.
///
/// Scoring and prediction functions are total and never return these.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClimateError {
    /// A request argument could not be interpreted.
    #[error("Invalid argument '{name}' ({value:?}): {reason}")]
    InvalidArgument {
        name: String,
        value: String,
        reason: String,
    },
    /// The configuration file exists but could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),
    /// An external payload did not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
    /// The regression normal equations were singular.
    #[error("Numerical error: {0}")]
    NumericalError(String),
}

impl ClimateError {
    pub fn invalid(name: &str, value: &str, reason: &str) -> Self {
        ClimateError::InvalidArgument {
            name: name.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Rounding
// ---------------------------------------------------------------------------

/// Rounds half away from zero to `decimals` places, the way reported
/// values are presented.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
