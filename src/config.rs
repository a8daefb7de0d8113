/// Service configuration loaded from TOML.
///
/// Every field has a default, so an absent file or a partial file is fine.
/// Only tunable defaults live here; the city, coastal and hazard tables are
/// compiled in.
///
/// Lookup order for the file:
/// 1. `CLIMATE_ALERT_CONFIG` (after loading `.env`)
/// 2. `climate_alert.toml` in the working directory
/// 3. built-in defaults

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::logging::{self, Component, LogLevel};
use crate::model::{ClimateError, Coordinates, Scenario};
use crate::risk::flood;

pub const CONFIG_ENV_VAR: &str = "CLIMATE_ALERT_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "climate_alert.toml";

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PredictionSettings {
    /// Scenario name used when a request names none. Unknown names mean
    /// moderate, as everywhere else.
    pub default_scenario: String,
    pub city_years: Vec<i32>,
    pub global_years: Vec<i32>,
    pub compare_year: i32,
}

impl Default for PredictionSettings {
    fn default() -> Self {
        PredictionSettings {
            default_scenario: "moderate".to_string(),
            city_years: vec![2030, 2050, 2100],
            global_years: vec![2030, 2050, 2075, 2100],
            compare_year: 2050,
        }
    }
}

impl PredictionSettings {
    pub fn scenario(&self) -> Scenario {
        Scenario::from_name(&self.default_scenario)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RiskSettings {
    pub default_humidity: f64,
    /// Elevation for flood and combined assessments when none is given.
    pub default_elevation_m: f64,
    /// Landslide requests historically default higher than flood ones.
    pub default_landslide_elevation_m: f64,
    pub default_rainfall_mm: f64,
    pub default_temperature_c: f64,
}

impl Default for RiskSettings {
    fn default() -> Self {
        RiskSettings {
            default_humidity: flood::DEFAULT_HUMIDITY,
            default_elevation_m: Coordinates::DEFAULT_ELEVATION_M,
            default_landslide_elevation_m: 100.0,
            default_rainfall_mm: 50.0,
            default_temperature_c: 25.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub file: Option<String>,
    pub console_timestamps: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: "info".to_string(),
            file: None,
            console_timestamps: false,
        }
    }
}

impl LoggingSettings {
    /// Configured level, or `Info` if the name is not recognized.
    pub fn min_level(&self) -> LogLevel {
        self.level.parse().unwrap_or(LogLevel::Info)
    }
}

// ---------------------------------------------------------------------------
// Top-level configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub predictions: PredictionSettings,
    pub risk: RiskSettings,
    pub logging: LoggingSettings,
}

impl ServiceConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ClimateError> {
        toml::from_str(text).map_err(|e| ClimateError::Config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self, ClimateError> {
        let text = fs::read_to_string(path)
            .map_err(|e| ClimateError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
            .map_err(|e| ClimateError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Resolves and loads the configuration file, falling back to defaults
    /// when there is nothing to load.
    ///
    /// A path named by the environment variable that does not exist is
    /// reported and ignored; a file that exists but fails to parse is an
    /// error.
    pub fn load() -> Result<Self, ClimateError> {
        dotenv::dotenv().ok();

        match resolve_path(env::var(CONFIG_ENV_VAR).ok()) {
            Some(path) => {
                let config = Self::from_file(&path)?;
                logging::info(
                    Component::Config,
                    None,
                    &format!("Loaded configuration from {}", path.display()),
                );
                Ok(config)
            }
            None => {
                logging::debug(Component::Config, None, "No configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

fn resolve_path(from_env: Option<String>) -> Option<PathBuf> {
    if let Some(raw) = from_env.filter(|s| !s.trim().is_empty()) {
        let path = PathBuf::from(raw);
        if path.exists() {
            return Some(path);
        }
        logging::warn(
            Component::Config,
            None,
            &format!("{} points at missing file {}", CONFIG_ENV_VAR, path.display()),
        );
    }

    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    if local.exists() { Some(local) } else { None }
}
