/// Command-line front end.
///
/// Results are printed to stdout as a JSON envelope. Logging goes to
/// stderr so the output can be piped.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::process::ExitCode;

use climate_alert_service::cities;
use climate_alert_service::config::{LoggingSettings, ServiceConfig};
use climate_alert_service::logging::{self, Component};
use climate_alert_service::model::{ClimateError, Coordinates, Scenario, WeatherInput};
use climate_alert_service::params;
use climate_alert_service::report::Envelope;
use climate_alert_service::risk::{self, assessment};
use climate_alert_service::sealevel;

#[derive(Parser, Debug)]
#[command(name = "climate_alert_service")]
#[command(about = "Sea-level projections and flood/landslide risk scoring", long_about = None)]
struct Cli {
    /// Emissions scenario (optimistic, moderate, pessimistic)
    #[arg(long, global = true)]
    scenario: Option<String>,

    /// Comma-separated target years, e.g. 2030,2050
    #[arg(long, global = true)]
    years: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Global sea-level rise projections
    PredictGlobal,

    /// Projections for a registered city
    PredictCity { city: String },

    /// Projections for any location, profiled from its coordinates
    PredictAny {
        city: String,

        #[arg(value_parser = finite, allow_negative_numbers = true)]
        lat: f64,

        #[arg(value_parser = finite, allow_negative_numbers = true)]
        lon: f64,

        /// Elevation in metres (defaults to 50)
        #[arg(value_parser = finite, allow_negative_numbers = true)]
        elevation: Option<f64>,
    },

    /// Rank registered cities by flooding risk
    Compare {
        cities: Vec<String>,

        /// Target year
        #[arg(long)]
        year: Option<i32>,
    },

    /// Flood risk under given conditions
    Flood {
        city: String,

        /// Daily rainfall, mm
        #[arg(value_parser = finite, allow_negative_numbers = true)]
        rainfall: Option<f64>,

        /// Elevation, m
        #[arg(value_parser = finite, allow_negative_numbers = true)]
        elevation: Option<f64>,

        /// Relative humidity, percent
        #[arg(value_parser = finite, allow_negative_numbers = true)]
        humidity: Option<f64>,
    },

    /// Landslide risk under given conditions
    Landslide {
        city: String,

        #[arg(value_parser = finite, allow_negative_numbers = true)]
        rainfall: Option<f64>,

        #[arg(value_parser = finite, allow_negative_numbers = true)]
        elevation: Option<f64>,

        /// Surveyed slope angle, degrees
        #[arg(long, value_parser = finite)]
        slope: Option<f64>,
    },

    /// Combined flood and landslide assessment
    Assess {
        city: String,

        /// Daily rainfall, mm (defaults to half the humidity)
        #[arg(value_parser = finite, allow_negative_numbers = true)]
        rainfall: Option<f64>,

        #[arg(value_parser = finite, allow_negative_numbers = true)]
        humidity: Option<f64>,

        /// Air temperature, °C
        #[arg(value_parser = finite, allow_negative_numbers = true)]
        temperature: Option<f64>,

        #[arg(value_parser = finite, allow_negative_numbers = true)]
        elevation: Option<f64>,
    },

    /// List registered cities
    Cities,

    /// Fit metrics and coefficients of the sea-level model
    ModelInfo,
}

fn finite(text: &str) -> Result<f64, ClimateError> {
    params::parse_number("value", text)
}

impl Cli {
    fn scenario(&self, config: &ServiceConfig) -> Scenario {
        match &self.scenario {
            Some(name) => Scenario::from_name(name),
            None => config.predictions.scenario(),
        }
    }

    fn years_or(&self, default: &[i32]) -> Result<Vec<i32>, ClimateError> {
        match &self.years {
            Some(text) => params::parse_years(text),
            None => Ok(default.to_vec()),
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn render<T: Serialize>(data: T) -> Result<String, ClimateError> {
    Envelope::success(data)
        .to_json()
        .map_err(|e| ClimateError::Parse(format!("serializing output: {}", e)))
}

fn run(cli: &Cli, config: &ServiceConfig) -> Result<String, ClimateError> {
    let defaults = &config.risk;
    let scenario = cli.scenario(config);

    match &cli.command {
        Commands::PredictGlobal => {
            let years = cli.years_or(&config.predictions.global_years)?;
            render(sealevel::predict_global(&years, scenario)?)
        }
        Commands::PredictCity { city } => {
            let years = cli.years_or(&config.predictions.city_years)?;
            render(sealevel::predict_city(city, &years, scenario)?)
        }
        Commands::PredictAny { city, lat, lon, elevation } => {
            let coordinates = Coordinates {
                lat: *lat,
                lon: *lon,
                elevation: *elevation,
            };
            let years = cli.years_or(&config.predictions.city_years)?;
            render(sealevel::predict_any_city(city, coordinates, &years, scenario)?)
        }
        Commands::Compare { cities, year } => {
            let names = params::parse_city_list(cities.as_slice())?;
            let year = year.unwrap_or(config.predictions.compare_year);
            render(sealevel::compare_cities(names.as_slice(), year, scenario)?)
        }
        Commands::Flood { city, rainfall, elevation, humidity } => render(risk::calculate_flood_risk(
            city,
            elevation.unwrap_or(defaults.default_elevation_m),
            rainfall.unwrap_or(defaults.default_rainfall_mm),
            humidity.unwrap_or(defaults.default_humidity),
        )),
        Commands::Landslide { city, rainfall, elevation, slope } => render(risk::calculate_landslide_risk(
            city,
            elevation.unwrap_or(defaults.default_landslide_elevation_m),
            rainfall.unwrap_or(defaults.default_rainfall_mm),
            *slope,
        )),
        Commands::Assess { city, rainfall, humidity, temperature, elevation } => {
            let humidity = humidity.unwrap_or(defaults.default_humidity);
            let weather = WeatherInput {
                rainfall: rainfall.unwrap_or_else(|| assessment::rainfall_proxy(humidity)),
                humidity,
                temperature: temperature.unwrap_or(defaults.default_temperature_c),
            };
            let elevation = elevation.unwrap_or(defaults.default_elevation_m);
            render(risk::assess_city_risk(city, elevation, weather))
        }
        Commands::Cities => render(cities::available_cities()),
        Commands::ModelInfo => render(sealevel::model_info()?),
    }
}

// ---------------------------------------------------------------------------
// Startup
// ---------------------------------------------------------------------------

fn init_logging(settings: &LoggingSettings) {
    logging::init_logger(
        settings.min_level(),
        settings.file.as_deref(),
        settings.console_timestamps,
    );
}

/// Loads the configuration under a default logger, then switches to the
/// configured one.
fn load_config() -> Result<ServiceConfig, ClimateError> {
    init_logging(&LoggingSettings::default());
    let config = ServiceConfig::load()?;
    init_logging(&config.logging);
    Ok(config)
}

fn fail(message: &str) -> ExitCode {
    logging::error(Component::System, None, message);
    match Envelope::error(message).to_json() {
        Ok(json) => println!("{}", json),
        Err(_) => println!("{{\"status\": \"error\", \"message\": {:?}}}", message),
    }
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => return fail(e.to_string().trim()),
    };

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => return fail(&e.to_string()),
    };

    match run(&cli, &config) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parse(items: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("climate_alert_service").chain(items.iter().copied()))
    }

    fn run_args(items: &[&str]) -> Result<Value, ClimateError> {
        let cli = parse(items).map_err(|e| ClimateError::invalid("args", &items.join(" "), &e.to_string()))?;
        let json = run(&cli, &ServiceConfig::default())?;
        Ok(serde_json::from_str(&json).unwrap())
    }

    // --- Parsing ------------------------------------------------------------

    #[test]
    fn test_global_options_before_or_after_subcommand() {
        let cli = parse(&["--scenario", "pessimistic", "compare", "Miami", "--year", "2100", "Tokyo"]).unwrap();
        assert_eq!(cli.scenario.as_deref(), Some("pessimistic"));
        match cli.command {
            Commands::Compare { cities, year } => {
                assert_eq!(cities, vec!["Miami", "Tokyo"]);
                assert_eq!(year, Some(2100));
            }
            other => panic!("expected compare, got {:?}", other),
        }

        let cli = parse(&["predict-city", "Miami", "--years=2030,2050"]).unwrap();
        assert_eq!(cli.years.as_deref(), Some("2030,2050"));
    }

    #[test]
    fn test_parse_rejects_unknown_option_and_dangling_flag() {
        assert!(parse(&["cities", "--colour", "red"]).is_err());
        assert!(parse(&["predict-city", "Miami", "--years"]).is_err());
        assert!(parse(&["--scenario", "moderate"]).is_err(), "no command given");
    }

    #[test]
    fn test_year_list_is_rejected_for_single_year() {
        assert!(parse(&["compare", "Miami", "--year", "2050,2100"]).is_err());
        assert!(parse(&["compare", "Miami", "--year", "soon"]).is_err());
    }

    #[test]
    fn test_negative_and_non_finite_coordinates() {
        let cli = parse(&["predict-any", "Denver", "39.7", "-104.9", "1609"]).unwrap();
        match cli.command {
            Commands::PredictAny { lon, elevation, .. } => {
                assert_eq!(lon, -104.9);
                assert_eq!(elevation, Some(1609.0));
            }
            other => panic!("expected predict-any, got {:?}", other),
        }
        assert!(parse(&["predict-any", "X", "NaN", "0"]).is_err());
        assert!(parse(&["flood", "Miami", "lots"]).is_err());
    }

    // --- Commands -----------------------------------------------------------

    #[test]
    fn test_predict_city_command() {
        let v = run_args(&["predict-city", "Miami", "--years", "2050"]).unwrap();
        assert_eq!(v["status"], "success");
        assert_eq!(v["data"]["city"], "Miami");
        assert_eq!(v["data"]["predictions"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_predict_global_uses_configured_years() {
        let v = run_args(&["predict-global"]).unwrap();
        let years: Vec<i64> = v["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["year"].as_i64().unwrap())
            .collect();
        assert_eq!(years, vec![2030, 2050, 2075, 2100]);
    }

    #[test]
    fn test_compare_without_cities_fails() {
        let err = run_args(&["compare"]).unwrap_err();
        assert!(err.to_string().contains("No cities provided"));
    }

    #[test]
    fn test_flood_defaults() {
        // 50mm, 50m, humidity 70, unknown city: 20 + 15 + 12 + 7
        let v = run_args(&["flood", "Nowhere"]).unwrap();
        assert_eq!(v["data"]["risk_score"], 54.0);
    }

    #[test]
    fn test_landslide_slope_option() {
        let v = run_args(&["landslide", "Seattle", "0", "10", "--slope", "50"]).unwrap();
        assert_eq!(v["data"]["factors"]["slope"], 40.0);
    }

    #[test]
    fn test_assess_proxies_rainfall_from_humidity() {
        let v = run_args(&["assess", "Tokyo"]).unwrap();
        assert_eq!(v["data"]["weather"]["rainfall"], 35.0);
        assert_eq!(v["data"]["weather"]["temperature"], 25.0);
    }

    #[test]
    fn test_unknown_command() {
        assert!(parse(&["forecast"]).is_err());
    }

    // --- Startup ------------------------------------------------------------

    #[test]
    fn test_logger_is_active_once_config_is_loaded() {
        let config = load_config().unwrap();
        assert_eq!(logging::current_level(), Some(config.logging.min_level()));
    }
}
