/// Climate alert service core.
///
/// Sea-level projections from a quadratic fit of the historical record,
/// city-level flooding exposure, and flood/landslide hazard scoring.
///
/// Modules:
/// - `model`     — shared types and the crate error
/// - `cities`    — static city profiles and coordinate-based profiling
/// - `sealevel`  — curve fitting, scenario adjustment, predictions
/// - `risk`      — flood and landslide scoring, combined assessment
/// - `ingest`    — weather and elevation payload parsing
/// - `params`    — argument parsing for front ends
/// - `config`    — TOML configuration
/// - `report`    — JSON response envelope
/// - `logging`   — console/file logger

pub mod cities;
pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod params;
pub mod report;
pub mod risk;
pub mod sealevel;
