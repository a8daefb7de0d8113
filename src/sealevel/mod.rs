/// Sea-level projection for the climate alert service.
///
/// A degree-2 polynomial is fitted once to the historical series, scaled by
/// an emissions scenario for future years, and amplified per city.
///
/// Submodules:
/// - `history`    — the fixed 1900–2024 observation series.
/// - `regression` — least squares fits and training metrics.
/// - `scenario`   — scenario scaling, acceleration and uncertainty.
/// - `predictor`  — global, per-city and multi-city projections.

pub mod history;
pub mod predictor;
pub mod regression;
pub mod scenario;

use std::sync::OnceLock;

use crate::logging::{self, Component};
use crate::model::{
    CityPredictionResult, ClimateError, Comparison, Coordinates, GlobalPrediction, Scenario,
};
use history::{SeaLevelObservation, HISTORICAL_SERIES};
use regression::{FitMetrics, LinearFit, PolynomialCoefficients, QuadraticFit};

pub use predictor::{ModelInfo, SeaLevelPredictor};

// ---------------------------------------------------------------------------
// Fitted model
// ---------------------------------------------------------------------------

/// Both regressions fitted to `HISTORICAL_SERIES`. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedModel {
    pub linear: LinearFit,
    pub polynomial: QuadraticFit,
}

impl FittedModel {
    /// Base rise for `year` from the polynomial, mm above 1900.
    pub fn predict_base(&self, year: i32) -> f64 {
        self.polynomial.predict(year as f64)
    }

    pub fn predict_linear(&self, year: i32) -> f64 {
        self.linear.predict(year as f64)
    }

    pub fn coefficients(&self) -> PolynomialCoefficients {
        self.polynomial.coefficients()
    }

    pub fn metrics(&self) -> FitMetrics {
        FitMetrics::from_fits(&self.linear, &self.polynomial)
    }

    /// Fits both regressions to an arbitrary series.
    pub fn fit(points: &[SeaLevelObservation]) -> Result<FittedModel, ClimateError> {
        Ok(FittedModel {
            linear: regression::fit_linear(points)?,
            polynomial: regression::fit_quadratic(points)?,
        })
    }
}

/// Fits both models to the historical series.
///
/// Deterministic: the input is constant, so every call returns identical
/// coefficients.
pub fn train() -> Result<FittedModel, ClimateError> {
    let model = FittedModel::fit(HISTORICAL_SERIES).map_err(|e| {
        logging::error(Component::Fitter, None, &format!("training failed: {}", e));
        e
    })?;

    let m = model.metrics();
    logging::debug(
        Component::Fitter,
        None,
        &format!(
            "trained on {} points: poly r2 {} rmse {}, linear r2 {} rmse {}",
            HISTORICAL_SERIES.len(),
            m.poly_r2,
            m.poly_rmse,
            m.linear_r2,
            m.linear_rmse
        ),
    );
    Ok(model)
}

static FITTED: OnceLock<Result<FittedModel, ClimateError>> = OnceLock::new();

/// Process-wide model, trained on first use. Concurrent first callers block
/// until the single fit completes. A failed fit is cached too.
pub fn fitted_model() -> Result<&'static FittedModel, ClimateError> {
    FITTED.get_or_init(train).as_ref().map_err(Clone::clone)
}

// ---------------------------------------------------------------------------
// Shared-model entry points
// ---------------------------------------------------------------------------

pub fn predict_global(years: &[i32], scenario: Scenario) -> Result<Vec<GlobalPrediction>, ClimateError> {
    Ok(SeaLevelPredictor::shared()?.predict_global(years, scenario))
}

pub fn predict_city(name: &str, years: &[i32], scenario: Scenario) -> Result<CityPredictionResult, ClimateError> {
    Ok(SeaLevelPredictor::shared()?.predict_city(name, years, scenario))
}

pub fn predict_any_city(
    name: &str,
    coordinates: Coordinates,
    years: &[i32],
    scenario: Scenario,
) -> Result<CityPredictionResult, ClimateError> {
    Ok(SeaLevelPredictor::shared()?.predict_any_city(name, coordinates, years, scenario))
}

pub fn compare_cities<S: AsRef<str>>(
    names: &[S],
    year: i32,
    scenario: Scenario,
) -> Result<Vec<Comparison>, ClimateError> {
    Ok(SeaLevelPredictor::shared()?.compare_cities(names, year, scenario))
}

pub fn model_info() -> Result<ModelInfo, ClimateError> {
    Ok(SeaLevelPredictor::shared()?.model_info())
}
