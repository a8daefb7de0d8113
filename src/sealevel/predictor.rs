/// Global, per-city and multi-city sea-level projections.

use serde::Serialize;

use crate::cities::{self, elevation_risk_multiplier};
use crate::logging::{self, Component};
use crate::model::{
    round_to, CityPredictionResult, ClimateError, Comparison, Coordinates, GlobalPrediction, Prediction, Scenario,
    Vulnerability,
};
use crate::sealevel::regression::{FitMetrics, PolynomialCoefficients};
use crate::sealevel::{fitted_model, history, scenario, FittedModel};

/// Cities farther than this from the coast (km) have their flooding risk
/// halved on the coordinate path.
const INLAND_HALVING_DISTANCE_KM: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    pub model_type: &'static str,
    pub training_data_points: usize,
    pub training_period: String,
    pub metrics: FitMetrics,
    pub coefficients: PolynomialCoefficients,
    pub available_cities: usize,
}

/// Projection entry point bound to one fitted model.
#[derive(Debug, Clone, Copy)]
pub struct SeaLevelPredictor<'m> {
    model: &'m FittedModel,
}

impl SeaLevelPredictor<'static> {
    /// Predictor over the process-wide model, training it if needed.
    pub fn shared() -> Result<Self, ClimateError> {
        Ok(SeaLevelPredictor {
            model: fitted_model()?,
        })
    }
}

/// Profile values that feed the local projection, from either lookup path.
struct LocalProfile {
    factor: f64,
    elevation: f64,
    vulnerability: Vulnerability,
    coastal_distance: Option<f64>,
}

impl<'m> SeaLevelPredictor<'m> {
    pub fn with_model(model: &'m FittedModel) -> Self {
        SeaLevelPredictor { model }
    }

    pub fn model(&self) -> &'m FittedModel {
        self.model
    }

    /// Global projection per year, unrounded.
    fn global_raw(&self, year: i32, scenario: Scenario) -> scenario::Adjusted {
        scenario::adjust(self.model.predict_base(year), year, scenario)
    }

    /// Global rise in mm above 1900 for each year, with uncertainty bands.
    pub fn predict_global(&self, years: &[i32], scenario: Scenario) -> Vec<GlobalPrediction> {
        years
            .iter()
            .map(|&year| {
                let a = self.global_raw(year, scenario);
                GlobalPrediction {
                    year,
                    prediction: round_to(a.value, 2),
                    lower_bound: round_to(a.lower_bound(), 2),
                    upper_bound: round_to(a.upper_bound(), 2),
                    uncertainty: round_to(a.uncertainty, 2),
                }
            })
            .collect()
    }

    fn local_predictions(&self, profile: &LocalProfile, years: &[i32], scenario: Scenario) -> Vec<Prediction> {
        // NOTE: compounds with `profile.factor`, which already reflects
        // elevation for registry cities. Published figures include both.
        let ladder = elevation_risk_multiplier(profile.elevation);

        years
            .iter()
            .map(|&year| {
                let global = self.global_raw(year, scenario);
                // Local figures are derived from the published (rounded)
                // global rise.
                let global_rise = round_to(global.value, 2);
                let adjusted_rise = global_rise * profile.factor * ladder;

                let mut flooding_risk = if profile.elevation > 0.0 {
                    (adjusted_rise / (profile.elevation * 1000.0) * 100.0).min(100.0)
                } else {
                    // At or below sea level: no meaningful ratio to elevation.
                    (80.0 + adjusted_rise / 10.0).min(100.0)
                };
                if profile
                    .coastal_distance
                    .is_some_and(|d| d > INLAND_HALVING_DISTANCE_KM)
                {
                    flooding_risk *= 0.5;
                }
                let impact = (flooding_risk * 0.4).min(50.0);

                Prediction {
                    year,
                    global_rise,
                    local_rise: round_to(adjusted_rise, 2),
                    elevation: profile.elevation,
                    flooding_risk: round_to(flooding_risk, 2),
                    impact_percentage: round_to(impact, 2),
                    vulnerability: profile.vulnerability,
                    lower_bound: Some(round_to(adjusted_rise - global.uncertainty, 2)),
                    upper_bound: Some(round_to(adjusted_rise + global.uncertainty, 2)),
                    coastal_distance: profile.coastal_distance.map(|d| round_to(d, 2)),
                }
            })
            .collect()
    }

    /// Projection for a named city. Unknown names use the default profile.
    pub fn predict_city(&self, name: &str, years: &[i32], scenario: Scenario) -> CityPredictionResult {
        let city = cities::profile_or_default(name);
        let profile = LocalProfile {
            factor: city.amplification_factor,
            elevation: city.elevation_m,
            vulnerability: city.vulnerability,
            coastal_distance: None,
        };

        CityPredictionResult {
            city: name.to_string(),
            coordinates: None,
            predictions: self.local_predictions(&profile, years, scenario),
            city_factor: profile.factor,
            elevation: profile.elevation,
            vulnerability: profile.vulnerability,
            coastal_distance: None,
        }
    }

    /// Projection for an arbitrary point, profiled from its coordinates.
    pub fn predict_any_city(
        &self,
        name: &str,
        coordinates: Coordinates,
        years: &[i32],
        scenario: Scenario,
    ) -> CityPredictionResult {
        let elevation = coordinates.elevation_or_default();
        let derived = cities::profile_from_coordinates(coordinates.lat, coordinates.lon, elevation);
        let profile = LocalProfile {
            factor: derived.amplification_factor,
            elevation,
            vulnerability: derived.vulnerability,
            coastal_distance: Some(derived.coastal_distance_km),
        };

        CityPredictionResult {
            city: name.to_string(),
            coordinates: Some(coordinates),
            predictions: self.local_predictions(&profile, years, scenario),
            city_factor: round_to(profile.factor, 2),
            elevation,
            vulnerability: profile.vulnerability,
            coastal_distance: Some(round_to(derived.coastal_distance_km, 2)),
        }
    }

    /// Ranks registered cities by flooding risk in `year`, highest first.
    ///
    /// Names missing from the registry are dropped. Ties keep input order.
    pub fn compare_cities<S: AsRef<str>>(&self, names: &[S], year: i32, scenario: Scenario) -> Vec<Comparison> {
        let mut comparisons: Vec<Comparison> = names
            .iter()
            .map(|name| name.as_ref())
            .filter(|name| cities::find_city(name).is_some())
            .filter_map(|name| {
                let result = self.predict_city(name, &[year], scenario);
                let pred = result.predictions.into_iter().next()?;
                Some(Comparison {
                    city: result.city,
                    local_rise: pred.local_rise,
                    flooding_risk: pred.flooding_risk,
                    vulnerability: pred.vulnerability,
                    elevation: result.elevation,
                })
            })
            .collect();

        comparisons.sort_by(|a, b| b.flooding_risk.total_cmp(&a.flooding_risk));

        logging::log_batch_summary(
            Component::Predictor,
            names.len(),
            comparisons.len(),
            names.len() - comparisons.len(),
        );
        comparisons
    }

    pub fn model_info(&self) -> ModelInfo {
        ModelInfo {
            model_type: "Polynomial Regression (degree 2)",
            training_data_points: history::HISTORICAL_SERIES.len(),
            training_period: history::training_period(),
            metrics: self.model.metrics(),
            coefficients: self.model.coefficients(),
            available_cities: cities::CITY_REGISTRY.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    fn predictor() -> SeaLevelPredictor<'static> {
        SeaLevelPredictor::shared().expect("historical series should fit")
    }

    // --- Global -------------------------------------------------------------

    #[test]
    fn test_global_moderate_reference_values() {
        let preds = predictor().predict_global(&[2030, 2050, 2100], Scenario::Moderate);
        assert_eq!(preds.len(), 3);
        assert!(close(preds[0].prediction, 336.11, 0.01), "2030: {}", preds[0].prediction);
        assert!(close(preds[1].prediction, 456.65, 0.01), "2050: {}", preds[1].prediction);
        assert!(close(preds[2].prediction, 847.39, 0.01), "2100: {}", preds[2].prediction);
        assert_eq!(preds[0].uncertainty, 8.0);
        assert_eq!(preds[1].uncertainty, 18.0);
        assert_eq!(preds[2].uncertainty, 43.0);
    }

    #[test]
    fn test_global_preserves_input_order_and_duplicates() {
        let preds = predictor().predict_global(&[2100, 2030, 2030], Scenario::Moderate);
        let years: Vec<_> = preds.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2100, 2030, 2030]);
    }

    #[test]
    fn test_global_empty_years() {
        assert!(predictor().predict_global(&[], Scenario::Moderate).is_empty());
    }

    // --- Named cities -------------------------------------------------------

    #[test]
    fn test_miami_2050_moderate() {
        let r = predictor().predict_city("Miami", &[2050], Scenario::Moderate);
        let p = &r.predictions[0];
        // 456.65 * 1.8 (factor) * 1.5 (elevation ladder)
        assert!(close(p.local_rise, 1232.95, 0.01), "local rise {}", p.local_rise);
        assert!(close(p.flooding_risk, 61.65, 0.01), "flooding {}", p.flooding_risk);
        assert!(close(p.impact_percentage, 24.66, 0.01), "impact {}", p.impact_percentage);
        assert_eq!(p.vulnerability, Vulnerability::Critical);
        assert_eq!(r.city_factor, 1.8);
        assert_eq!(r.elevation, 2.0);
    }

    #[test]
    fn test_local_rise_uses_rounded_global_rise() {
        // Global 263.2935 publishes as 263.29; 263.29 * 1.8 * 1.5 = 710.883.
        // Amplifying the unrounded value would give 710.89.
        let r = predictor().predict_city("Miami", &[2025], Scenario::Optimistic);
        let p = &r.predictions[0];
        assert_eq!(p.global_rise, 263.29);
        assert_eq!(p.local_rise, 710.88);
        assert_eq!(p.flooding_risk, 35.54);
        assert_eq!(p.lower_bound, Some(705.38));
        assert_eq!(p.upper_bound, Some(716.38));
    }

    #[test]
    fn test_city_bounds_use_global_uncertainty() {
        let r = predictor().predict_city("Tokyo", &[2050], Scenario::Moderate);
        let p = &r.predictions[0];
        let lower = p.lower_bound.unwrap();
        let upper = p.upper_bound.unwrap();
        assert!(close(upper - lower, 36.0, 0.02));
        assert!(close((upper + lower) / 2.0, p.local_rise, 0.01));
    }

    #[test]
    fn test_below_sea_level_city_never_divides_by_elevation() {
        let r = predictor().predict_city("Amsterdam", &[1900, 2050], Scenario::Moderate);
        // 1900: 5.9532 * 1.6 * 1.5 = 14.29 -> 80 + 1.43
        assert!(close(r.predictions[0].flooding_risk, 81.43, 0.01));
        assert_eq!(r.predictions[1].flooding_risk, 100.0);
        assert_eq!(r.predictions[1].impact_percentage, 40.0);
        assert!(r.predictions.iter().all(|p| p.flooding_risk.is_finite()));
    }

    #[test]
    fn test_unknown_city_uses_default_profile() {
        let r = predictor().predict_city("Atlantis", &[2050], Scenario::Moderate);
        assert_eq!(r.city, "Atlantis");
        assert_eq!(r.city_factor, 1.0);
        assert_eq!(r.elevation, 50.0);
        assert_eq!(r.vulnerability, Vulnerability::Moderate);
        // 456.65 * 1.0 * 0.8 / 50000 * 100
        assert!(close(r.predictions[0].flooding_risk, 0.73, 0.01));
    }

    #[test]
    fn test_impact_capped_at_fifty() {
        let r = predictor().predict_city("Venice", &[2100], Scenario::Pessimistic);
        assert_eq!(r.predictions[0].flooding_risk, 100.0);
        assert_eq!(r.predictions[0].impact_percentage, 40.0);
        assert!(r.predictions[0].impact_percentage <= 50.0);
    }

    // --- Coordinates --------------------------------------------------------

    #[test]
    fn test_any_city_inland_risk_is_halved() {
        // Denver-like point, low elevation so the first rung applies.
        let coords = Coordinates { lat: 39.7, lon: -104.9, elevation: Some(4.0) };
        let r = predictor().predict_any_city("Lowland", coords, &[2050], Scenario::Moderate);
        assert_eq!(r.coastal_distance, Some(200.0));
        assert_eq!(r.vulnerability, Vulnerability::Critical);

        let global: f64 = 456.6466;
        let rise = global * 1.8 * 1.5;
        let expected = (rise / 4000.0 * 100.0).min(100.0) * 0.5;
        assert!(close(r.predictions[0].flooding_risk, expected, 0.01));
    }

    #[test]
    fn test_any_city_coastal_risk_not_halved() {
        let coords = Coordinates { lat: 40.7, lon: -74.0, elevation: Some(10.0) };
        let r = predictor().predict_any_city("Coastal", coords, &[2050], Scenario::Moderate);
        assert_eq!(r.coastal_distance, Some(5.0));
        let rise = 456.6466 * 1.8 * 1.2;
        assert!(close(r.predictions[0].flooding_risk, rise / 10000.0 * 100.0, 0.01));
        assert_eq!(r.predictions[0].coastal_distance, Some(5.0));
    }

    #[test]
    fn test_any_city_missing_elevation_defaults_to_fifty() {
        let coords = Coordinates { lat: 48.9, lon: 2.3, elevation: None };
        let r = predictor().predict_any_city("Paris", coords, &[2030], Scenario::Moderate);
        assert_eq!(r.elevation, 50.0);
        assert_eq!(r.coordinates, Some(coords));
    }

    // --- Comparison ---------------------------------------------------------

    #[test]
    fn test_compare_drops_unknown_and_sorts_descending() {
        let rows = predictor().compare_cities(&["Miami", "Venice", "UnknownCity"], 2050, Scenario::Moderate);
        let names: Vec<_> = rows.iter().map(|r| r.city.as_str()).collect();
        assert_eq!(names, vec!["Venice", "Miami"]);
        assert!(rows.windows(2).all(|w| w[0].flooding_risk >= w[1].flooding_risk));
    }

    #[test]
    fn test_compare_ties_keep_input_order() {
        // Venice and Amsterdam both clip to 100 in 2050.
        let rows = predictor().compare_cities(&["Amsterdam", "Venice"], 2050, Scenario::Moderate);
        let names: Vec<_> = rows.iter().map(|r| r.city.as_str()).collect();
        assert_eq!(names, vec!["Amsterdam", "Venice"]);
    }

    #[test]
    fn test_compare_all_unknown_is_empty() {
        let rows = predictor().compare_cities(&["Nowhere".to_string()], 2050, Scenario::Moderate);
        assert!(rows.is_empty());
    }

    // --- Model info ---------------------------------------------------------

    #[test]
    fn test_model_info() {
        let info = predictor().model_info();
        assert_eq!(info.training_data_points, 19);
        assert_eq!(info.training_period, "1900-2024");
        assert_eq!(info.available_cities, cities::CITY_REGISTRY.len());
        assert_eq!(info.metrics.poly_r2, 0.9982);
    }
}
