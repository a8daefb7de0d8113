/// Scenario scaling and uncertainty for projected years.

use crate::model::{Scenario, BASELINE_YEAR};

/// Sea-level rise is accelerating; this is the per-year² coefficient applied
/// to `years_from_now^1.5`.
const ACCELERATION_MM: f64 = 0.08;

/// Half-width of the uncertainty band at the baseline year, mm.
const BASE_UNCERTAINTY_MM: f64 = 5.0;

/// Growth of the uncertainty band per year from the baseline, mm.
const UNCERTAINTY_GROWTH_MM: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjusted {
    pub value: f64,
    pub uncertainty: f64,
}

impl Adjusted {
    pub fn lower_bound(&self) -> f64 {
        self.value - self.uncertainty
    }

    pub fn upper_bound(&self) -> f64 {
        self.value + self.uncertainty
    }
}

/// Applies the scenario to a base prediction for `year`.
///
/// Years up to and including the baseline are returned unscaled. The
/// uncertainty has no floor, so it is below 5 mm (and eventually negative)
/// for past years.
pub fn adjust(base: f64, year: i32, scenario: Scenario) -> Adjusted {
    let years_from_now = (year - BASELINE_YEAR) as f64;
    let multiplier = scenario.multiplier();

    let value = if years_from_now > 0.0 {
        let acceleration = years_from_now.powf(1.5) * ACCELERATION_MM * multiplier;
        base * multiplier + acceleration
    } else {
        base
    };

    Adjusted {
        value,
        uncertainty: BASE_UNCERTAINTY_MM + years_from_now * UNCERTAINTY_GROWTH_MM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Scenario; 3] = [Scenario::Optimistic, Scenario::Moderate, Scenario::Pessimistic];

    #[test]
    fn test_baseline_year_is_unscaled_with_five_mm_band() {
        for s in ALL {
            let a = adjust(300.0, 2024, s);
            assert_eq!(a.value, 300.0, "{} should not scale the baseline year", s);
            assert_eq!(a.uncertainty, 5.0);
        }
    }

    #[test]
    fn test_past_years_bypass_scenario() {
        let a = adjust(120.0, 1980, Scenario::Pessimistic);
        assert_eq!(a.value, 120.0);
    }

    #[test]
    fn test_uncertainty_goes_negative_for_distant_past() {
        // 5 + (1900 - 2024) * 0.5 = -57
        let a = adjust(0.0, 1900, Scenario::Moderate);
        assert_eq!(a.uncertainty, -57.0);
        assert!(a.lower_bound() > a.upper_bound());
    }

    #[test]
    fn test_future_year_formula() {
        // 2049: years_from_now = 25, 25^1.5 = 125
        let a = adjust(400.0, 2049, Scenario::Pessimistic);
        let expected = 400.0 * 1.35 + 125.0 * 0.08 * 1.35;
        assert!((a.value - expected).abs() < 1e-9);
        assert_eq!(a.uncertainty, 17.5);
        assert_eq!(a.lower_bound(), a.value - 17.5);
        assert_eq!(a.upper_bound(), a.value + 17.5);
    }

    #[test]
    fn test_scenario_ordering_for_future_years() {
        for year in [2025, 2030, 2050, 2100, 2300] {
            let opt = adjust(350.0, year, Scenario::Optimistic).value;
            let mid = adjust(350.0, year, Scenario::Moderate).value;
            let pes = adjust(350.0, year, Scenario::Pessimistic).value;
            assert!(opt <= mid && mid <= pes, "ordering broken for {}", year);
        }
    }
}
