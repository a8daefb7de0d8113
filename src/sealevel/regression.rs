/// Ordinary least squares fits of sea level against year.
///
/// Two models are fitted over the same points: a linear baseline
/// `y = intercept + slope * year` and a degree-2 polynomial
/// `y = intercept + b1 * year + b2 * year²`. The polynomial drives
/// predictions; the linear fit is reported for comparison.
///
/// Years are centred on their mean before fitting. The OLS solution is
/// unchanged by the shift, but the normal equations stay well conditioned
/// (raw year⁴ sums are ~10¹⁴).

use crate::model::{round_to, ClimateError};
use crate::sealevel::history::SeaLevelObservation;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Goodness of fit
// ---------------------------------------------------------------------------

fn r_squared(observed: &[f64], predicted: &[f64]) -> f64 {
    let n = observed.len() as f64;
    let mean = observed.iter().sum::<f64>() / n;
    let ss_tot: f64 = observed.iter().map(|y| (y - mean).powi(2)).sum();
    let ss_res: f64 = observed
        .iter()
        .zip(predicted)
        .map(|(y, p)| (y - p).powi(2))
        .sum();

    if ss_tot > 1e-10 { 1.0 - ss_res / ss_tot } else { 1.0 }
}

/// Root of the mean squared residual (population form, divides by n).
fn rmse(observed: &[f64], predicted: &[f64]) -> f64 {
    let n = observed.len() as f64;
    let mse: f64 = observed
        .iter()
        .zip(predicted)
        .map(|(y, p)| (y - p).powi(2))
        .sum::<f64>()
        / n;
    mse.sqrt()
}

// ---------------------------------------------------------------------------
// Linear fit
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// mm per year.
    pub slope: f64,
    /// Value at year 0.
    pub intercept: f64,
    pub r_squared: f64,
    pub rmse: f64,
}

impl LinearFit {
    pub fn predict(&self, year: f64) -> f64 {
        self.intercept + self.slope * year
    }
}

pub fn fit_linear(points: &[SeaLevelObservation]) -> Result<LinearFit, ClimateError> {
    if points.len() < 2 {
        return Err(ClimateError::NumericalError(format!(
            "linear fit needs at least 2 points, got {}",
            points.len()
        )));
    }

    let n = points.len() as f64;
    let center = points.iter().map(|p| p.year as f64).sum::<f64>() / n;

    let (mut sum_t, mut sum_y, mut sum_t2, mut sum_ty) = (0.0, 0.0, 0.0, 0.0);
    for p in points {
        let t = p.year as f64 - center;
        sum_t += t;
        sum_y += p.level_mm;
        sum_t2 += t * t;
        sum_ty += t * p.level_mm;
    }

    let denominator = n * sum_t2 - sum_t * sum_t;
    if denominator.abs() < 1e-10 {
        return Err(ClimateError::NumericalError(
            "singular matrix in linear regression".to_string(),
        ));
    }

    let slope = (n * sum_ty - sum_t * sum_y) / denominator;
    let centred_intercept = (sum_y - slope * sum_t) / n;

    let mut fit = LinearFit {
        slope,
        intercept: centred_intercept - slope * center,
        r_squared: 0.0,
        rmse: 0.0,
    };

    let observed: Vec<f64> = points.iter().map(|p| p.level_mm).collect();
    let predicted: Vec<f64> = points.iter().map(|p| fit.predict(p.year as f64)).collect();
    fit.r_squared = r_squared(&observed, &predicted);
    fit.rmse = rmse(&observed, &predicted);

    Ok(fit)
}

// ---------------------------------------------------------------------------
// Quadratic fit
// ---------------------------------------------------------------------------

/// Coefficients of the polynomial in raw years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolynomialCoefficients {
    pub year: f64,
    pub year_squared: f64,
    pub intercept: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticFit {
    /// Mean training year; `coefficients_centred` are in `year - center`.
    center: f64,
    coefficients_centred: [f64; 3],
    pub r_squared: f64,
    pub rmse: f64,
}

impl QuadraticFit {
    pub fn predict(&self, year: f64) -> f64 {
        let t = year - self.center;
        let [c0, c1, c2] = self.coefficients_centred;
        c0 + c1 * t + c2 * t * t
    }

    /// Expands the centred polynomial back to raw-year coefficients.
    pub fn coefficients(&self) -> PolynomialCoefficients {
        let m = self.center;
        let [c0, c1, c2] = self.coefficients_centred;
        PolynomialCoefficients {
            year: c1 - 2.0 * c2 * m,
            year_squared: c2,
            intercept: c0 - c1 * m + c2 * m * m,
        }
    }
}

/// Solves a 3x3 system by Gaussian elimination with partial pivoting.
fn solve3(mut a: [[f64; 3]; 3], mut b: [f64; 3]) -> Result<[f64; 3], ClimateError> {
    for col in 0..3 {
        let pivot = (col..3)
            .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
            .unwrap_or(col);
        if a[pivot][col].abs() < 1e-12 {
            return Err(ClimateError::NumericalError(
                "singular matrix in polynomial regression".to_string(),
            ));
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..3 {
            let f = a[row][col] / a[col][col];
            for k in col..3 {
                a[row][k] -= f * a[col][k];
            }
            b[row] -= f * b[col];
        }
    }

    let mut x = [0.0; 3];
    for row in (0..3).rev() {
        let tail: f64 = (row + 1..3).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }
    Ok(x)
}

pub fn fit_quadratic(points: &[SeaLevelObservation]) -> Result<QuadraticFit, ClimateError> {
    if points.len() < 3 {
        return Err(ClimateError::NumericalError(format!(
            "quadratic fit needs at least 3 points, got {}",
            points.len()
        )));
    }

    let n = points.len() as f64;
    let center = points.iter().map(|p| p.year as f64).sum::<f64>() / n;

    // Power sums of t and moment sums of y.
    let mut s = [0.0f64; 5];
    let mut m = [0.0f64; 3];
    for p in points {
        let t = p.year as f64 - center;
        let mut tk = 1.0;
        for (k, sk) in s.iter_mut().enumerate() {
            *sk += tk;
            if k < 3 {
                m[k] += tk * p.level_mm;
            }
            tk *= t;
        }
    }

    let normal = [
        [s[0], s[1], s[2]],
        [s[1], s[2], s[3]],
        [s[2], s[3], s[4]],
    ];
    let coefficients_centred = solve3(normal, m)?;

    let mut fit = QuadraticFit {
        center,
        coefficients_centred,
        r_squared: 0.0,
        rmse: 0.0,
    };

    let observed: Vec<f64> = points.iter().map(|p| p.level_mm).collect();
    let predicted: Vec<f64> = points.iter().map(|p| fit.predict(p.year as f64)).collect();
    fit.r_squared = r_squared(&observed, &predicted);
    fit.rmse = rmse(&observed, &predicted);

    Ok(fit)
}

// ---------------------------------------------------------------------------
// Reported metrics
// ---------------------------------------------------------------------------

/// Training metrics, rounded for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitMetrics {
    pub linear_r2: f64,
    pub poly_r2: f64,
    pub linear_rmse: f64,
    pub poly_rmse: f64,
}

impl FitMetrics {
    pub fn from_fits(linear: &LinearFit, poly: &QuadraticFit) -> Self {
        FitMetrics {
            linear_r2: round_to(linear.r_squared, 4),
            poly_r2: round_to(poly.r_squared, 4),
            linear_rmse: round_to(linear.rmse, 2),
            poly_rmse: round_to(poly.rmse, 2),
        }
    }
}
