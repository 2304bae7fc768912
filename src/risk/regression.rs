use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::FlightRiskError;

/// Ordinary least squares with an intercept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    /// Effective rank of the centered design matrix.
    pub rank: usize,
}

impl LinearRegression {
    /// Fit `y ~ intercept + x * coefficients`.
    ///
    /// The intercept is handled by centering both sides. The centered system
    /// is solved through the SVD pseudo-inverse, so a rank-deficient design
    /// gets the minimum-norm solution; a column with no variance gets a zero
    /// coefficient.
    pub fn fit(x: &DMatrix<f64>, y: &DVector<f64>) -> Result<Self, FlightRiskError> {
        let (rows, cols) = x.shape();
        if rows < 2 {
            return Err(FlightRiskError::Computation(format!(
                "At least 2 records are needed to fit the risk model, got {}",
                rows
            )));
        }
        if y.len() != rows {
            return Err(FlightRiskError::Internal(format!(
                "Design matrix has {} rows but target has {}",
                rows,
                y.len()
            )));
        }
        if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
            return Err(FlightRiskError::Computation(
                "Model inputs contain non-finite values".into(),
            ));
        }

        let n = rows as f64;
        let x_mean: Vec<f64> = (0..cols).map(|j| x.column(j).sum() / n).collect();
        let y_mean = y.sum() / n;

        let varying: Vec<usize> = (0..cols)
            .filter(|&j| x.column(j).iter().any(|&v| v - x_mean[j] != 0.0))
            .collect();

        let mut coefficients = vec![0.0; cols];
        let mut rank = 0;

        if !varying.is_empty() {
            let centered = DMatrix::from_fn(rows, varying.len(), |i, c| {
                let j = varying[c];
                x[(i, j)] - x_mean[j]
            });
            let target = DVector::from_fn(rows, |i, _| y[i] - y_mean);

            let svd = centered.svd(true, true);
            let largest = svd.singular_values.max();
            let eps = largest * rows.max(varying.len()) as f64 * f64::EPSILON;
            rank = svd.singular_values.iter().filter(|&&s| s > eps).count();

            let solution = svd
                .solve(&target, eps)
                .map_err(|e| FlightRiskError::Computation(format!("Least squares solve failed: {}", e)))?;
            if solution.iter().any(|v| !v.is_finite()) {
                return Err(FlightRiskError::Computation(
                    "Least squares solve produced non-finite coefficients".into(),
                ));
            }
            for (c, &j) in varying.iter().enumerate() {
                coefficients[j] = solution[c];
            }
        }

        if rank < cols {
            warn!(rank, columns = cols, rows, "Design matrix is rank deficient, using minimum-norm fit");
        }

        let offset: f64 = x_mean.iter().zip(&coefficients).map(|(m, c)| m * c).sum();
        let intercept = y_mean - offset;
        debug!(intercept, ?coefficients, rank, "Fitted linear regression");

        Ok(Self { intercept, coefficients, rank })
    }

    pub fn predict(&self, features: &[f64]) -> Result<f64, FlightRiskError> {
        if features.len() != self.coefficients.len() {
            return Err(FlightRiskError::Internal(format!(
                "Expected {} features, got {}",
                self.coefficients.len(),
                features.len()
            )));
        }
        let dot: f64 = features.iter().zip(&self.coefficients).map(|(x, c)| x * c).sum();
        Ok(self.intercept + dot)
    }
}
