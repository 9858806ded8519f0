//! Cost functions
//!
//! Both costs average a per-example loss over the `m` example columns:
//!
//! - Quadratic: `C = 1/(2m) · Σ (a - y)²`, `∂ℓ/∂a = a - y`
//! - Cross-entropy: `C = -1/m · Σ [y·ln a + (1 - y)·ln(1 - a)]`,
//!   `∂ℓ/∂a = -(y/a - (1 - y)/(1 - a))`
//!
//! The derivative is per example (not divided by `m`); backpropagation
//! applies the `1/m` when it forms `dW` and `db`.

use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};

/// Predictions are clamped into `[CLIP, 1 - CLIP]` before taking logarithms.
const CLIP: f64 = 1e-12;

/// Selector for the cost being minimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostFunction {
    #[serde(rename = "quadratic")]
    Quadratic,
    #[serde(rename = "cross-entropy")]
    CrossEntropy,
}

impl CostFunction {
    pub fn name(&self) -> &'static str {
        match self {
            CostFunction::Quadratic => "quadratic",
            CostFunction::CrossEntropy => "cross-entropy",
        }
    }

    /// Scalar cost of predictions `al` against targets `y`.
    pub fn cost(&self, al: &Array2<f64>, y: &Array2<f64>) -> Result<f64> {
        check_shapes(self.name(), al, y)?;
        let m = al.ncols() as f64;
        let pairs = al.iter().zip(y.iter());
        let total: f64 = match self {
            CostFunction::Quadratic => pairs.map(|(&a, &y)| (a - y).powi(2)).sum(),
            CostFunction::CrossEntropy => pairs
                .map(|(&a, &y)| {
                    let a = a.clamp(CLIP, 1.0 - CLIP);
                    -(y * a.ln() + (1.0 - y) * (1.0 - a).ln())
                })
                .sum(),
        };
        Ok(match self {
            CostFunction::Quadratic => total / (2.0 * m),
            CostFunction::CrossEntropy => total / m,
        })
    }

    /// Derivative of the per-example loss with respect to `al`; seeds `dA_L`.
    pub fn derivative(&self, al: &Array2<f64>, y: &Array2<f64>) -> Result<Array2<f64>> {
        check_shapes(self.name(), al, y)?;
        let mut da = Array2::zeros(al.raw_dim());
        match self {
            CostFunction::Quadratic => {
                Zip::from(&mut da).and(al).and(y).for_each(|d, &a, &y| *d = a - y);
            }
            CostFunction::CrossEntropy => {
                Zip::from(&mut da).and(al).and(y).for_each(|d, &a, &y| {
                    let a = a.clamp(CLIP, 1.0 - CLIP);
                    *d = -(y / a - (1.0 - y) / (1.0 - a));
                });
            }
        }
        Ok(da)
    }
}

impl fmt::Display for CostFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CostFunction {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "quadratic" => Ok(CostFunction::Quadratic),
            "cross-entropy" => Ok(CostFunction::CrossEntropy),
            _ => Err(NetworkError::UnsupportedCostFunction(s.to_string())),
        }
    }
}

fn check_shapes(operation: &'static str, al: &Array2<f64>, y: &Array2<f64>) -> Result<()> {
    if al.dim() != y.dim() {
        return Err(NetworkError::shape_mismatch(operation, al.dim(), y.dim()));
    }
    Ok(())
}
