//! Dense (fully connected) layer parameters
//!
//! A dense layer is stored as the pair `(W, b)` used by the linear op:
//! `W` has shape `(output_size, input_size)` and `b` has shape
//! `(output_size, 1)`, so that examples are laid out as columns.

use ndarray::Array2;

use crate::error::{NetworkError, Result};
use crate::utils::SimpleRng;

/// Weights and bias of one dense layer.
///
/// # Example
///
/// ```
/// use rust_feedforward::layers::LayerParameters;
/// use rust_feedforward::utils::SimpleRng;
///
/// let mut rng = SimpleRng::new(42);
/// let layer = LayerParameters::he(3, 4, &mut rng);
/// assert_eq!(layer.weights.dim(), (4, 3));
/// assert_eq!(layer.bias.dim(), (4, 1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LayerParameters {
    pub weights: Array2<f64>,
    pub bias: Array2<f64>,
}

impl LayerParameters {
    /// Build a layer from explicit matrices. The bias must be a single
    /// column with one row per output unit.
    pub fn new(weights: Array2<f64>, bias: Array2<f64>) -> Result<Self> {
        if bias.ncols() != 1 || bias.nrows() != weights.nrows() {
            return Err(NetworkError::shape_mismatch(
                "LayerParameters::new (W, b)",
                weights.dim(),
                bias.dim(),
            ));
        }
        Ok(Self { weights, bias })
    }

    /// All-zero weights and bias.
    pub fn zeros(input_size: usize, output_size: usize) -> Self {
        Self {
            weights: Array2::zeros((output_size, input_size)),
            bias: Array2::zeros((output_size, 1)),
        }
    }

    /// He initialization: weights ~ N(0, 2 / input_size), zero bias.
    pub fn he(input_size: usize, output_size: usize, rng: &mut SimpleRng) -> Self {
        let scale = (2.0 / input_size.max(1) as f64).sqrt();
        let weights = Array2::from_shape_simple_fn((output_size, input_size), || {
            rng.next_gaussian() * scale
        });
        Self {
            weights,
            bias: Array2::zeros((output_size, 1)),
        }
    }

    /// Xavier initialization: weights uniform in [-limit, limit] with
    /// limit = sqrt(6 / (input_size + output_size)), zero bias.
    pub fn xavier(input_size: usize, output_size: usize, rng: &mut SimpleRng) -> Self {
        let limit = (6.0 / (input_size + output_size).max(1) as f64).sqrt();
        let weights = Array2::from_shape_simple_fn((output_size, input_size), || {
            rng.gen_range_f64(-limit, limit)
        });
        Self {
            weights,
            bias: Array2::zeros((output_size, 1)),
        }
    }

    /// Number of input features per example.
    pub fn input_size(&self) -> usize {
        self.weights.ncols()
    }

    /// Number of units in this layer.
    pub fn output_size(&self) -> usize {
        self.weights.nrows()
    }

    /// Total count of weights and biases.
    pub fn parameter_count(&self) -> usize {
        self.weights.len() + self.bias.len()
    }
}
