//! Plain gradient descent parameter update
//!
//! Performs `W' = W - lr * dW` and `b' = b - lr * db` for every layer,
//! returning a new parameter set and leaving the inputs untouched.

use tracing::trace;

use crate::error::{NetworkError, Result};
use crate::layers::LayerParameters;
use crate::parameters::Parameters;
use crate::propagation::Gradients;

/// Apply one gradient descent step.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use rust_feedforward::layers::LayerParameters;
/// use rust_feedforward::optimizers::update_parameters;
/// use rust_feedforward::propagation::{Gradients, LayerGradients};
/// use rust_feedforward::Parameters;
///
/// let params = Parameters::new(vec![
///     LayerParameters::new(array![[1.0, 2.0]], array![[3.0]]).unwrap(),
/// ]).unwrap();
/// let grads = Gradients::new(vec![LayerGradients {
///     dw: array![[0.1, 0.2]],
///     db: array![[0.3]],
/// }]);
///
/// let updated = update_parameters(&params, &grads, 0.1).unwrap();
/// assert!((updated.layers()[0].weights[[0, 0]] - 0.99).abs() < 1e-12);
/// assert!((updated.layers()[0].bias[[0, 0]] - 2.97).abs() < 1e-12);
/// ```
pub fn update_parameters(
    parameters: &Parameters,
    gradients: &Gradients,
    learning_rate: f64,
) -> Result<Parameters> {
    if parameters.num_layers() != gradients.num_layers() {
        return Err(NetworkError::LayerCountMismatch {
            parameters: parameters.num_layers(),
            gradients: gradients.num_layers(),
        });
    }

    let mut layers = Vec::with_capacity(parameters.num_layers());
    for (layer, grad) in parameters.iter().zip(gradients.iter()) {
        if layer.weights.dim() != grad.dw.dim() {
            return Err(NetworkError::shape_mismatch(
                "update_parameters (W, dW)",
                layer.weights.dim(),
                grad.dw.dim(),
            ));
        }
        if layer.bias.dim() != grad.db.dim() {
            return Err(NetworkError::shape_mismatch(
                "update_parameters (b, db)",
                layer.bias.dim(),
                grad.db.dim(),
            ));
        }
        layers.push(LayerParameters {
            weights: &layer.weights - &(&grad.dw * learning_rate),
            bias: &layer.bias - &(&grad.db * learning_rate),
        });
    }
    trace!(learning_rate, layers = layers.len(), "parameters updated");

    Parameters::new(layers)
}
