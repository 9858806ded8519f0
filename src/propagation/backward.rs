//! Backward propagation
//!
//! Seeds `dA_L` with the cost derivative and walks the caches from the
//! output layer back to the first hidden layer. Each step differentiates the
//! activation recorded in its cache (sigmoid at the output, ReLU below) and
//! then the linear op, handing `dA_prev` to the next shallower layer.

use ndarray::Array2;
use tracing::trace;

use super::{ForwardResult, Gradients, LayerGradients};
use crate::cost::CostFunction;
use crate::error::{NetworkError, Result};
use crate::layers::linear_backward;
use crate::utils::activations::activation_backward;

/// Compute gradients for every layer from a forward pass and the targets `y`.
pub fn back_propagation(
    cost_function: CostFunction,
    forward: &ForwardResult,
    y: &Array2<f64>,
) -> Result<Gradients> {
    if forward.caches.is_empty() {
        return Err(NetworkError::EmptyNetwork);
    }
    let m = forward.num_examples();
    let mut da = cost_function.derivative(&forward.al, y)?;
    let mut layers = Vec::with_capacity(forward.caches.len());

    for (index, cache) in forward.caches.iter().enumerate().rev() {
        let dz = activation_backward(&da, &cache.activation)?;
        let grads = linear_backward(&dz, &cache.linear, m)?;
        trace!(layer = index + 1, dw = ?grads.dw.dim(), "backward");
        layers.push(LayerGradients {
            dw: grads.dw,
            db: grads.db,
        });
        da = grads.da_prev;
    }

    layers.reverse();
    Ok(Gradients::new(layers))
}
