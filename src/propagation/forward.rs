//! Forward propagation
//!
//! `A_0 = X`; layers `1..L-1` apply linear + ReLU, layer `L` applies
//! linear + sigmoid.

use ndarray::Array2;
use tracing::trace;

use super::{Cache, ForwardResult};
use crate::error::{NetworkError, Result};
use crate::layers::{linear_forward, LayerParameters};
use crate::parameters::Parameters;
use crate::utils::activations::{activate, Activation};

/// One layer: linear op followed by `activation`.
pub fn activation_forward(
    a_prev: &Array2<f64>,
    layer: &LayerParameters,
    activation: Activation,
) -> Result<(Array2<f64>, Cache)> {
    let (z, linear) = linear_forward(a_prev, &layer.weights, &layer.bias)?;
    let (a, activation) = activate(&z, activation);
    Ok((a, Cache { linear, activation }))
}

/// Run the full forward pass of `x` (features × m) through `parameters`.
///
/// Returns `AL` with shape `(output units, m)` and exactly one cache per
/// layer, in forward order.
pub fn forward_propagation(x: &Array2<f64>, parameters: &Parameters) -> Result<ForwardResult> {
    let num_layers = parameters.num_layers();
    let mut caches = Vec::with_capacity(num_layers);
    let mut a = x.clone();

    for (index, layer) in parameters.iter().enumerate() {
        let activation = if index + 1 == num_layers {
            Activation::Sigmoid
        } else {
            Activation::Relu
        };
        let (next, cache) = activation_forward(&a, layer, activation)?;
        trace!(layer = index + 1, %activation, shape = ?next.dim(), "forward");
        caches.push(cache);
        a = next;
    }

    if caches.is_empty() {
        return Err(NetworkError::EmptyNetwork);
    }

    Ok(ForwardResult { al: a, caches })
}

/// Forward pass followed by a 0.5 threshold on the output activations.
pub fn predict(x: &Array2<f64>, parameters: &Parameters) -> Result<Array2<f64>> {
    let forward = forward_propagation(x, parameters)?;
    Ok(forward.al.mapv(|p| if p > 0.5 { 1.0 } else { 0.0 }))
}

/// Fraction of entries where `predictions` equals `y`.
pub fn accuracy(predictions: &Array2<f64>, y: &Array2<f64>) -> Result<f64> {
    if predictions.dim() != y.dim() {
        return Err(NetworkError::shape_mismatch("accuracy", predictions.dim(), y.dim()));
    }
    if predictions.is_empty() {
        return Ok(0.0);
    }
    let correct = predictions
        .iter()
        .zip(y.iter())
        .filter(|(p, t)| (*p - *t).abs() < 1e-9)
        .count();
    Ok(correct as f64 / predictions.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn zero_network(dims: &[usize]) -> Parameters {
        let layers = dims
            .windows(2)
            .map(|w| LayerParameters::zeros(w[0], w[1]))
            .collect();
        Parameters::new(layers).unwrap()
    }

    #[test]
    fn test_zero_network_predicts_half() {
        let params = zero_network(&[3, 4, 2]);
        let x = array![[1.0, -1.0], [2.0, 0.5], [0.0, 3.0]];

        let result = forward_propagation(&x, &params).unwrap();

        assert_eq!(result.al.dim(), (2, 2));
        assert!(result.al.iter().all(|&v| (v - 0.5).abs() < 1e-12));
        assert_eq!(result.caches.len(), 2);
        assert_eq!(result.caches[0].activation.activation, Activation::Relu);
        assert_eq!(result.caches[1].activation.activation, Activation::Sigmoid);
    }

    #[test]
    fn test_single_layer_is_sigmoid_output() {
        let params = zero_network(&[2, 1]);
        let result = forward_propagation(&array![[1.0], [1.0]], &params).unwrap();

        assert_eq!(result.caches.len(), 1);
        assert_eq!(result.caches[0].activation.activation, Activation::Sigmoid);
    }

    #[test]
    fn test_cache_holds_previous_activation() {
        let params = Parameters::new(vec![
            LayerParameters::new(array![[1.0], [-1.0]], array![[0.0], [0.0]]).unwrap(),
            LayerParameters::new(array![[1.0, 1.0]], array![[0.0]]).unwrap(),
        ])
        .unwrap();
        let x = array![[2.0]];

        let result = forward_propagation(&x, &params).unwrap();

        assert_eq!(result.caches[0].linear.a_prev, x);
        // ReLU zeroes the negative unit
        assert_eq!(result.caches[1].linear.a_prev, array![[2.0], [0.0]]);
        assert_eq!(result.caches[1].activation.z, array![[2.0]]);
    }

    #[test]
    fn test_predict_thresholds() {
        let params = Parameters::new(vec![
            LayerParameters::new(array![[10.0]], array![[-5.0]]).unwrap(),
        ])
        .unwrap();
        let predictions = predict(&array![[0.0, 1.0]], &params).unwrap();
        assert_eq!(predictions, array![[0.0, 1.0]]);
    }

    #[test]
    fn test_accuracy() {
        let acc = accuracy(&array![[1.0, 0.0, 1.0, 1.0]], &array![[1.0, 0.0, 0.0, 1.0]]).unwrap();
        assert!((acc - 0.75).abs() < 1e-12);
    }
}
