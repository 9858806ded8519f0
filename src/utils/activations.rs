//! Activation functions for neural networks
//!
//! This module provides the two activations the network supports:
//! - ReLU for every hidden layer
//! - Sigmoid for the output layer
//!
//! Each forward function returns the activated matrix together with an
//! [`ActivationCache`] holding the pre-activation `Z`, which is all the
//! matching backward function needs.

use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, Zip};
use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};

/// Elementwise nonlinearity applied after a layer's linear op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Relu,
    Sigmoid,
}

impl Activation {
    pub fn name(&self) -> &'static str {
        match self {
            Activation::Relu => "relu",
            Activation::Sigmoid => "sigmoid",
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Activation {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "relu" => Ok(Activation::Relu),
            "sigmoid" => Ok(Activation::Sigmoid),
            _ => Err(NetworkError::UnsupportedActivation(s.to_string())),
        }
    }
}

/// State kept from the forward pass to differentiate the activation later.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationCache {
    pub activation: Activation,
    /// Pre-activation input `Z`
    pub z: Array2<f64>,
}

/// Sigmoid of a scalar: 1 / (1 + exp(-x))
pub fn sigmoid_scalar(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid applied elementwise, returning `A` and the cache of `Z`.
pub fn sigmoid(z: &Array2<f64>) -> (Array2<f64>, ActivationCache) {
    let a = z.mapv(sigmoid_scalar);
    let cache = ActivationCache {
        activation: Activation::Sigmoid,
        z: z.clone(),
    };
    (a, cache)
}

/// ReLU applied elementwise, returning `A` and the cache of `Z`.
pub fn relu(z: &Array2<f64>) -> (Array2<f64>, ActivationCache) {
    let a = z.mapv(|v| v.max(0.0));
    let cache = ActivationCache {
        activation: Activation::Relu,
        z: z.clone(),
    };
    (a, cache)
}

/// Apply `activation` elementwise to `z`.
pub fn activate(z: &Array2<f64>, activation: Activation) -> (Array2<f64>, ActivationCache) {
    match activation {
        Activation::Relu => relu(z),
        Activation::Sigmoid => sigmoid(z),
    }
}

/// dZ = dA * s * (1 - s) where s = sigmoid(Z).
pub fn sigmoid_backward(da: &Array2<f64>, z: &Array2<f64>) -> Result<Array2<f64>> {
    check_same_shape("sigmoid_backward", da, z)?;
    let mut dz = Array2::zeros(da.raw_dim());
    Zip::from(&mut dz).and(da).and(z).for_each(|dz, &da, &z| {
        let s = sigmoid_scalar(z);
        *dz = da * s * (1.0 - s);
    });
    Ok(dz)
}

/// dZ = dA where Z > 0, zero elsewhere.
pub fn relu_backward(da: &Array2<f64>, z: &Array2<f64>) -> Result<Array2<f64>> {
    check_same_shape("relu_backward", da, z)?;
    let mut dz = Array2::zeros(da.raw_dim());
    Zip::from(&mut dz)
        .and(da)
        .and(z)
        .for_each(|dz, &da, &z| *dz = if z > 0.0 { da } else { 0.0 });
    Ok(dz)
}

/// Differentiate through the activation recorded in `cache`.
pub fn activation_backward(da: &Array2<f64>, cache: &ActivationCache) -> Result<Array2<f64>> {
    match cache.activation {
        Activation::Relu => relu_backward(da, &cache.z),
        Activation::Sigmoid => sigmoid_backward(da, &cache.z),
    }
}

fn check_same_shape(operation: &'static str, a: &Array2<f64>, b: &Array2<f64>) -> Result<()> {
    if a.dim() != b.dim() {
        return Err(NetworkError::shape_mismatch(operation, a.dim(), b.dim()));
    }
    Ok(())
}
