//! Forward and backward propagation through the layer stack
//!
//! The forward pass runs every hidden layer as linear + ReLU and the output
//! layer as linear + sigmoid, keeping one [`Cache`] per layer. The backward
//! pass walks those caches in reverse to produce [`Gradients`].

pub mod backward;
pub mod forward;

pub use backward::back_propagation;
pub use forward::{accuracy, forward_propagation, predict};

use ndarray::Array2;

use crate::layers::LinearCache;
use crate::utils::ActivationCache;

/// Everything one layer's forward step retains for the backward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Cache {
    pub linear: LinearCache,
    pub activation: ActivationCache,
}

/// Output of a forward pass: the prediction `AL` and the caches in forward order.
#[derive(Debug, Clone)]
pub struct ForwardResult {
    pub al: Array2<f64>,
    pub caches: Vec<Cache>,
}

impl ForwardResult {
    /// Number of examples `m` (columns of the prediction).
    pub fn num_examples(&self) -> usize {
        self.al.ncols()
    }
}

/// Gradient of the cost with respect to one layer's weights and bias.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerGradients {
    pub dw: Array2<f64>,
    pub db: Array2<f64>,
}

/// Per-layer gradients, indexed like [`crate::Parameters`].
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    layers: Vec<LayerGradients>,
}

impl Gradients {
    pub fn new(layers: Vec<LayerGradients>) -> Self {
        Self { layers }
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[LayerGradients] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&LayerGradients> {
        self.layers.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LayerGradients> {
        self.layers.iter()
    }
}
