//! Network parameters: the ordered stack of dense layers being optimized
//!
//! Layers are held in a contiguous `Vec` indexed `0..L-1`. The positional
//! keyed layout `W1, b1, ..., WL, bL` is only used at the import/export
//! boundary ([`Parameters::from_keyed`], [`Parameters::to_keyed`] and the
//! JSON checkpoint format).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};
use crate::layers::LayerParameters;

/// Keyed form of a parameter set, e.g. `{"W1": .., "b1": .., "W2": .., "b2": ..}`.
pub type KeyedParameters = BTreeMap<String, Array2<f64>>;

/// Complete set of per-layer weights and biases.
///
/// `Parameters` is a value type: cloning produces an independent snapshot and
/// the training loop never mutates a set in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "KeyedParameters", into = "KeyedParameters")]
pub struct Parameters {
    layers: Vec<LayerParameters>,
}

impl Parameters {
    /// Wrap an ordered list of layers (first hidden layer first).
    pub fn new(layers: Vec<LayerParameters>) -> Result<Self> {
        if layers.is_empty() {
            return Err(NetworkError::EmptyNetwork);
        }
        Ok(Self { layers })
    }

    /// Number of layers `L`.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[LayerParameters] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&LayerParameters> {
        self.layers.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LayerParameters> {
        self.layers.iter()
    }

    pub fn input_size(&self) -> usize {
        self.layers[0].input_size()
    }

    pub fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1].output_size()
    }

    /// Total count of weights and biases across all layers.
    pub fn parameter_count(&self) -> usize {
        self.layers.iter().map(LayerParameters::parameter_count).sum()
    }

    /// Build from the keyed layout. `L` is inferred as half the number of keys
    /// and every `W{i}` / `b{i}` for `i` in `1..=L` must be present.
    pub fn from_keyed(mut keyed: KeyedParameters) -> Result<Self> {
        if keyed.len() % 2 != 0 {
            return Err(NetworkError::InvalidConfig(format!(
                "keyed parameters must hold W and b for every layer, got {} entries",
                keyed.len()
            )));
        }
        let num_layers = keyed.len() / 2;
        let mut layers = Vec::with_capacity(num_layers);
        for i in 1..=num_layers {
            let weights = take_key(&mut keyed, format!("W{}", i))?;
            let bias = take_key(&mut keyed, format!("b{}", i))?;
            layers.push(LayerParameters::new(weights, bias)?);
        }
        Self::new(layers)
    }

    /// Export to the keyed layout `W1, b1, ..., WL, bL`.
    pub fn to_keyed(&self) -> KeyedParameters {
        let mut keyed = KeyedParameters::new();
        for (i, layer) in self.layers.iter().enumerate() {
            keyed.insert(format!("W{}", i + 1), layer.weights.clone());
            keyed.insert(format!("b{}", i + 1), layer.bias.clone());
        }
        keyed
    }

    /// Write a JSON checkpoint in the keyed layout.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Read a JSON checkpoint written by [`Parameters::save_json`].
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let parameters: Parameters = serde_json::from_str(&contents)?;
        Ok(parameters)
    }
}

fn take_key(keyed: &mut KeyedParameters, key: String) -> Result<Array2<f64>> {
    keyed
        .remove(&key)
        .ok_or(NetworkError::MissingParameter(key))
}

impl TryFrom<KeyedParameters> for Parameters {
    type Error = NetworkError;

    fn try_from(keyed: KeyedParameters) -> Result<Self> {
        Parameters::from_keyed(keyed)
    }
}

impl From<Parameters> for KeyedParameters {
    fn from(parameters: Parameters) -> Self {
        parameters.to_keyed()
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a LayerParameters;
    type IntoIter = std::slice::Iter<'a, LayerParameters>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}
