//! Architecture configuration and parameter initialization
//!
//! This module describes a network by its layer sizes and builds the initial
//! [`Parameters`] for it. Networks are always a ReLU hidden stack followed by
//! a sigmoid output layer.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{NetworkError, Result};
use crate::layers::LayerParameters;
use crate::parameters::Parameters;
use crate::utils::activations::Activation;
use crate::utils::rng::SimpleRng;

/// Weight initialization scheme. Biases always start at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Initialization {
    /// N(0, 2 / fan_in)
    #[default]
    He,
    /// Uniform in ±sqrt(6 / (fan_in + fan_out))
    Xavier,
    Zeros,
}

impl FromStr for Initialization {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "he" => Ok(Initialization::He),
            "xavier" => Ok(Initialization::Xavier),
            "zeros" => Ok(Initialization::Zeros),
            other => Err(NetworkError::InvalidConfig(format!(
                "Invalid initialization '{}'. Must be one of: he, xavier, zeros",
                other
            ))),
        }
    }
}

/// Network architecture as read from JSON.
///
/// `layer_dims` lists the unit count of every layer including the input,
/// so `[2, 4, 1]` is two features, one hidden layer of four units and one
/// output unit.
///
/// # Example
///
/// ```json
/// {
///   "layer_dims": [2, 4, 1],
///   "initialization": "he",
///   "seed": 42
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ArchitectureConfig {
    /// Units per layer, input first
    pub layer_dims: Vec<usize>,

    /// "he" (default), "xavier" or "zeros"
    pub initialization: Option<String>,

    /// RNG seed for initialization (default 1)
    pub seed: Option<u64>,

    /// Must be "relu" when present
    pub hidden_activation: Option<String>,

    /// Must be "sigmoid" when present
    pub output_activation: Option<String>,
}

impl ArchitectureConfig {
    /// Build an architecture from layer sizes with default settings.
    pub fn from_dims(layer_dims: Vec<usize>) -> Self {
        Self {
            layer_dims,
            initialization: None,
            seed: None,
            hidden_activation: None,
            output_activation: None,
        }
    }

    pub fn initialization(&self) -> Result<Initialization> {
        match self.initialization {
            Some(ref name) => name.parse(),
            None => Ok(Initialization::default()),
        }
    }
}

/// Loads an architecture configuration from a JSON file.
///
/// # Examples
///
/// ```no_run
/// use rust_feedforward::architecture::load_architecture;
///
/// let arch = load_architecture("config/and_gate_architecture.json").unwrap();
/// assert!(arch.layer_dims.len() >= 2);
/// ```
pub fn load_architecture<P: AsRef<Path>>(path: P) -> Result<ArchitectureConfig> {
    let contents = fs::read_to_string(path)?;
    let config: ArchitectureConfig = serde_json::from_str(&contents)?;
    validate_architecture(&config)?;
    Ok(config)
}

/// Checks layer sizes and activation names.
pub fn validate_architecture(config: &ArchitectureConfig) -> Result<()> {
    if config.layer_dims.len() < 2 {
        return Err(NetworkError::InvalidConfig(
            "layer_dims needs at least an input and an output size".to_string(),
        ));
    }
    if let Some(position) = config.layer_dims.iter().position(|&d| d == 0) {
        return Err(NetworkError::InvalidConfig(format!(
            "layer_dims[{}] must be positive",
            position
        )));
    }

    check_activation(config.hidden_activation.as_deref(), Activation::Relu, "hidden")?;
    check_activation(config.output_activation.as_deref(), Activation::Sigmoid, "output")?;
    config.initialization()?;

    Ok(())
}

fn check_activation(name: Option<&str>, expected: Activation, position: &str) -> Result<()> {
    let Some(name) = name else {
        return Ok(());
    };
    let activation: Activation = name.parse()?;
    if activation != expected {
        return Err(NetworkError::InvalidConfig(format!(
            "{} layers use {}, got {}",
            position, expected, activation
        )));
    }
    Ok(())
}

/// Build initial parameters for `layer_dims` with the given scheme.
pub fn initialize_layers(
    layer_dims: &[usize],
    initialization: Initialization,
    rng: &mut SimpleRng,
) -> Result<Parameters> {
    let layers = layer_dims
        .windows(2)
        .map(|pair| {
            let (input_size, output_size) = (pair[0], pair[1]);
            match initialization {
                Initialization::He => LayerParameters::he(input_size, output_size, rng),
                Initialization::Xavier => LayerParameters::xavier(input_size, output_size, rng),
                Initialization::Zeros => LayerParameters::zeros(input_size, output_size),
            }
        })
        .collect();
    Parameters::new(layers)
}

/// Validate `config` and build its initial parameters.
pub fn initialize_parameters(config: &ArchitectureConfig) -> Result<Parameters> {
    validate_architecture(config)?;
    let mut rng = SimpleRng::new(config.seed.unwrap_or(1));
    initialize_layers(&config.layer_dims, config.initialization()?, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_shapes() {
        let params = initialize_parameters(&ArchitectureConfig::from_dims(vec![3, 5, 4, 1])).unwrap();

        assert_eq!(params.num_layers(), 3);
        assert_eq!(params.layers()[0].weights.dim(), (5, 3));
        assert_eq!(params.layers()[1].weights.dim(), (4, 5));
        assert_eq!(params.layers()[2].weights.dim(), (1, 4));
        assert!(params.iter().all(|l| l.bias.iter().all(|&b| b == 0.0)));
    }

    #[test]
    fn test_seed_is_deterministic() {
        let mut config = ArchitectureConfig::from_dims(vec![2, 3, 1]);
        config.seed = Some(7);
        assert_eq!(
            initialize_parameters(&config).unwrap(),
            initialize_parameters(&config).unwrap()
        );
    }

    #[test]
    fn test_zeros_initialization() {
        let mut config = ArchitectureConfig::from_dims(vec![2, 1]);
        config.initialization = Some("zeros".to_string());
        let params = initialize_parameters(&config).unwrap();
        assert!(params.layers()[0].weights.iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_too_few_dims() {
        let err = validate_architecture(&ArchitectureConfig::from_dims(vec![4])).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_dim() {
        let err = validate_architecture(&ArchitectureConfig::from_dims(vec![4, 0, 1])).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidConfig(_)));
    }

    #[test]
    fn test_unknown_activation() {
        let mut config = ArchitectureConfig::from_dims(vec![2, 2, 1]);
        config.hidden_activation = Some("tanh".to_string());
        let err = validate_architecture(&config).unwrap_err();
        assert!(matches!(err, NetworkError::UnsupportedActivation(name) if name == "tanh"));
    }

    #[test]
    fn test_swapped_activation() {
        let mut config = ArchitectureConfig::from_dims(vec![2, 2, 1]);
        config.output_activation = Some("relu".to_string());
        let err = validate_architecture(&config).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidConfig(_)));
    }
}
