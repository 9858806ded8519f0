//! Configuration structures for training
//!
//! This module parses the training options (cost function, learning rate,
//! iteration budget, sampling interval and decay) from JSON files.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::cost::CostFunction;
use crate::error::{NetworkError, Result};
use crate::trainer::TrainOptions;
use crate::utils::lr_scheduler::DecayMode;

/// Training configuration as read from JSON.
///
/// Only `cost_function`, `learning_rate` and `num_iterations` are required:
///
/// - **logging_interval**: defaults to 100
/// - **decay_rate**: absent disables learning rate decay
/// - **decay_mode**: `"compounding"` (default) or `"from_initial"`
/// - **verbose**: defaults to false
///
/// # Example
///
/// ```json
/// {
///   "cost_function": "cross-entropy",
///   "learning_rate": 0.5,
///   "num_iterations": 2000,
///   "logging_interval": 100,
///   "decay_rate": 0.001,
///   "decay_mode": "from_initial",
///   "verbose": true
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingConfig {
    /// Cost function name: "quadratic" or "cross-entropy"
    pub cost_function: String,

    /// Initial learning rate
    pub learning_rate: f64,

    /// Total number of iterations
    pub num_iterations: usize,

    /// Sample the cost on iteration 1 and every `logging_interval` iterations
    #[serde(default = "default_logging_interval")]
    pub logging_interval: usize,

    /// Inverse-time decay coefficient
    pub decay_rate: Option<f64>,

    /// Decay mode: "compounding" or "from_initial"
    pub decay_mode: Option<String>,

    /// Log a progress line at each sampling point
    #[serde(default)]
    pub verbose: bool,
}

fn default_logging_interval() -> usize {
    100
}

impl TrainingConfig {
    /// Validate the configuration and turn it into [`TrainOptions`].
    ///
    /// An unknown cost name fails with
    /// [`NetworkError::UnsupportedCostFunction`].
    pub fn to_options(&self) -> Result<TrainOptions> {
        validate_config(self)?;
        let cost_function: CostFunction = self.cost_function.parse()?;
        let decay_mode = match self.decay_mode {
            Some(ref mode) => mode.parse::<DecayMode>()?,
            None => DecayMode::default(),
        };

        let mut options = TrainOptions::new(
            cost_function,
            self.learning_rate,
            self.num_iterations,
            self.logging_interval,
        )
        .with_decay_mode(decay_mode)
        .verbose(self.verbose);
        if let Some(decay_rate) = self.decay_rate {
            options = options.with_decay(decay_rate);
        }
        Ok(options)
    }
}

/// Loads a training configuration from a JSON file.
///
/// Reads the file at `path`, deserializes it into a `TrainingConfig` and
/// validates the numeric fields.
///
/// # Examples
///
/// ```no_run
/// use rust_feedforward::config::load_config;
///
/// let cfg = load_config("config/and_gate.json").unwrap();
/// let options = cfg.to_options().unwrap();
/// assert!(options.num_iterations > 0);
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<TrainingConfig> {
    let contents = fs::read_to_string(path)?;
    let config: TrainingConfig = serde_json::from_str(&contents)?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &TrainingConfig) -> Result<()> {
    if !(config.learning_rate.is_finite() && config.learning_rate > 0.0) {
        return Err(NetworkError::InvalidConfig(
            "learning_rate must be positive".to_string(),
        ));
    }

    if config.logging_interval == 0 {
        return Err(NetworkError::InvalidConfig(
            "logging_interval must be positive".to_string(),
        ));
    }

    if let Some(decay_rate) = config.decay_rate {
        if !(decay_rate.is_finite() && decay_rate >= 0.0) {
            return Err(NetworkError::InvalidConfig(
                "decay_rate must be non-negative".to_string(),
            ));
        }
    }

    // Cost function and decay mode names
    config.cost_function.parse::<CostFunction>()?;
    if let Some(ref mode) = config.decay_mode {
        mode.parse::<DecayMode>()?;
    }

    Ok(())
}
