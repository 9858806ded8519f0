//! Learning rate scheduler trait and implementations
//!
//! This module defines the LRScheduler trait used by the training loop to
//! derive the step size for each iteration. Two schedules exist:
//! a constant rate, and inverse-time decay `lr / (1 + decay_rate * iteration)`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NetworkError;

/// Core trait for learning rate schedulers.
///
/// When decay is enabled, the trainer calls `step` once per iteration, after
/// the backward pass and before the parameter update, then reads `get_lr` to
/// obtain the rate applied in that iteration.
///
/// # Example
///
/// ```
/// use rust_feedforward::utils::lr_scheduler::{InverseTimeDecay, DecayMode, LRScheduler};
///
/// let mut scheduler = InverseTimeDecay::new(0.1, 0.5, DecayMode::FromInitial);
/// scheduler.step(); // iteration 1
/// assert!((scheduler.get_lr() - 0.1 / 1.5).abs() < 1e-12);
/// ```
pub trait LRScheduler {
    /// Get the current learning rate.
    fn get_lr(&self) -> f64;

    /// Advance the scheduler to the next iteration and recompute the rate.
    fn step(&mut self);

    /// Reset the scheduler to its initial state.
    fn reset(&mut self);
}

/// Constant learning rate (no decay).
pub struct ConstantLR {
    lr: f64,
}

impl ConstantLR {
    pub fn new(lr: f64) -> Self {
        Self { lr }
    }
}

impl LRScheduler for ConstantLR {
    fn get_lr(&self) -> f64 {
        self.lr
    }

    fn step(&mut self) {}

    fn reset(&mut self) {}
}

/// How inverse-time decay picks the rate it divides at each iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecayMode {
    /// `lr_i = lr_{i-1} / (1 + decay_rate * i)`: each division applies to the
    /// already-decayed rate, so decay compounds across iterations.
    #[default]
    Compounding,
    /// `lr_i = lr_0 / (1 + decay_rate * i)`
    FromInitial,
}

impl fmt::Display for DecayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecayMode::Compounding => f.write_str("compounding"),
            DecayMode::FromInitial => f.write_str("from_initial"),
        }
    }
}

impl FromStr for DecayMode {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compounding" => Ok(DecayMode::Compounding),
            "from_initial" => Ok(DecayMode::FromInitial),
            other => Err(NetworkError::InvalidConfig(format!(
                "Invalid decay mode '{}'. Must be one of: compounding, from_initial",
                other
            ))),
        }
    }
}

/// Inverse-time learning rate decay.
///
/// Formula at iteration `i` (1-based): `lr = base / (1 + decay_rate * i)`,
/// where `base` is the previous rate in [`DecayMode::Compounding`] and the
/// initial rate in [`DecayMode::FromInitial`]. Both produce a non-increasing
/// sequence for a non-negative decay rate.
///
/// # Fields
///
/// * `initial_lr` - Starting learning rate
/// * `decay_rate` - Non-negative decay coefficient
/// * `mode` - Whether decay compounds
/// * `current_iteration` - Number of `step` calls so far
/// * `current_lr` - Current learning rate value
pub struct InverseTimeDecay {
    initial_lr: f64,
    decay_rate: f64,
    mode: DecayMode,
    current_iteration: usize,
    current_lr: f64,
}

impl InverseTimeDecay {
    pub fn new(initial_lr: f64, decay_rate: f64, mode: DecayMode) -> Self {
        Self {
            initial_lr,
            decay_rate,
            mode,
            current_iteration: 0,
            current_lr: initial_lr,
        }
    }

    pub fn mode(&self) -> DecayMode {
        self.mode
    }

    pub fn iteration(&self) -> usize {
        self.current_iteration
    }
}

impl LRScheduler for InverseTimeDecay {
    fn get_lr(&self) -> f64 {
        self.current_lr
    }

    fn step(&mut self) {
        self.current_iteration += 1;
        let base = match self.mode {
            DecayMode::Compounding => self.current_lr,
            DecayMode::FromInitial => self.initial_lr,
        };
        self.current_lr = base / (1.0 + self.decay_rate * self.current_iteration as f64);
    }

    fn reset(&mut self) {
        self.current_iteration = 0;
        self.current_lr = self.initial_lr;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_lr_never_changes() {
        let mut scheduler = ConstantLR::new(0.3);
        for _ in 0..10 {
            scheduler.step();
        }
        assert_eq!(scheduler.get_lr(), 0.3);
    }

    #[test]
    fn test_compounding_second_iteration() {
        let mut scheduler = InverseTimeDecay::new(1.0, 0.1, DecayMode::Compounding);
        scheduler.step();
        scheduler.step();
        // 1.0 / 1.1 / 1.2
        assert!((scheduler.get_lr() - 1.0 / 1.1 / 1.2).abs() < 1e-12);
        assert_eq!(scheduler.iteration(), 2);
    }

    #[test]
    fn test_from_initial_second_iteration() {
        let mut scheduler = InverseTimeDecay::new(1.0, 0.1, DecayMode::FromInitial);
        scheduler.step();
        scheduler.step();
        assert!((scheduler.get_lr() - 1.0 / 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_reset_restores_initial() {
        let mut scheduler = InverseTimeDecay::new(0.5, 0.2, DecayMode::Compounding);
        for _ in 0..5 {
            scheduler.step();
        }
        scheduler.reset();
        assert_eq!(scheduler.get_lr(), 0.5);
        assert_eq!(scheduler.iteration(), 0);
    }

    #[test]
    fn test_decay_mode_parse() {
        assert_eq!("from_initial".parse::<DecayMode>().unwrap(), DecayMode::FromInitial);
        assert_eq!("Compounding".parse::<DecayMode>().unwrap(), DecayMode::Compounding);
        assert!("linear".parse::<DecayMode>().is_err());
    }
}
