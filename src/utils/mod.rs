//! Shared utilities for the trainer
//!
//! This module provides the elementwise activations, the deterministic RNG
//! used for initialization, and the learning rate schedulers driven by the
//! training loop.

pub mod activations;
pub mod lr_scheduler;
pub mod rng;

pub use activations::{Activation, ActivationCache};
pub use lr_scheduler::{ConstantLR, DecayMode, InverseTimeDecay, LRScheduler};
pub use rng::SimpleRng;
