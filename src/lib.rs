//! Rust Feedforward
//!
//! A minimal fully-connected feedforward network trainer: ReLU hidden layers,
//! a sigmoid output layer, full-batch gradient descent with optional
//! learning rate decay.
//!
//! # Modules
//!
//! - `layers`: per-layer parameters and the linear op
//! - `parameters`: the ordered parameter set and its keyed/JSON form
//! - `cost`: quadratic and cross-entropy costs with their derivatives
//! - `propagation`: forward and backward passes
//! - `optimizers`: gradient descent update
//! - `trainer`: the training loop
//! - `utils`: activations, RNG, learning rate schedulers
//! - `config`: training configuration
//! - `architecture`: architecture configuration and initialization
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use rust_feedforward::architecture::{initialize_layers, Initialization};
//! use rust_feedforward::utils::SimpleRng;
//! use rust_feedforward::{train, CostFunction, TrainOptions};
//!
//! let x = array![[0.0, 0.0, 1.0, 1.0], [0.0, 1.0, 0.0, 1.0]];
//! let y = array![[0.0, 0.0, 0.0, 1.0]];
//! let mut rng = SimpleRng::new(3);
//! let params = initialize_layers(&[2, 3, 1], Initialization::He, &mut rng).unwrap();
//!
//! let options = TrainOptions::new(CostFunction::CrossEntropy, 0.5, 200, 50);
//! let outcome = train(&x, &y, &params, &options, None).unwrap();
//! assert_eq!(outcome.costs.len(), 5);
//! ```

pub mod architecture;
pub mod config;
pub mod cost;
pub mod error;
pub mod layers;
pub mod optimizers;
pub mod parameters;
pub mod propagation;
pub mod trainer;
pub mod utils;

pub use cost::CostFunction;
pub use error::{NetworkError, Result};
pub use optimizers::update_parameters;
pub use parameters::Parameters;
pub use propagation::{back_propagation, forward_propagation, ForwardResult, Gradients};
pub use trainer::{train, CostRecord, TrainOptions, TrainingOutcome};
