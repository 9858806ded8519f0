//! Full-batch gradient descent training loop
//!
//! Every iteration runs forward propagation, backward propagation, an
//! optional learning rate decay step and a parameter update. On iteration 1
//! and on every `logging_interval`-th iteration the cost of that iteration's
//! forward prediction is recorded, handed to the optional callback and, when
//! verbose, logged as `"<iteration> iteration: Cost is <cost>"`.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cost::CostFunction;
use crate::error::{NetworkError, Result};
use crate::optimizers::update_parameters;
use crate::parameters::Parameters;
use crate::propagation::{back_propagation, forward_propagation};
use crate::utils::lr_scheduler::{ConstantLR, DecayMode, InverseTimeDecay, LRScheduler};

/// One sampled point of the cost history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
    pub epoch: usize,
    pub cost: f64,
}

/// Options for [`train`].
///
/// # Example
///
/// ```
/// use rust_feedforward::{CostFunction, TrainOptions};
///
/// let options = TrainOptions::new(CostFunction::CrossEntropy, 0.5, 1000, 100)
///     .with_decay(0.01)
///     .verbose(true);
/// assert_eq!(options.decay_rate, Some(0.01));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TrainOptions {
    pub cost_function: CostFunction,
    pub learning_rate: f64,
    pub num_iterations: usize,
    pub logging_interval: usize,
    /// `None` disables decay
    pub decay_rate: Option<f64>,
    pub decay_mode: DecayMode,
    pub verbose: bool,
}

impl TrainOptions {
    pub fn new(
        cost_function: CostFunction,
        learning_rate: f64,
        num_iterations: usize,
        logging_interval: usize,
    ) -> Self {
        Self {
            cost_function,
            learning_rate,
            num_iterations,
            logging_interval,
            decay_rate: None,
            decay_mode: DecayMode::default(),
            verbose: false,
        }
    }

    /// Same as [`TrainOptions::new`] but selects the cost by name
    /// (`"quadratic"` or `"cross-entropy"`).
    pub fn with_cost_name(
        cost_name: &str,
        learning_rate: f64,
        num_iterations: usize,
        logging_interval: usize,
    ) -> Result<Self> {
        let cost_function = cost_name.parse()?;
        Ok(Self::new(cost_function, learning_rate, num_iterations, logging_interval))
    }

    pub fn with_decay(mut self, decay_rate: f64) -> Self {
        self.decay_rate = Some(decay_rate);
        self
    }

    pub fn with_decay_mode(mut self, mode: DecayMode) -> Self {
        self.decay_mode = mode;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn scheduler(&self) -> Box<dyn LRScheduler> {
        match self.decay_rate {
            Some(decay_rate) => Box::new(InverseTimeDecay::new(
                self.learning_rate,
                decay_rate,
                self.decay_mode,
            )),
            None => Box::new(ConstantLR::new(self.learning_rate)),
        }
    }
}

/// Result of a training run.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub parameters: Parameters,
    pub costs: Vec<CostRecord>,
    /// Learning rate applied in the last iteration
    pub final_learning_rate: f64,
}

/// Train `initial_parameters` on inputs `x` (features × m) and targets `y`
/// (output units × m).
///
/// `initial_parameters` is borrowed and left untouched; the returned
/// parameters are an independent set. `on_cost` receives the cumulative cost
/// history at every sampling point.
pub fn train(
    x: &Array2<f64>,
    y: &Array2<f64>,
    initial_parameters: &Parameters,
    options: &TrainOptions,
    mut on_cost: Option<&mut dyn FnMut(&[CostRecord])>,
) -> Result<TrainingOutcome> {
    if options.logging_interval == 0 {
        return Err(NetworkError::InvalidConfig(
            "logging_interval must be positive".to_string(),
        ));
    }

    let mut parameters = initial_parameters.clone();
    let mut scheduler = options.scheduler();
    let mut learning_rate = scheduler.get_lr();
    let mut costs: Vec<CostRecord> = Vec::new();

    debug!(
        cost_function = %options.cost_function,
        learning_rate,
        num_iterations = options.num_iterations,
        decay_rate = ?options.decay_rate,
        "training started"
    );

    for i in 1..=options.num_iterations {
        let forward = forward_propagation(x, &parameters)?;
        let grads = back_propagation(options.cost_function, &forward, y)?;

        if options.decay_rate.is_some() {
            scheduler.step();
            learning_rate = scheduler.get_lr();
        }
        parameters = update_parameters(&parameters, &grads, learning_rate)?;

        if i == 1 || i % options.logging_interval == 0 {
            let cost = options.cost_function.cost(&forward.al, y)?;
            costs.push(CostRecord { epoch: i, cost });
            debug!(epoch = i, cost, learning_rate, "cost sampled");

            if let Some(callback) = on_cost.as_deref_mut() {
                callback(&costs);
            }
            if options.verbose {
                info!("{} iteration: Cost is {}", i, cost);
            }
        }
    }

    Ok(TrainingOutcome {
        parameters,
        costs,
        final_learning_rate: learning_rate,
    })
}
