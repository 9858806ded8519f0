//! Parameter update rules
//!
//! Only plain gradient descent is provided: `param = param - learning_rate * gradient`.
//! The step size for each iteration comes from a
//! [`crate::utils::lr_scheduler::LRScheduler`].

pub mod gradient_descent;

pub use gradient_descent::update_parameters;
