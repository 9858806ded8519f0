//! Error types for the feedforward trainer

use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors raised while building, propagating or training a network.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Cost function name does not match a known implementation
    #[error("Unsupported cost function: {0}")]
    UnsupportedCostFunction(String),

    /// Activation name is neither `relu` nor `sigmoid`
    #[error("Unsupported activation: {0}")]
    UnsupportedActivation(String),

    /// Two matrices entering an operation have incompatible shapes
    #[error("Shape mismatch in {operation}: {left:?} vs {right:?}")]
    ShapeMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A network needs at least one layer
    #[error("Network has no layers")]
    EmptyNetwork,

    /// Gradients do not line up with the parameters they update
    #[error("Layer count mismatch: {parameters} parameter layers, {gradients} gradient layers")]
    LayerCountMismatch { parameters: usize, gradients: usize },

    /// Keyed parameter map is missing an entry such as `W2`
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NetworkError {
    pub(crate) fn shape_mismatch(
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Self {
        NetworkError::ShapeMismatch {
            operation,
            left,
            right,
        }
    }
}
