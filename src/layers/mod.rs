//! Layer building blocks
//!
//! This module provides the per-layer parameter struct and the linear op
//! every layer applies before its activation.

pub mod dense;
pub mod linear;

pub use dense::LayerParameters;
pub use linear::{linear_backward, linear_forward, LinearCache, LinearGradients};
