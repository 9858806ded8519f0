//! Linear op shared by every layer: `Z = W·A_prev + b`
//!
//! The bias is a `(units, 1)` column broadcast over the example columns.
//! Shape checks live here, in the matrix glue, so that propagation code can
//! simply forward whatever error comes back.

use ndarray::{Array2, Axis};

use crate::error::{NetworkError, Result};

/// Inputs that produced `Z` for one layer, kept for the backward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearCache {
    pub a_prev: Array2<f64>,
    pub weights: Array2<f64>,
    pub bias: Array2<f64>,
}

/// Gradients produced by differentiating one linear op.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradients {
    pub da_prev: Array2<f64>,
    pub dw: Array2<f64>,
    pub db: Array2<f64>,
}

/// Compute `Z = W·A_prev + b` and the cache needed to differentiate it.
pub fn linear_forward(
    a_prev: &Array2<f64>,
    weights: &Array2<f64>,
    bias: &Array2<f64>,
) -> Result<(Array2<f64>, LinearCache)> {
    if weights.ncols() != a_prev.nrows() {
        return Err(NetworkError::shape_mismatch(
            "linear_forward (W·A_prev)",
            weights.dim(),
            a_prev.dim(),
        ));
    }
    let mut z = weights.dot(a_prev);
    let bias_view = bias
        .broadcast(z.raw_dim())
        .ok_or_else(|| NetworkError::shape_mismatch("linear_forward (+ b)", z.dim(), bias.dim()))?;
    z += &bias_view;

    let cache = LinearCache {
        a_prev: a_prev.clone(),
        weights: weights.clone(),
        bias: bias.clone(),
    };
    Ok((z, cache))
}

/// Differentiate the linear op given `dZ` and the number of examples `m`.
///
/// `dW = dZ·A_prev^T / m`, `db = rowSum(dZ) / m`, `dA_prev = W^T·dZ`.
pub fn linear_backward(dz: &Array2<f64>, cache: &LinearCache, m: usize) -> Result<LinearGradients> {
    if dz.nrows() != cache.weights.nrows() || dz.ncols() != cache.a_prev.ncols() {
        return Err(NetworkError::shape_mismatch(
            "linear_backward (dZ)",
            dz.dim(),
            (cache.weights.nrows(), cache.a_prev.ncols()),
        ));
    }
    let m = m as f64;
    let dw = dz.dot(&cache.a_prev.t()) / m;
    let db = dz.sum_axis(Axis(1)).insert_axis(Axis(1)) / m;
    let da_prev = cache.weights.t().dot(dz);

    Ok(LinearGradients { da_prev, dw, db })
}
