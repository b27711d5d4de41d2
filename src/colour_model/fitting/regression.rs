//! First-order colour fit.
//!
//! Estimates the linear correction matrix between two sets of corresponding
//! colour samples by multiple linear regression, the classic way of
//! matching two measured colour rendition charts.

use nalgebra::DMatrix;
use tracing::debug;

use crate::colour_model::common::error::{ColourError, Result};

/// Fits a colour matrix mapping the `m2` samples onto the `m1` samples.
///
/// Both matrices are N×M with one colour per row (M = 3 for RGB triplets).
/// Each column of `m1` is regressed onto `m2` augmented with an intercept
/// column; the intercepts are discarded and the M×M matrix of linear
/// coefficients is returned, so that `m1 ≈ m2 * fit.transpose()` up to the
/// per-channel offsets. The normal system is solved through an SVD, which
/// stays stable for near-collinear or noisy sample sets. With fewer
/// samples than columns the system is under-determined and the result is
/// the minimum-norm least-squares solution.
///
/// Fails with [`ColourError::ShapeMismatch`] when the two sample matrices
/// have different shapes.
pub fn first_order_colour_fit(m1: &DMatrix<f64>, m2: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    if m1.shape() != m2.shape() {
        return Err(ColourError::ShapeMismatch(
            m1.nrows(),
            m1.ncols(),
            m2.nrows(),
            m2.ncols(),
        ));
    }

    let samples = m1.nrows();
    let channels = m1.ncols();

    let mut design = DMatrix::<f64>::zeros(samples, channels + 1);
    design.view_mut((0, 0), (samples, channels)).copy_from(m2);
    design.column_mut(channels).fill(1.0);

    let svd = design.clone().svd(true, true);
    let coefficients = svd
        .solve(m1, f64::EPSILON)
        .map_err(|e| ColourError::SingularMatrix(e.to_string()))?;

    let residual = (design * &coefficients - m1).norm();
    debug!(samples, channels, residual, "Solved first order colour fit");

    Ok(coefficients.rows(0, channels).transpose())
}
