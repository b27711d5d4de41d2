//! Normalised primary matrix derivation.
//!
//! Derives the 3x3 matrix mapping linear RGB tristimulus values to CIE XYZ
//! (and its inverse) from the gamut primaries and the whitepoint:
//!
//! 1. Each primary chromaticity becomes an unnormalised XYZ column with
//!    unit luminance; the three columns form the matrix P.
//! 2. The scaling vector S solves `P * S = W` for the whitepoint column W,
//!    so that RGB (1, 1, 1) maps exactly onto the whitepoint.
//! 3. The normalised primary matrix is P with each column scaled by the
//!    matching entry of S.

use nalgebra::Matrix3;
use tracing::debug;

use crate::colour_model::common::error::{ColourError, Result};
use crate::colour_model::derivation::types::{Chromaticity, Primaries};

/// Derives the normalised primary matrix and its inverse.
///
/// Returns `(rgb_to_xyz, xyz_to_rgb)`. Fails with
/// [`ColourError::DegenerateInput`] when a chromaticity has a zero `y`
/// component, and with [`ColourError::SingularMatrix`] when the primaries
/// are collinear (or otherwise yield a non-invertible matrix).
pub fn normalised_primary_matrix(
    primaries: &Primaries,
    whitepoint: &Chromaticity,
) -> Result<(Matrix3<f64>, Matrix3<f64>)> {
    let red = primaries.red.to_xyz()?;
    let green = primaries.green.to_xyz()?;
    let blue = primaries.blue.to_xyz()?;
    let white = whitepoint.to_xyz()?;

    let p = Matrix3::from_columns(&[red, green, blue]);
    let p_inverse = p
        .try_inverse()
        .ok_or_else(|| ColourError::SingularMatrix("primary matrix".to_string()))?;

    let scale = p_inverse * white;
    let npm = p * Matrix3::from_diagonal(&scale);

    // P was invertible and S has no zero entries for any physical
    // whitepoint, but the check stays in case a caller feeds one.
    let npm_inverse = npm
        .try_inverse()
        .ok_or_else(|| ColourError::SingularMatrix("normalised primary matrix".to_string()))?;

    debug!(
        "Derived normalised primary matrix: [{:.7}, {:.7}, {:.7}; {:.7}, {:.7}, {:.7}; {:.7}, {:.7}, {:.7}]",
        npm[(0, 0)],
        npm[(0, 1)],
        npm[(0, 2)],
        npm[(1, 0)],
        npm[(1, 1)],
        npm[(1, 2)],
        npm[(2, 0)],
        npm[(2, 1)],
        npm[(2, 2)]
    );

    Ok((npm, npm_inverse))
}
