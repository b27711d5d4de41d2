//! RGB colourspace descriptor.

use std::fmt;
use std::sync::Arc;

use nalgebra::Matrix3;
use tracing::info;

use crate::colour_model::common::error::Result;
use crate::colour_model::derivation::normalised_primary_matrix;
use crate::colour_model::derivation::types::{Chromaticity, Primaries};
use crate::colour_model::transfer::{CurveOptions, TransferFunction};

/// An immutable RGB colourspace: gamut primaries, whitepoint, the derived
/// RGB↔XYZ matrices and the transfer pair.
///
/// Construction derives the matrices once; afterwards every field is
/// read-only behind accessors, so one instance can be shared across
/// threads. There is no value equality: two descriptors built from the
/// same numbers are still distinct colourspaces, so compare identities,
/// not fields. An "updated" colourspace is a newly constructed one.
pub struct RgbColourspace {
    name: String,
    primaries: Primaries,
    whitepoint: Chromaticity,
    matrix_rgb_to_xyz: Matrix3<f64>,
    matrix_xyz_to_rgb: Matrix3<f64>,
    transfer: Arc<dyn TransferFunction>,
}

impl fmt::Debug for RgbColourspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RgbColourspace")
            .field("name", &self.name)
            .field("primaries", &self.primaries)
            .field("whitepoint", &self.whitepoint)
            .field("matrix_rgb_to_xyz", &self.matrix_rgb_to_xyz)
            .field("matrix_xyz_to_rgb", &self.matrix_xyz_to_rgb)
            .field("transfer", &self.transfer.name())
            .finish()
    }
}

impl RgbColourspace {
    /// Builds a colourspace, deriving its normalised primary matrix and
    /// inverse from the primaries and whitepoint.
    pub fn new(
        name: impl Into<String>,
        primaries: Primaries,
        whitepoint: Chromaticity,
        transfer: Arc<dyn TransferFunction>,
    ) -> Result<Self> {
        let name = name.into();
        let (matrix_rgb_to_xyz, matrix_xyz_to_rgb) =
            normalised_primary_matrix(&primaries, &whitepoint)?;

        info!(
            colourspace = %name,
            transfer = transfer.name(),
            "Derived colourspace matrices"
        );

        Ok(Self {
            name,
            primaries,
            whitepoint,
            matrix_rgb_to_xyz,
            matrix_xyz_to_rgb,
            transfer,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primaries(&self) -> &Primaries {
        &self.primaries
    }

    pub fn whitepoint(&self) -> &Chromaticity {
        &self.whitepoint
    }

    pub fn matrix_rgb_to_xyz(&self) -> &Matrix3<f64> {
        &self.matrix_rgb_to_xyz
    }

    pub fn matrix_xyz_to_rgb(&self) -> &Matrix3<f64> {
        &self.matrix_xyz_to_rgb
    }

    pub fn transfer(&self) -> &Arc<dyn TransferFunction> {
        &self.transfer
    }

    /// Applies the colourspace's encoding transfer function.
    pub fn encode(&self, x: f64) -> f64 {
        self.transfer.encode(x, &CurveOptions::default())
    }

    /// Applies the colourspace's decoding transfer function.
    pub fn decode(&self, y: f64) -> f64 {
        self.transfer.decode(y, &CurveOptions::default())
    }
}
