//! Chromaticity data types

use nalgebra::Vector3;

use crate::colour_model::common::error::{ColourError, Result};

/// A point on the CIE 1931 chromaticity diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
}

impl Chromaticity {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts the chromaticity to an unnormalised XYZ column with unit
    /// luminance: `[x/y, 1, (1-x-y)/y]`.
    ///
    /// Fails when `y` is zero, since the conversion divides by it.
    pub fn to_xyz(&self) -> Result<Vector3<f64>> {
        if self.y == 0.0 {
            return Err(ColourError::DegenerateInput(format!(
                "x={}, y={}",
                self.x, self.y
            )));
        }
        Ok(Vector3::new(
            self.x / self.y,
            1.0,
            (1.0 - self.x - self.y) / self.y,
        ))
    }
}

/// The red, green and blue chromaticities defining an RGB gamut.
///
/// The channel order is fixed and never reordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    pub red: Chromaticity,
    pub green: Chromaticity,
    pub blue: Chromaticity,
}

impl Primaries {
    pub const fn new(red: Chromaticity, green: Chromaticity, blue: Chromaticity) -> Self {
        Self { red, green, blue }
    }
}
