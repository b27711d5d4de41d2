//! Colourspace matrix derivation module
//!
//! This module derives the normalised primary matrix of an RGB colourspace
//! from its chromaticity primaries and whitepoint.

mod npm;
pub mod types;


pub use npm::normalised_primary_matrix;
pub use types::{Chromaticity, Primaries};
