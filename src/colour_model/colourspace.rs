//! RGB colourspace module
//!
//! This module bundles primaries, whitepoint, derived matrices and a
//! transfer pair into immutable colourspace descriptors.

mod descriptor;
mod russell;

#[cfg(test)]
mod tests;

pub use descriptor::RgbColourspace;
pub use russell::{RUSSELL_RGB_PRIMARIES, russell_rgb};
