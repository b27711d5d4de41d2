//! Colour science computation core
//!
//! This module models RGB colourspaces and the numeric machinery around
//! them, with separate modules for matrix derivation, transfer functions,
//! colourspace descriptors, illuminant lookup and colour fitting.

pub mod colourspace;
pub mod common;
pub mod derivation;
pub mod fitting;
pub mod illuminants;
pub mod transfer;

pub use common::{ColourError, Result};

pub use derivation::{Chromaticity, Primaries, normalised_primary_matrix};

pub use illuminants::{OBSERVER_10_DEGREE, OBSERVER_2_DEGREE, whitepoint};

pub use transfer::{
    BitDepth, CurveOptions, Gamma, Srgb, TransferFunction, TransferRegistry, decoding_cctf,
    decoding_cctf_slice, encoding_cctf, encoding_cctf_slice, registry,
};

pub use colourspace::{RUSSELL_RGB_PRIMARIES, RgbColourspace, russell_rgb};

pub use fitting::first_order_colour_fit;
