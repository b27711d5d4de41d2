//! Transfer function module
//!
//! This module defines the encode/decode transfer curve interface, the
//! curve catalogue and the process-wide registry with its aggregate views.

mod aces;
mod bt709;
mod bt1886;
mod bt2100;
mod dlog;
mod flog;
mod function;
mod gamma;
mod registry;
mod srgb;
mod st2084;

#[cfg(test)]
mod tests;

pub use function::{BitDepth, CurveOptions, TransferFunction};
pub use gamma::Gamma;
pub use registry::{
    TransferRegistry, decoding_cctf, decoding_cctf_slice, encoding_cctf, encoding_cctf_slice,
    registry,
};
pub use srgb::Srgb;
