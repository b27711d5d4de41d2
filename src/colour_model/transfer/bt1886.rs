//! ITU-R BT.1886 reference electro-optical transfer function.
//!
//! Reference: ITU-R BT.1886, with the nominal screen luminances
//! `L_W = 1`, `L_B = 0`, which reduce the EOTF to a pure 2.4 power law.

use crate::colour_model::transfer::function::{CurveOptions, TransferFunction};

pub struct Bt1886Eotf;

/// BT.1886 signal to display luminance.
pub(crate) fn eotf(v: f64) -> f64 {
    v.powf(2.4)
}

/// Display luminance back to BT.1886 signal.
pub(crate) fn eotf_inverse(l: f64) -> f64 {
    l.powf(1.0 / 2.4)
}

impl TransferFunction for Bt1886Eotf {
    fn name(&self) -> &'static str {
        "ITU-R BT.1886"
    }

    // The EOTF view stores decoding curves; encode is the inverse EOTF.
    fn encode(&self, x: f64, options: &CurveOptions) -> f64 {
        let x = if options.clip { x.clamp(0.0, 1.0) } else { x };
        eotf_inverse(x)
    }

    fn decode(&self, y: f64, _options: &CurveOptions) -> f64 {
        eotf(y)
    }
}
