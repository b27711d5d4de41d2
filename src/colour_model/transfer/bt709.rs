//! ITU-R BT.709 opto-electronic transfer function.
//!
//! Reference: ITU-R BT.709-6, item 1.2.

use crate::colour_model::transfer::function::{CurveOptions, TransferFunction};

pub struct Bt709Oetf;

/// Scene linear to BT.709 signal.
pub(crate) fn oetf(l: f64) -> f64 {
    if l < 0.018 {
        4.5 * l
    } else {
        1.099 * l.powf(0.45) - 0.099
    }
}

/// BT.709 signal back to scene linear.
pub(crate) fn oetf_inverse(v: f64) -> f64 {
    if v < 0.081 {
        v / 4.5
    } else {
        ((v + 0.099) / 1.099).powf(1.0 / 0.45)
    }
}

impl TransferFunction for Bt709Oetf {
    fn name(&self) -> &'static str {
        "ITU-R BT.709"
    }

    fn encode(&self, x: f64, options: &CurveOptions) -> f64 {
        let x = if options.clip { x.clamp(0.0, 1.0) } else { x };
        oetf(x)
    }

    fn decode(&self, y: f64, _options: &CurveOptions) -> f64 {
        oetf_inverse(y)
    }
}
