//! DJI D-Log transfer characteristics.
//!
//! Reference: the DJI "D-Log and D-Gamut" whitepaper. Both directions use
//! the constants as published; the decode constants are rounded
//! independently of the encode ones, so the roundtrip only holds to one
//! decimal over the full log range.

use crate::colour_model::transfer::function::{CurveOptions, TransferFunction};

pub struct DLog;

impl TransferFunction for DLog {
    fn name(&self) -> &'static str {
        "D-Log"
    }

    fn encode(&self, x: f64, options: &CurveOptions) -> f64 {
        let x = if options.clip {
            x.clamp(0.0, 65504.0)
        } else {
            x
        };
        if x <= 0.0078 {
            6.025 * x + 0.0929
        } else {
            (x * 0.9892 + 0.0108).log10() * 0.256663 + 0.584555
        }
    }

    fn decode(&self, y: f64, _options: &CurveOptions) -> f64 {
        if y <= 0.14 {
            (y - 0.0929) / 6.025
        } else {
            (10.0_f64.powf(3.89616 * y - 2.27752) - 0.0108) / 0.9892
        }
    }

    fn domain_upper(&self) -> f64 {
        65504.0
    }

    fn reciprocal_decimals(&self) -> u32 {
        1
    }
}
