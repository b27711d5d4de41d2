//! sRGB electro-optical transfer characteristics.
//!
//! Reference: IEC 61966-2-1:1999.

use crate::colour_model::transfer::function::{CurveOptions, TransferFunction};

pub struct Srgb;

impl TransferFunction for Srgb {
    fn name(&self) -> &'static str {
        "sRGB"
    }

    fn encode(&self, x: f64, options: &CurveOptions) -> f64 {
        let x = if options.clip { x.clamp(0.0, 1.0) } else { x };
        if x <= 0.0031308 {
            12.92 * x
        } else {
            1.055 * x.powf(1.0 / 2.4) - 0.055
        }
    }

    fn decode(&self, y: f64, _options: &CurveOptions) -> f64 {
        if y <= 0.04045 {
            y / 12.92
        } else {
            ((y + 0.055) / 1.055).powf(2.4)
        }
    }
}
