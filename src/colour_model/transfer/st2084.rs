//! SMPTE ST 2084 (PQ) electro-optical transfer function.
//!
//! Reference: SMPTE ST 2084:2014. Luminance is in cd/m² with a 10000 cd/m²
//! peak; the constants are the exact rationals from the standard.

use crate::colour_model::transfer::function::{CurveOptions, TransferFunction};

pub(crate) const M1: f64 = 2610.0 / 16384.0;
pub(crate) const M2: f64 = 2523.0 / 4096.0 * 128.0;
pub(crate) const C1: f64 = 3424.0 / 4096.0;
pub(crate) const C2: f64 = 2413.0 / 4096.0 * 32.0;
pub(crate) const C3: f64 = 2392.0 / 4096.0 * 32.0;

pub(crate) const PEAK_LUMINANCE: f64 = 10000.0;

/// Display luminance (cd/m²) to PQ signal.
pub(crate) fn eotf_inverse(l: f64) -> f64 {
    let y = (l / PEAK_LUMINANCE).powf(M1);
    ((C1 + C2 * y) / (1.0 + C3 * y)).powf(M2)
}

/// PQ signal to display luminance (cd/m²).
pub(crate) fn eotf(v: f64) -> f64 {
    let v = v.powf(1.0 / M2);
    PEAK_LUMINANCE * ((v - C1).max(0.0) / (C2 - C3 * v)).powf(1.0 / M1)
}

pub struct St2084;

impl TransferFunction for St2084 {
    fn name(&self) -> &'static str {
        "SMPTE ST 2084"
    }

    fn encode(&self, x: f64, options: &CurveOptions) -> f64 {
        let x = if options.clip {
            x.clamp(0.0, PEAK_LUMINANCE)
        } else {
            x
        };
        eotf_inverse(x)
    }

    fn decode(&self, y: f64, _options: &CurveOptions) -> f64 {
        eotf(y)
    }

    fn domain_upper(&self) -> f64 {
        PEAK_LUMINANCE
    }
}
