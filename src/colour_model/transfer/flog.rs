//! Fujifilm F-Log transfer characteristics.
//!
//! Reference: the Fujifilm "F-Log Data Sheet". The published encode and
//! decode cut points do not meet exactly (0.00089 in, 0.100538 out), which
//! caps the roundtrip at four decimals inside that narrow band.

use crate::colour_model::transfer::function::{CurveOptions, TransferFunction};

const A: f64 = 0.555556;
const B: f64 = 0.009468;
const C: f64 = 0.344676;
const D: f64 = 0.790453;
const E: f64 = 8.735631;
const F: f64 = 0.092864;
const CUT_1: f64 = 0.00089;
const CUT_2: f64 = 0.100537775223865;

pub struct FLog;

impl TransferFunction for FLog {
    fn name(&self) -> &'static str {
        "F-Log"
    }

    fn encode(&self, x: f64, options: &CurveOptions) -> f64 {
        let x = if options.clip {
            x.clamp(0.0, 65504.0)
        } else {
            x
        };
        if x < CUT_1 {
            E * x + F
        } else {
            C * (A * x + B).log10() + D
        }
    }

    fn decode(&self, y: f64, _options: &CurveOptions) -> f64 {
        if y < CUT_2 {
            (y - F) / E
        } else {
            10.0_f64.powf((y - D) / C) / A - B / A
        }
    }

    fn domain_upper(&self) -> f64 {
        65504.0
    }

    fn reciprocal_decimals(&self) -> u32 {
        4
    }
}
