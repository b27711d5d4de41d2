//! ACES logarithmic transfer characteristics.
//!
//! References: Academy S-2014-003 (ACEScc), S-2016-001 (ACEScct),
//! S-2013-001 (ACESproxy).

use crate::colour_model::transfer::function::{BitDepth, CurveOptions, TransferFunction};

/// Largest half-float value, the upper end of the ACES log domains.
const HALF_MAX: f64 = 65504.0;

/// ACEScc log encoding.
pub struct AcesCc;

impl TransferFunction for AcesCc {
    fn name(&self) -> &'static str {
        "ACEScc"
    }

    fn encode(&self, x: f64, options: &CurveOptions) -> f64 {
        let x = if options.clip {
            x.clamp(0.0, HALF_MAX)
        } else {
            x
        };
        if x <= 0.0 {
            (2.0_f64.powi(-16).log2() + 9.72) / 17.52
        } else if x < 2.0_f64.powi(-15) {
            ((2.0_f64.powi(-16) + x * 0.5).log2() + 9.72) / 17.52
        } else {
            (x.log2() + 9.72) / 17.52
        }
    }

    fn decode(&self, y: f64, _options: &CurveOptions) -> f64 {
        if y < (9.72 - 15.0) / 17.52 {
            (2.0_f64.powf(y * 17.52 - 9.72) - 2.0_f64.powi(-16)) * 2.0
        } else if y < (HALF_MAX.log2() + 9.72) / 17.52 {
            2.0_f64.powf(y * 17.52 - 9.72)
        } else {
            HALF_MAX
        }
    }

    fn domain_upper(&self) -> f64 {
        HALF_MAX
    }
}

const ACESCCT_SLOPE: f64 = 10.5402377416545;
const ACESCCT_OFFSET: f64 = 0.0729055341958355;
const ACESCCT_LINEAR_CUT: f64 = 0.0078125;
const ACESCCT_LOG_CUT: f64 = 0.155251141552511;

/// ACEScct log encoding: ACEScc with a linear toe below 0.0078125.
pub struct AcesCct;

impl TransferFunction for AcesCct {
    fn name(&self) -> &'static str {
        "ACEScct"
    }

    fn encode(&self, x: f64, options: &CurveOptions) -> f64 {
        let x = if options.clip {
            x.clamp(0.0, HALF_MAX)
        } else {
            x
        };
        if x <= ACESCCT_LINEAR_CUT {
            ACESCCT_SLOPE * x + ACESCCT_OFFSET
        } else {
            (x.log2() + 9.72) / 17.52
        }
    }

    fn decode(&self, y: f64, _options: &CurveOptions) -> f64 {
        if y <= ACESCCT_LOG_CUT {
            (y - ACESCCT_OFFSET) / ACESCCT_SLOPE
        } else {
            2.0_f64.powf(y * 17.52 - 9.72)
        }
    }

    fn domain_upper(&self) -> f64 {
        HALF_MAX
    }
}

/// ACESproxy log encoding, quantised to 10 or 12 bit code values and
/// normalised by the full code range. The quantisation makes the curve
/// non-reciprocal; it stays on the registry's reciprocity ignore-list.
pub struct AcesProxy;

struct ProxyConstants {
    cv_min: f64,
    cv_max: f64,
    steps_per_stop: f64,
    mid_cv_offset: f64,
    full_range: f64,
}

fn proxy_constants(bit_depth: BitDepth) -> ProxyConstants {
    match bit_depth {
        BitDepth::Ten => ProxyConstants {
            cv_min: 64.0,
            cv_max: 940.0,
            steps_per_stop: 50.0,
            mid_cv_offset: 425.0,
            full_range: 1023.0,
        },
        BitDepth::Twelve => ProxyConstants {
            cv_min: 256.0,
            cv_max: 3760.0,
            steps_per_stop: 200.0,
            mid_cv_offset: 1700.0,
            full_range: 4095.0,
        },
    }
}

const PROXY_MID_LOG_OFFSET: f64 = 2.5;

impl TransferFunction for AcesProxy {
    fn name(&self) -> &'static str {
        "ACESproxy"
    }

    fn encode(&self, x: f64, options: &CurveOptions) -> f64 {
        let c = proxy_constants(options.bit_depth);
        let cv = if x > 2.0_f64.powf(-9.72) {
            ((x.log2() + PROXY_MID_LOG_OFFSET) * c.steps_per_stop + c.mid_cv_offset)
                .round()
                .clamp(c.cv_min, c.cv_max)
        } else {
            c.cv_min
        };
        cv / c.full_range
    }

    fn decode(&self, y: f64, options: &CurveOptions) -> f64 {
        let c = proxy_constants(options.bit_depth);
        2.0_f64.powf((y * c.full_range - c.mid_cv_offset) / c.steps_per_stop - PROXY_MID_LOG_OFFSET)
    }

    fn domain_upper(&self) -> f64 {
        HALF_MAX
    }

    fn reciprocal(&self) -> bool {
        false
    }
}
