//! ITU-R BT.2100 PQ and HLG transfer characteristics.
//!
//! Reference: ITU-R BT.2100-2. The PQ curves compose the ST 2084 EOTF with
//! the BT.709 OETF and BT.1886 EOTF as the reference OOTF prescribes; the
//! HLG OOTF is the single-channel luminance form with a 1000 cd/m² nominal
//! peak.

use crate::colour_model::transfer::function::{CurveOptions, TransferFunction};
use crate::colour_model::transfer::{bt1886, bt709, st2084};

/// Scene-light scaling of the PQ reference OOTF, chosen by BT.2100 so that
/// scene light 1.0 maps onto the 10000 cd/m² display peak.
const PQ_OOTF_SCALE: f64 = 59.5208;

/// HLG nominal peak display luminance, cd/m².
const HLG_PEAK_LUMINANCE: f64 = 1000.0;
/// HLG system gamma at nominal peak luminance.
const HLG_GAMMA: f64 = 1.2;

const HLG_A: f64 = 0.17883277;
const HLG_B: f64 = 1.0 - 4.0 * HLG_A;
// c = 0.5 - a * ln(4a), spelled out in BT.2100 as 0.55991073.
const HLG_C: f64 = 0.559910729529562;

fn pq_ootf(e: f64) -> f64 {
    100.0 * bt1886::eotf(bt709::oetf(PQ_OOTF_SCALE * e))
}

fn pq_ootf_inverse(f: f64) -> f64 {
    bt709::oetf_inverse(bt1886::eotf_inverse(f / 100.0)) / PQ_OOTF_SCALE
}

fn hlg_oetf(e: f64) -> f64 {
    if e <= 1.0 / 12.0 {
        (3.0 * e).sqrt()
    } else {
        HLG_A * (12.0 * e - HLG_B).ln() + HLG_C
    }
}

fn hlg_oetf_inverse(v: f64) -> f64 {
    if v <= 0.5 {
        v * v / 3.0
    } else {
        (((v - HLG_C) / HLG_A).exp() + HLG_B) / 12.0
    }
}

fn hlg_ootf(e: f64) -> f64 {
    HLG_PEAK_LUMINANCE * e.powf(HLG_GAMMA)
}

fn hlg_ootf_inverse(f: f64) -> f64 {
    (f / HLG_PEAK_LUMINANCE).powf(1.0 / HLG_GAMMA)
}

/// PQ opto-electronic transfer: scene light [0, 1] to PQ signal.
pub struct Bt2100PqOetf;

impl TransferFunction for Bt2100PqOetf {
    fn name(&self) -> &'static str {
        "ITU-R BT.2100 PQ"
    }

    fn encode(&self, x: f64, options: &CurveOptions) -> f64 {
        let x = if options.clip { x.clamp(0.0, 1.0) } else { x };
        st2084::eotf_inverse(pq_ootf(x))
    }

    fn decode(&self, y: f64, _options: &CurveOptions) -> f64 {
        pq_ootf_inverse(st2084::eotf(y))
    }
}

/// PQ electro-optical transfer: display luminance (cd/m²) as the linear
/// side, PQ signal as the encoded side.
pub struct Bt2100PqEotf;

impl TransferFunction for Bt2100PqEotf {
    fn name(&self) -> &'static str {
        "ITU-R BT.2100 PQ"
    }

    fn encode(&self, x: f64, options: &CurveOptions) -> f64 {
        let x = if options.clip {
            x.clamp(0.0, st2084::PEAK_LUMINANCE)
        } else {
            x
        };
        st2084::eotf_inverse(x)
    }

    fn decode(&self, y: f64, _options: &CurveOptions) -> f64 {
        st2084::eotf(y)
    }

    fn domain_upper(&self) -> f64 {
        st2084::PEAK_LUMINANCE
    }
}

/// PQ reference opto-optical transfer: scene light [0, 1] to display
/// luminance (cd/m²).
pub struct Bt2100PqOotf;

impl TransferFunction for Bt2100PqOotf {
    fn name(&self) -> &'static str {
        "ITU-R BT.2100 PQ"
    }

    fn encode(&self, x: f64, options: &CurveOptions) -> f64 {
        let x = if options.clip { x.clamp(0.0, 1.0) } else { x };
        pq_ootf(x)
    }

    fn decode(&self, y: f64, _options: &CurveOptions) -> f64 {
        pq_ootf_inverse(y)
    }
}

/// HLG opto-electronic transfer: scene light [0, 1] to HLG signal.
pub struct Bt2100HlgOetf;

impl TransferFunction for Bt2100HlgOetf {
    fn name(&self) -> &'static str {
        "ITU-R BT.2100 HLG"
    }

    fn encode(&self, x: f64, options: &CurveOptions) -> f64 {
        let x = if options.clip { x.clamp(0.0, 1.0) } else { x };
        hlg_oetf(x)
    }

    fn decode(&self, y: f64, _options: &CurveOptions) -> f64 {
        hlg_oetf_inverse(y)
    }
}

/// HLG electro-optical transfer: display luminance (cd/m²) as the linear
/// side, HLG signal as the encoded side.
pub struct Bt2100HlgEotf;

impl TransferFunction for Bt2100HlgEotf {
    fn name(&self) -> &'static str {
        "ITU-R BT.2100 HLG"
    }

    fn encode(&self, x: f64, options: &CurveOptions) -> f64 {
        let x = if options.clip {
            x.clamp(0.0, HLG_PEAK_LUMINANCE)
        } else {
            x
        };
        hlg_oetf(hlg_ootf_inverse(x))
    }

    fn decode(&self, y: f64, _options: &CurveOptions) -> f64 {
        hlg_ootf(hlg_oetf_inverse(y))
    }

    fn domain_upper(&self) -> f64 {
        HLG_PEAK_LUMINANCE
    }
}

/// HLG reference opto-optical transfer (luminance form): scene light
/// [0, 1] to display luminance (cd/m²).
pub struct Bt2100HlgOotf;

impl TransferFunction for Bt2100HlgOotf {
    fn name(&self) -> &'static str {
        "ITU-R BT.2100 HLG"
    }

    fn encode(&self, x: f64, options: &CurveOptions) -> f64 {
        let x = if options.clip { x.clamp(0.0, 1.0) } else { x };
        hlg_ootf(x)
    }

    fn decode(&self, y: f64, _options: &CurveOptions) -> f64 {
        hlg_ootf_inverse(y)
    }
}
