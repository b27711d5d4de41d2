//! The Russell RGB colourspace.
//!
//! Primaries and whitepoint per <http://www.russellcottrell.com/photo/RussellRGB.htm>:
//! a D55 wide-gamut space with a plain 2.2 gamma.

use std::sync::{Arc, OnceLock};

use crate::colour_model::colourspace::descriptor::RgbColourspace;
use crate::colour_model::derivation::types::{Chromaticity, Primaries};
use crate::colour_model::illuminants::{OBSERVER_2_DEGREE, whitepoint};
use crate::colour_model::transfer::Gamma;

pub const RUSSELL_RGB_PRIMARIES: Primaries = Primaries::new(
    Chromaticity::new(0.6900, 0.3100),
    Chromaticity::new(0.1800, 0.7700),
    Chromaticity::new(0.1000, 0.0200),
);

/// The process-wide Russell RGB instance, derived on first access.
pub fn russell_rgb() -> &'static RgbColourspace {
    static RUSSELL_RGB: OnceLock<RgbColourspace> = OnceLock::new();
    RUSSELL_RGB.get_or_init(|| {
        let d55 = whitepoint(OBSERVER_2_DEGREE, "D55")
            .expect("D55 is catalogued for the 2 degree observer");
        RgbColourspace::new(
            "Russell RGB",
            RUSSELL_RGB_PRIMARIES,
            d55,
            Arc::new(Gamma::new("Gamma 2.2", 2.2)),
        )
        .expect("Russell RGB primaries are non-degenerate")
    })
}
