//! CIE standard illuminant chromaticity coordinates.
//!
//! Whitepoints are keyed by (standard observer, illuminant) the way the
//! CIE publishes them; values follow CIE 15:2004. The table is static and
//! read-only; lookups copy the coordinates out.

use crate::colour_model::common::error::{ColourError, Result};
use crate::colour_model::derivation::types::Chromaticity;

pub const OBSERVER_2_DEGREE: &str = "CIE 1931 2 Degree Standard Observer";
pub const OBSERVER_10_DEGREE: &str = "CIE 1964 10 Degree Standard Observer";

const ILLUMINANTS_2_DEGREE: &[(&str, Chromaticity)] = &[
    ("A", Chromaticity::new(0.44757, 0.40745)),
    ("B", Chromaticity::new(0.34842, 0.35161)),
    ("C", Chromaticity::new(0.31006, 0.31616)),
    ("D50", Chromaticity::new(0.34567, 0.35850)),
    ("D55", Chromaticity::new(0.33242, 0.34743)),
    ("D60", Chromaticity::new(0.32168, 0.33767)),
    ("D65", Chromaticity::new(0.31271, 0.32902)),
    ("D75", Chromaticity::new(0.29902, 0.31485)),
    ("E", Chromaticity::new(1.0 / 3.0, 1.0 / 3.0)),
];

const ILLUMINANTS_10_DEGREE: &[(&str, Chromaticity)] = &[
    ("A", Chromaticity::new(0.45117, 0.40594)),
    ("B", Chromaticity::new(0.34980, 0.35270)),
    ("C", Chromaticity::new(0.31039, 0.31905)),
    ("D50", Chromaticity::new(0.34773, 0.35952)),
    ("D55", Chromaticity::new(0.33411, 0.34877)),
    ("D65", Chromaticity::new(0.31382, 0.33100)),
    ("D75", Chromaticity::new(0.29968, 0.31740)),
    ("E", Chromaticity::new(1.0 / 3.0, 1.0 / 3.0)),
];

/// Looks up the whitepoint chromaticity of an illuminant under a standard
/// observer.
///
/// Fails with [`ColourError::UnknownIlluminant`] when the observer or the
/// illuminant is not catalogued.
pub fn whitepoint(observer: &str, illuminant: &str) -> Result<Chromaticity> {
    let table = match observer {
        OBSERVER_2_DEGREE => ILLUMINANTS_2_DEGREE,
        OBSERVER_10_DEGREE => ILLUMINANTS_10_DEGREE,
        _ => {
            return Err(ColourError::UnknownIlluminant(
                observer.to_string(),
                illuminant.to_string(),
            ));
        }
    };

    table
        .iter()
        .find(|(name, _)| *name == illuminant)
        .map(|(_, coordinates)| *coordinates)
        .ok_or_else(|| {
            ColourError::UnknownIlluminant(observer.to_string(), illuminant.to_string())
        })
}
