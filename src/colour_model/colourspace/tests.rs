#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use nalgebra::Matrix3;

    use crate::colour_model::colourspace::descriptor::RgbColourspace;
    use crate::colour_model::colourspace::russell::{RUSSELL_RGB_PRIMARIES, russell_rgb};
    use crate::colour_model::common::error::ColourError;
    use crate::colour_model::derivation::types::{Chromaticity, Primaries};
    use crate::colour_model::transfer::{Gamma, Srgb};

    #[test]
    fn test_russell_rgb_descriptor() {
        let colourspace = russell_rgb();

        assert_eq!(colourspace.name(), "Russell RGB");
        assert_eq!(colourspace.primaries(), &RUSSELL_RGB_PRIMARIES);
        assert_eq!(colourspace.whitepoint(), &Chromaticity::new(0.33242, 0.34743));
        assert_eq!(colourspace.transfer().name(), "Gamma 2.2");

        let expected = Matrix3::new(
            0.7015722048, 0.1554169841, 0.0998078638, //
            0.3151991065, 0.6648393208, 0.0199615728, //
            0.0000000000, 0.0431713845, 0.8783092016,
        );
        let npm = colourspace.matrix_rgb_to_xyz();
        for row in 0..3 {
            for col in 0..3 {
                assert!((npm[(row, col)] - expected[(row, col)]).abs() < 1e-7);
            }
        }

        let product = npm * colourspace.matrix_xyz_to_rgb();
        for row in 0..3 {
            for col in 0..3 {
                let identity = if row == col { 1.0 } else { 0.0 };
                assert!((product[(row, col)] - identity).abs() < 1e-7);
            }
        }
    }

    #[test]
    fn test_russell_rgb_is_shared() {
        let first = russell_rgb() as *const RgbColourspace;
        let second = russell_rgb() as *const RgbColourspace;
        assert_eq!(first, second);
    }

    #[test]
    fn test_descriptor_transfer_roundtrip() {
        let colourspace = russell_rgb();
        let encoded = colourspace.encode(0.5);
        assert!((encoded - 0.5_f64.powf(1.0 / 2.2)).abs() < 1e-14);
        assert!((colourspace.decode(encoded) - 0.5).abs() < 1e-14);
    }

    #[test]
    fn test_custom_descriptor() {
        let primaries = Primaries::new(
            Chromaticity::new(0.64, 0.33),
            Chromaticity::new(0.30, 0.60),
            Chromaticity::new(0.15, 0.06),
        );
        let d65 = Chromaticity::new(0.31271, 0.32902);
        let colourspace =
            RgbColourspace::new("sRGB", primaries, d65, Arc::new(Srgb)).unwrap();

        let expected = Matrix3::new(
            0.4123865633, 0.3575914909, 0.1804504912, //
            0.2126368217, 0.7151829818, 0.0721801965, //
            0.0193306202, 0.1191971636, 0.9503725870,
        );
        let npm = colourspace.matrix_rgb_to_xyz();
        for row in 0..3 {
            for col in 0..3 {
                assert!((npm[(row, col)] - expected[(row, col)]).abs() < 1e-7);
            }
        }
    }

    #[test]
    fn test_degenerate_primaries_fail_construction() {
        let primaries = Primaries::new(
            Chromaticity::new(0.64, 0.33),
            Chromaticity::new(0.30, 0.0),
            Chromaticity::new(0.15, 0.06),
        );
        let result = RgbColourspace::new(
            "broken",
            primaries,
            Chromaticity::new(0.31271, 0.32902),
            Arc::new(Gamma::new("Gamma 2.2", 2.2)),
        );
        assert!(matches!(
            result.unwrap_err(),
            ColourError::DegenerateInput(_)
        ));
    }
}
