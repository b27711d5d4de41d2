//! Transfer function interface.

/// Code-value bit depth for curves that quantise to integer signal levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    Ten,
    Twelve,
}

/// Per-curve options forwarded through the registry dispatch.
#[derive(Debug, Clone, Copy)]
pub struct CurveOptions {
    /// Bit depth for quantising curves (ACESproxy).
    pub bit_depth: BitDepth,
    /// Clamp encode input into the curve's domain instead of extrapolating.
    pub clip: bool,
}

impl Default for CurveOptions {
    fn default() -> Self {
        Self {
            bit_depth: BitDepth::Ten,
            clip: false,
        }
    }
}

/// An encode/decode transfer curve pair.
///
/// Curves operate element-wise: `encode`/`decode` take one value, the
/// `_slice` methods map whole buffers. Implementations are pure and
/// thread-safe; the registry shares them behind `Arc`.
///
/// Reciprocity contract: unless [`reciprocal`](Self::reciprocal) is false,
/// `decode(encode(x))` recovers `x` to
/// [`reciprocal_decimals`](Self::reciprocal_decimals) decimal digits for
/// every `x` in `[0, domain_upper]`. The domain upper bound is curve
/// metadata, not a universal constant: log curves are reciprocal out to
/// 65504 (half-float max), PQ out to its 10000 cd/m² peak, display curves
/// over the signal range [0, 1].
pub trait TransferFunction: Send + Sync {
    fn name(&self) -> &'static str;

    /// Encodes a linear value into the curve's signal representation.
    fn encode(&self, x: f64, options: &CurveOptions) -> f64;

    /// Decodes a signal value back to the linear representation.
    fn decode(&self, y: f64, options: &CurveOptions) -> f64;

    /// Upper bound of the curve's practical reciprocal domain.
    fn domain_upper(&self) -> f64 {
        1.0
    }

    /// Decimal digits to which decode(encode(x)) recovers x.
    fn reciprocal_decimals(&self) -> u32 {
        7
    }

    /// False for curves whose encoding is inherently lossy.
    fn reciprocal(&self) -> bool {
        true
    }

    fn encode_slice(&self, values: &[f64], options: &CurveOptions) -> Vec<f64> {
        values.iter().map(|&x| self.encode(x, options)).collect()
    }

    fn decode_slice(&self, values: &[f64], options: &CurveOptions) -> Vec<f64> {
        values.iter().map(|&y| self.decode(y, options)).collect()
    }
}
