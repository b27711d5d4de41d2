//! Pure power-law transfer characteristics.

use crate::colour_model::transfer::function::{CurveOptions, TransferFunction};

/// Plain gamma curve: encode raises to `1/exponent`, decode to `exponent`.
pub struct Gamma {
    name: &'static str,
    exponent: f64,
}

impl Gamma {
    pub const fn new(name: &'static str, exponent: f64) -> Self {
        Self { name, exponent }
    }
}

impl TransferFunction for Gamma {
    fn name(&self) -> &'static str {
        self.name
    }

    fn encode(&self, x: f64, options: &CurveOptions) -> f64 {
        let x = if options.clip { x.max(0.0) } else { x };
        x.powf(1.0 / self.exponent)
    }

    fn decode(&self, y: f64, _options: &CurveOptions) -> f64 {
        y.powf(self.exponent)
    }
}
