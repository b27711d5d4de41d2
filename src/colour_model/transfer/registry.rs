//! Process-wide transfer function registry.
//!
//! Curves register under their standard names in up to five views: log
//! encodings, OETFs, EOTFs, OOTFs and the generic CCTF view used by the
//! [`encoding_cctf`]/[`decoding_cctf`] dispatch. A name may be bound to a
//! different pair per view; "ITU-R BT.2100 PQ" is an OETF pair in the OETF
//! view and an EOTF pair in the EOTF view. The registry is built once on
//! first access and never mutated, so concurrent readers share it freely.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use tracing::warn;

use crate::colour_model::common::error::{ColourError, Result};
use crate::colour_model::transfer::aces::{AcesCc, AcesCct, AcesProxy};
use crate::colour_model::transfer::bt1886::Bt1886Eotf;
use crate::colour_model::transfer::bt2100::{
    Bt2100HlgEotf, Bt2100HlgOetf, Bt2100HlgOotf, Bt2100PqEotf, Bt2100PqOetf, Bt2100PqOotf,
};
use crate::colour_model::transfer::bt709::Bt709Oetf;
use crate::colour_model::transfer::dlog::DLog;
use crate::colour_model::transfer::flog::FLog;
use crate::colour_model::transfer::function::{CurveOptions, TransferFunction};
use crate::colour_model::transfer::gamma::Gamma;
use crate::colour_model::transfer::srgb::Srgb;
use crate::colour_model::transfer::st2084::St2084;

type CurveMap = BTreeMap<&'static str, Arc<dyn TransferFunction>>;

pub struct TransferRegistry {
    log: CurveMap,
    oetf: CurveMap,
    eotf: CurveMap,
    ootf: CurveMap,
    cctf: CurveMap,
}

/// Names that resolve to several pairs and need the CCTF merge order to
/// pick one; the generic dispatch warns when it sees them.
const AMBIGUOUS_NAMES: &[&str] = &["ITU-R BT.2100 PQ", "ITU-R BT.2100 HLG"];

impl TransferRegistry {
    fn build() -> Self {
        fn insert(map: &mut CurveMap, curve: Arc<dyn TransferFunction>) {
            map.insert(curve.name(), curve);
        }

        let mut log = CurveMap::new();
        insert(&mut log, Arc::new(AcesCc));
        insert(&mut log, Arc::new(AcesCct));
        insert(&mut log, Arc::new(AcesProxy));
        insert(&mut log, Arc::new(DLog));
        insert(&mut log, Arc::new(FLog));

        let mut oetf = CurveMap::new();
        insert(&mut oetf, Arc::new(Bt709Oetf));
        insert(&mut oetf, Arc::new(Bt2100PqOetf));
        insert(&mut oetf, Arc::new(Bt2100HlgOetf));

        let mut eotf = CurveMap::new();
        insert(&mut eotf, Arc::new(Bt1886Eotf));
        insert(&mut eotf, Arc::new(St2084));
        insert(&mut eotf, Arc::new(Bt2100PqEotf));
        insert(&mut eotf, Arc::new(Bt2100HlgEotf));

        let mut ootf = CurveMap::new();
        insert(&mut ootf, Arc::new(Bt2100PqOotf));
        insert(&mut ootf, Arc::new(Bt2100HlgOotf));

        // The generic view layers log curves, then OETFs, then EOTF pairs,
        // later entries winning, which resolves the BT.2100 names to their
        // EOTF reading.
        let mut cctf = CurveMap::new();
        insert(&mut cctf, Arc::new(Srgb));
        insert(&mut cctf, Arc::new(Gamma::new("Gamma 2.2", 2.2)));
        insert(&mut cctf, Arc::new(Gamma::new("Gamma 2.4", 2.4)));
        insert(&mut cctf, Arc::new(Gamma::new("Gamma 2.6", 2.6)));
        for (name, curve) in log.iter().chain(oetf.iter()).chain(eotf.iter()) {
            cctf.insert(*name, Arc::clone(curve));
        }

        Self {
            log,
            oetf,
            eotf,
            ootf,
            cctf,
        }
    }

    pub fn log_encodings(&self) -> &CurveMap {
        &self.log
    }

    pub fn oetfs(&self) -> &CurveMap {
        &self.oetf
    }

    pub fn eotfs(&self) -> &CurveMap {
        &self.eotf
    }

    pub fn ootfs(&self) -> &CurveMap {
        &self.ootf
    }

    pub fn cctfs(&self) -> &CurveMap {
        &self.cctf
    }

    /// Resolves a curve name through the generic CCTF view.
    pub fn cctf(&self, name: &str) -> Result<&Arc<dyn TransferFunction>> {
        self.cctf
            .get(name)
            .ok_or_else(|| ColourError::UnknownCurve(name.to_string()))
    }
}

static REGISTRY: OnceLock<TransferRegistry> = OnceLock::new();

pub fn registry() -> &'static TransferRegistry {
    REGISTRY.get_or_init(TransferRegistry::build)
}

fn warn_if_ambiguous(name: &str, direction: &str) {
    if AMBIGUOUS_NAMES.contains(&name) {
        warn!(
            "\"{}\" names both an OETF and an EOTF; {} uses its EOTF reading",
            name, direction
        );
    }
}

/// Encodes a linear value with the named curve.
pub fn encoding_cctf(value: f64, curve: &str, options: &CurveOptions) -> Result<f64> {
    warn_if_ambiguous(curve, "encoding");
    Ok(registry().cctf(curve)?.encode(value, options))
}

/// Decodes an encoded value with the named curve.
pub fn decoding_cctf(value: f64, curve: &str, options: &CurveOptions) -> Result<f64> {
    warn_if_ambiguous(curve, "decoding");
    Ok(registry().cctf(curve)?.decode(value, options))
}

/// Bulk variant of [`encoding_cctf`].
pub fn encoding_cctf_slice(values: &[f64], curve: &str, options: &CurveOptions) -> Result<Vec<f64>> {
    warn_if_ambiguous(curve, "encoding");
    Ok(registry().cctf(curve)?.encode_slice(values, options))
}

/// Bulk variant of [`decoding_cctf`].
pub fn decoding_cctf_slice(values: &[f64], curve: &str, options: &CurveOptions) -> Result<Vec<f64>> {
    warn_if_ambiguous(curve, "decoding");
    Ok(registry().cctf(curve)?.decode_slice(values, options))
}
