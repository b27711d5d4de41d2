use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColourError {
    #[error("Degenerate chromaticity coordinates ({0}): y is zero")]
    DegenerateInput(String),

    #[error("Singular matrix, cannot invert: {0}")]
    SingularMatrix(String),

    #[error("Undefined transfer function: {0}")]
    UnknownCurve(String),

    #[error("Undefined illuminant {1:?} for observer {0:?}")]
    UnknownIlluminant(String, String),

    #[error("Sample matrix shapes differ: {0}x{1} vs {2}x{3}")]
    ShapeMismatch(usize, usize, usize, usize),
}

pub type Result<T> = std::result::Result<T, ColourError>;
