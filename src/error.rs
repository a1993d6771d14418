use thiserror::Error;

// Unified error type for elemat

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatError {
    #[error("invalid dimension: {rows} x {cols} does not fit in memory")]
    InvalidDimension { rows: usize, cols: usize },
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("index ({row}, {col}) out of range for {nrows} x {ncols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    #[error("matrix is not square ({nrows} x {ncols})")]
    NotSquare { nrows: usize, ncols: usize },
    #[error("singular matrix: pivot modulus {pivot_modulus:e} at elimination step {step}")]
    SingularMatrix { step: usize, pivot_modulus: f64 },
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Convenience alias used throughout elemat.
pub type Result<T> = std::result::Result<T, MatError>;
