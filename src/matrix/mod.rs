//! Matrix module: the owned dense matrix type.

pub mod dense;
pub use dense::DenseMatrix;
