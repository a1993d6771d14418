//! Core traits and scalar-contract implementations.

pub mod traits;
pub mod wrappers;

pub use traits::{MatShape, MatVec, Norms, Scalar};
