//! elemat: dense element-matrix and small-tensor kernel
//!
//! This crate provides the dense linear-algebra substrate of a finite-element code:
//! in-place Gauss–Jordan inversion and multi-right-hand-side solves with full pivoting,
//! determinants and norms, generic over real, complex and user-supplied scalar types.

pub mod parallel;

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod solver;
pub mod tensor;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use crate::core::*;
pub use error::*;
pub use matrix::*;
pub use solver::*;
pub use tensor::*;

// Complex scalars are part of the public scalar contract
pub use num_complex::Complex;
