//! Configuration for the elimination kernels.

pub mod options;
pub use options::{EliminationOptions, PivotTolerance};
