//! Shared helpers for the elimination kernels.

pub mod pivot;
pub use pivot::{PivotCandidate, find_pivot, is_even_permutation, max_modulus, square_order};
