//! Direct dense solvers: Gauss–Jordan elimination and determinants.

/// Common interface for direct solvers of `A·x = b`.
pub trait LinearSolver<M, V> {
    type Error;
    /// Per-solve diagnostics returned on success.
    type Report;
    /// Solve A·x = b, writing result into `x`.
    fn solve(&mut self, a: &M, b: &V, x: &mut V) -> Result<Self::Report, Self::Error>;
}

pub mod gauss_jordan;
pub use gauss_jordan::{Elimination, GaussJordanSolver, gauss_jordan};

pub mod determinant;
