//! Options for the elimination kernels.
//!
//! This module provides the `EliminationOptions` struct, which controls how
//! Gauss–Jordan elimination decides that a matrix is numerically singular and
//! when row updates are handed to the rayon pool. The near-zero pivot threshold
//! can be given as an absolute value or relative to the largest entry of the
//! matrix being eliminated.

use num_traits::{Float, NumCast};

/// How the near-zero pivot threshold is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PivotTolerance<R> {
    /// Pivots with modulus at or below this value are singular.
    Absolute(R),
    /// Threshold is this factor times the largest entry modulus of the input.
    Relative(R),
}

impl<R: Float> PivotTolerance<R> {
    /// Resolve to an absolute threshold for a matrix whose largest entry
    /// modulus is `scale`.
    pub fn threshold(&self, scale: R) -> R {
        match *self {
            PivotTolerance::Absolute(tol) => tol,
            PivotTolerance::Relative(factor) => factor * scale,
        }
    }

    /// Only exactly zero pivots are singular.
    pub fn exact() -> Self {
        PivotTolerance::Absolute(R::zero())
    }
}

impl<R: Float> Default for PivotTolerance<R> {
    fn default() -> Self {
        let factor = <R as NumCast>::from(1000.0).unwrap_or_else(R::one);
        PivotTolerance::Relative(factor * R::epsilon())
    }
}

/// Elimination parameters.
#[derive(Debug, Clone)]
pub struct EliminationOptions<R> {
    /// Near-zero pivot policy (default: relative, 1000·ε).
    pub pivot_tolerance: PivotTolerance<R>,

    /// Smallest matrix order for which row updates run on the rayon pool.
    pub parallel_threshold: usize,
}

impl<R: Float> EliminationOptions<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pivot_tolerance(mut self, tol: PivotTolerance<R>) -> Self {
        self.pivot_tolerance = tol;
        self
    }

    pub fn with_parallel_threshold(mut self, n: usize) -> Self {
        self.parallel_threshold = n;
        self
    }
}

impl<R: Float> Default for EliminationOptions<R> {
    fn default() -> Self {
        Self {
            pivot_tolerance: PivotTolerance::default(),
            parallel_threshold: 128,
        }
    }
}
