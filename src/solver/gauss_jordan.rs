//! In-place Gauss–Jordan elimination with full pivoting.
//!
//! Inverts a square matrix in place and, in the same sweep, transforms any
//! number of companion right-hand-side matrices `B₁…Bₖ` into `A⁻¹Bᵢ`.
//!
//! Each step selects the largest-modulus entry among the unused rows and
//! columns. Rows and columns are never physically swapped: the pivot
//! positions `(p_k, q_k)` are recorded and a single scatter at the end restores
//! the natural ordering,
//!
//! ```text
//! A⁻¹[q_k][p_m] = T[p_k][q_m],      X[q_k][·] = B'[p_k][·]
//! ```
//!
//! where `T` and `B'` are the buffers after the last elimination step. The
//! product of the pivots times the sign of the row→column pivot permutation is
//! the determinant of the input, which [`Elimination::determinant`] exposes.
//!
//! # Usage
//! - `DenseMatrix::invert` / `invert_with` for in-place inversion.
//! - `DenseMatrix::solve_in_place` to invert and solve one companion at once.
//! - [`gauss_jordan`] for any number of companions.
//! - [`GaussJordanSolver`] for repeated vector solves against one matrix.
//!
//! # References
//! - Press et al., Numerical Recipes, §2.1
//! - Golub & Van Loan, Matrix Computations, §3.4

use crate::config::options::EliminationOptions;
use crate::core::traits::Scalar;
use crate::error::{MatError, Result};
use crate::matrix::DenseMatrix;
use crate::parallel::for_each_row;
use crate::solver::LinearSolver;
use crate::utils::pivot::{find_pivot, is_even_permutation, max_modulus, square_order};
use num_traits::ToPrimitive;

/// Record of a completed elimination.
#[derive(Debug, Clone, PartialEq)]
pub struct Elimination<T> {
    pivots: Vec<(usize, usize)>,
    pivot_values: Vec<T>,
    even: bool,
}

impl<T: Scalar> Elimination<T> {
    /// Pivot positions `(row, col)` in selection order.
    pub fn pivots(&self) -> &[(usize, usize)] {
        &self.pivots
    }

    /// Pivot values in selection order.
    pub fn pivot_values(&self) -> &[T] {
        &self.pivot_values
    }

    /// +1 or -1: parity of the row→column pivot permutation.
    pub fn permutation_sign(&self) -> i8 {
        if self.even { 1 } else { -1 }
    }

    /// Determinant of the eliminated matrix as it was before elimination.
    pub fn determinant(&self) -> T {
        let prod = self
            .pivot_values
            .iter()
            .fold(T::one(), |acc, &p| acc * p);
        if self.even { prod } else { -prod }
    }
}

/// Eliminate the row-major `n x n` buffer `a` in place.
///
/// `threshold` is the resolved near-zero pivot bound: a pivot whose modulus is
/// not strictly above it (or is NaN) stops the sweep with `SingularMatrix`.
/// On success `a` holds the inverse and each companion its solve result.
pub(crate) fn eliminate<T: Scalar>(
    a: &mut [T],
    n: usize,
    companions: &mut [&mut DenseMatrix<T>],
    threshold: T::Real,
    parallel: bool,
) -> Result<Elimination<T>> {
    let mut used_rows = vec![false; n];
    let mut used_cols = vec![false; n];
    let mut pivots = Vec::with_capacity(n);
    let mut pivot_values = Vec::with_capacity(n);
    let mut factors = vec![T::zero(); n];

    for step in 0..n {
        let cand = find_pivot(a, n, &used_rows, &used_cols);
        let cand = match cand {
            Some(c) if c.modulus > threshold => c,
            other => {
                let pivot_modulus = other
                    .and_then(|c| c.modulus.to_f64())
                    .unwrap_or(f64::NAN);
                log::debug!(
                    "gauss_jordan: singular at step {step}/{n}, pivot modulus {pivot_modulus:e}"
                );
                return Err(MatError::SingularMatrix { step, pivot_modulus });
            }
        };
        let (p, q) = (cand.row, cand.col);
        log::trace!("gauss_jordan: step {step} pivot ({p}, {q}) modulus {:?}", cand.modulus);
        used_rows[p] = true;
        used_cols[q] = true;

        let piv = a[p * n + q];
        let inv = T::one() / piv;

        // pivot row: entry q becomes 1/piv, the rest are scaled
        let prow = &mut a[p * n..(p + 1) * n];
        prow[q] = T::one();
        prow.iter_mut().for_each(|v| *v = *v * inv);
        let pivot_row = prow.to_vec();

        for (i, f) in factors.iter_mut().enumerate() {
            *f = if i == p { T::zero() } else { a[i * n + q] };
        }

        for_each_row(a, n, parallel, |i, row| {
            let f = factors[i];
            if i == p || f.is_zero() {
                return;
            }
            row[q] = T::zero();
            for (v, &pv) in row.iter_mut().zip(&pivot_row) {
                *v = *v - f * pv;
            }
        });

        for b in companions.iter_mut() {
            let m = b.ncols();
            let data = b.as_mut_slice();
            let brow = &mut data[p * m..(p + 1) * m];
            brow.iter_mut().for_each(|v| *v = *v * inv);
            let brow = brow.to_vec();
            for_each_row(data, m, parallel, |i, row| {
                let f = factors[i];
                if i == p || f.is_zero() {
                    return;
                }
                for (v, &bv) in row.iter_mut().zip(&brow) {
                    *v = *v - f * bv;
                }
            });
        }

        pivots.push((p, q));
        pivot_values.push(piv);
    }

    unpermute(a, n, &pivots);
    for b in companions.iter_mut() {
        let m = b.ncols();
        let data = b.as_mut_slice();
        let old = data.to_vec();
        for &(p, q) in &pivots {
            data[q * m..(q + 1) * m].copy_from_slice(&old[p * m..(p + 1) * m]);
        }
    }

    let mut perm = vec![0usize; n];
    for &(p, q) in &pivots {
        perm[p] = q;
    }
    Ok(Elimination {
        even: is_even_permutation(&perm),
        pivots,
        pivot_values,
    })
}

fn unpermute<T: Scalar>(a: &mut [T], n: usize, pivots: &[(usize, usize)]) {
    let mut out = vec![T::zero(); n * n];
    for &(pk, qk) in pivots {
        for &(pm, qm) in pivots {
            out[qk * n + pm] = a[pk * n + qm];
        }
    }
    a.copy_from_slice(&out);
}

/// Invert `a` in place and transform every companion `Bᵢ` into `A⁻¹Bᵢ`.
///
/// Shapes are validated before anything is written: `a` must be square
/// (`NotSquare`) and every companion must have `a.nrows()` rows
/// (`DimensionMismatch`). On `SingularMatrix` the contents of `a` and of the
/// companions are unspecified and must not be used.
pub fn gauss_jordan<T: Scalar>(
    a: &mut DenseMatrix<T>,
    companions: &mut [&mut DenseMatrix<T>],
    opts: &EliminationOptions<T::Real>,
) -> Result<Elimination<T>> {
    let n = square_order(&*a)?;
    for b in companions.iter() {
        if b.nrows() != n {
            return Err(MatError::DimensionMismatch {
                expected: n,
                found: b.nrows(),
            });
        }
    }
    let threshold = opts.pivot_tolerance.threshold(max_modulus(a.as_slice()));
    let parallel = n >= opts.parallel_threshold;
    if parallel {
        log::debug!("gauss_jordan: order {n}, parallel row updates");
    }
    eliminate(a.as_mut_slice(), n, companions, threshold, parallel)
}

impl<T: Scalar> DenseMatrix<T> {
    /// Replace `self` with its inverse using the default options.
    pub fn invert(&mut self) -> Result<Elimination<T>> {
        self.invert_with(&EliminationOptions::default())
    }

    pub fn invert_with(&mut self, opts: &EliminationOptions<T::Real>) -> Result<Elimination<T>> {
        gauss_jordan(self, &mut [], opts)
    }

    /// Inverse of a copy; `self` is left untouched.
    pub fn inverse(&self) -> Result<DenseMatrix<T>> {
        let mut inv = self.clone();
        inv.invert()?;
        Ok(inv)
    }

    /// Replace `self` with its inverse and `rhs` with `A⁻¹ · rhs`.
    pub fn solve_in_place(&mut self, rhs: &mut DenseMatrix<T>) -> Result<Elimination<T>> {
        gauss_jordan(self, &mut [rhs], &EliminationOptions::default())
    }

    /// `A⁻¹ · rhs` without touching either operand.
    pub fn solve(&self, rhs: &DenseMatrix<T>) -> Result<DenseMatrix<T>> {
        let mut a = self.clone();
        let mut x = rhs.clone();
        a.solve_in_place(&mut x)?;
        Ok(x)
    }
}

/// Gauss–Jordan solver for `A x = b`.
///
/// Stores the inverse of the last matrix for reuse through
/// [`GaussJordanSolver::solve_cached`].
pub struct GaussJordanSolver<T: Scalar> {
    opts: EliminationOptions<T::Real>,
    inverse: Option<DenseMatrix<T>>,
}

impl<T: Scalar> GaussJordanSolver<T> {
    /// Create a new solver (no inverse cached yet).
    pub fn new() -> Self {
        Self::with_options(EliminationOptions::default())
    }

    pub fn with_options(opts: EliminationOptions<T::Real>) -> Self {
        GaussJordanSolver { opts, inverse: None }
    }

    /// The cached inverse, if a solve has succeeded.
    pub fn inverse(&self) -> Option<&DenseMatrix<T>> {
        self.inverse.as_ref()
    }

    /// Solve with the cached inverse.
    ///
    /// # Arguments
    /// * `b` - Right-hand side vector
    /// * `x` - Output vector (solution)
    pub fn solve_cached(&self, b: &[T], x: &mut [T]) -> Result<()> {
        let inv = self.inverse.as_ref().ok_or(MatError::InvalidArgument(
            "solve_cached called before a successful solve",
        ))?;
        if b.len() != inv.ncols() || x.len() != inv.nrows() {
            return Err(MatError::DimensionMismatch {
                expected: inv.ncols(),
                found: if b.len() != inv.ncols() { b.len() } else { x.len() },
            });
        }
        for (xi, row) in x.iter_mut().zip(inv.rows()) {
            *xi = row
                .iter()
                .zip(b)
                .fold(T::zero(), |acc, (&a, &bj)| acc + a * bj);
        }
        Ok(())
    }
}

impl<T: Scalar> Default for GaussJordanSolver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> LinearSolver<DenseMatrix<T>, Vec<T>> for GaussJordanSolver<T> {
    type Error = MatError;
    type Report = Elimination<T>;

    /// Solve Ax = b by inverting a copy of `a` with full pivoting.
    ///
    /// # Arguments
    /// * `a` - Square matrix
    /// * `b` - Right-hand side vector
    /// * `x` - On input: ignored; on output: solution vector
    fn solve(&mut self, a: &DenseMatrix<T>, b: &Vec<T>, x: &mut Vec<T>) -> Result<Elimination<T>> {
        let n = square_order(a)?;
        if b.len() != n {
            return Err(MatError::DimensionMismatch {
                expected: n,
                found: b.len(),
            });
        }
        self.inverse = None;
        let mut inv = a.clone();
        let mut rhs = DenseMatrix::from_row_major(n, 1, b.clone())?;
        let report = gauss_jordan(&mut inv, &mut [&mut rhs], &self.opts)?;
        *x = rhs.into_vec();
        self.inverse = Some(inv);
        Ok(report)
    }
}
