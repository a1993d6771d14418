//! Determinants of square matrices.
//!
//! Orders 0 to 3 use the closed-form expansion. Larger matrices are reduced on
//! a scratch copy by forward elimination with the same full-pivoting rule as
//! [`super::gauss_jordan`]: only the unreduced block is updated and nothing is
//! back-substituted, so a determinant costs about a third of an inversion. The
//! result is the product of the pivots times the sign of the pivot
//! permutation. An exactly zero pivot yields a zero determinant, and a NaN
//! entry that reaches a pivot yields NaN.

use crate::core::traits::Scalar;
use crate::error::Result;
use crate::matrix::DenseMatrix;
use crate::utils::pivot::{find_pivot, is_even_permutation, square_order};
use num_traits::{Float, Zero};

/// Closed-form determinant of a row-major `n x n` buffer, `n <= 3`.
pub(crate) fn det_closed_form<T: Scalar>(a: &[T], n: usize) -> Option<T> {
    match n {
        0 => Some(T::one()),
        1 => Some(a[0]),
        2 => Some(a[0] * a[3] - a[1] * a[2]),
        3 => Some(
            a[0] * (a[4] * a[8] - a[5] * a[7]) - a[1] * (a[3] * a[8] - a[5] * a[6])
                + a[2] * (a[3] * a[7] - a[4] * a[6]),
        ),
        _ => None,
    }
}

/// Determinant of a row-major `n x n` buffer; `a` is not modified.
pub(crate) fn det_of_buffer<T: Scalar>(a: &[T], n: usize) -> T {
    match det_closed_form(a, n) {
        Some(d) => d,
        None => det_by_elimination(&mut a.to_vec(), n),
    }
}

fn det_by_elimination<T: Scalar>(a: &mut [T], n: usize) -> T {
    let mut used_rows = vec![false; n];
    let mut used_cols = vec![false; n];
    let mut perm = vec![0usize; n];
    let mut det = T::one();

    for step in 0..n {
        let Some(cand) = find_pivot(a, n, &used_rows, &used_cols) else {
            break;
        };
        if cand.modulus.is_nan() {
            log::trace!("determinant: NaN pivot at step {step}");
            return T::from_real(<T::Real as Float>::nan());
        }
        if cand.modulus.is_zero() {
            log::trace!("determinant: zero pivot at step {step}");
            return T::zero();
        }
        let (p, q) = (cand.row, cand.col);
        used_rows[p] = true;
        used_cols[q] = true;
        perm[p] = q;

        let piv = a[p * n + q];
        det = det * piv;
        let pivot_row = a[p * n..(p + 1) * n].to_vec();
        for i in (0..n).filter(|&i| !used_rows[i]) {
            let f = a[i * n + q] / piv;
            if f.is_zero() {
                continue;
            }
            let row = &mut a[i * n..(i + 1) * n];
            for j in (0..n).filter(|&j| !used_cols[j]) {
                row[j] = row[j] - f * pivot_row[j];
            }
        }
    }

    if is_even_permutation(&perm) { det } else { -det }
}

impl<T: Scalar> DenseMatrix<T> {
    /// det(A). Fails with `NotSquare` for rectangular matrices.
    pub fn determinant(&self) -> Result<T> {
        let n = square_order(self)?;
        Ok(det_of_buffer(self.as_slice(), n))
    }
}
