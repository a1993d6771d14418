//! Pivot search and permutation bookkeeping for full-pivoting elimination.

use crate::core::traits::{MatShape, Scalar};
use crate::error::{MatError, Result};
use num_traits::{Float, Zero};

/// Location and modulus of a selected pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotCandidate<R> {
    pub row: usize,
    pub col: usize,
    pub modulus: R,
}

/// Scan the unreduced sub-block of a row-major `n x n` buffer for the entry of
/// largest modulus.
///
/// Rows and columns flagged in `used_rows` / `used_cols` are skipped. Ties keep
/// the first candidate in row-major order, so the choice never depends on
/// anything but the data. Returns `None` when no candidate remains.
pub fn find_pivot<T: Scalar>(
    data: &[T],
    n: usize,
    used_rows: &[bool],
    used_cols: &[bool],
) -> Option<PivotCandidate<T::Real>> {
    let mut best: Option<PivotCandidate<T::Real>> = None;
    for (i, row) in data.chunks_exact(n.max(1)).take(n).enumerate() {
        if used_rows[i] {
            continue;
        }
        for (j, &v) in row.iter().enumerate() {
            if used_cols[j] {
                continue;
            }
            let m = v.modulus();
            match best {
                Some(b) if !(m > b.modulus) => {}
                _ => best = Some(PivotCandidate { row: i, col: j, modulus: m }),
            }
        }
    }
    best
}

/// Largest entry modulus of a buffer; zero when empty.
pub fn max_modulus<T: Scalar>(data: &[T]) -> T::Real {
    data.iter()
        .map(|v| v.modulus())
        .fold(<T::Real as Zero>::zero(), |acc, m| acc.max(m))
}

/// `true` when the permutation `perm` (perm[i] = image of i) is even.
///
/// Counts transpositions through the cycle decomposition: a cycle of length
/// `k` contributes `k - 1` swaps.
pub fn is_even_permutation(perm: &[usize]) -> bool {
    let mut seen = vec![false; perm.len()];
    let mut swaps = 0usize;
    for start in 0..perm.len() {
        if seen[start] {
            continue;
        }
        let mut len = 0usize;
        let mut k = start;
        while !seen[k] {
            seen[k] = true;
            k = perm[k];
            len += 1;
        }
        swaps += len - 1;
    }
    swaps % 2 == 0
}

/// Order of a square operand, or `NotSquare`.
pub fn square_order<M: MatShape + ?Sized>(m: &M) -> Result<usize> {
    if m.nrows() != m.ncols() {
        return Err(MatError::NotSquare {
            nrows: m.nrows(),
            ncols: m.ncols(),
        });
    }
    Ok(m.nrows())
}
