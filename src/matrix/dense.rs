//! Owned, row-major dense matrix.
//!
//! `DenseMatrix<T>` is the runtime-sized container behind element stiffness
//! and mass matrices, Jacobians and their inverses. The buffer always holds
//! exactly `nrows * ncols` entries; `reinit` reallocates and zero-fills.
//! Deep copies go through `Clone`; the in-place kernels in
//! [`crate::solver`] overwrite their operands, so copy first if the original is
//! still needed.

use std::ops::{Index, IndexMut};

use crate::core::traits::{MatShape, Norms, Scalar};
use crate::error::{MatError, Result};
use crate::utils::pivot::{max_modulus, square_order};
use num_traits::{Float, Zero};

#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    nrows: usize,
    ncols: usize,
    data: Vec<T>,
}

fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .ok_or(MatError::InvalidDimension { rows, cols })
}

impl<T: Scalar> DenseMatrix<T> {
    /// Zero-initialized `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        Ok(Self {
            nrows: rows,
            ncols: cols,
            data: vec![T::zero(); len],
        })
    }

    /// Zero-initialized `rows x cols` matrix.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`; use [`DenseMatrix::new`] to
    /// get `InvalidDimension` instead.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        match Self::new(rows, cols) {
            Ok(m) => m,
            Err(e) => panic!("DenseMatrix::zeros: {e}"),
        }
    }

    /// Build from a flat row-major buffer of exactly `rows * cols` values.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        if data.len() != len {
            return Err(MatError::DimensionMismatch {
                expected: len,
                found: data.len(),
            });
        }
        Ok(Self {
            nrows: rows,
            ncols: cols,
            data,
        })
    }

    /// Build by evaluating `f(i, j)` for every entry, row by row.
    ///
    /// # Panics
    /// Panics if `rows * cols` overflows `usize`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let len = match checked_len(rows, cols) {
            Ok(len) => len,
            Err(e) => panic!("DenseMatrix::from_fn: {e}"),
        };
        let mut data = Vec::with_capacity(len);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self {
            nrows: rows,
            ncols: cols,
            data,
        }
    }

    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// `true` when the matrix has no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Bounds-checked read.
    pub fn at(&self, i: usize, j: usize) -> Result<T> {
        self.offset(i, j).map(|k| self.data[k])
    }

    /// Bounds-checked write.
    pub fn set_at(&mut self, i: usize, j: usize, v: T) -> Result<()> {
        let k = self.offset(i, j)?;
        self.data[k] = v;
        Ok(())
    }

    fn offset(&self, i: usize, j: usize) -> Result<usize> {
        if i >= self.nrows || j >= self.ncols {
            return Err(MatError::IndexOutOfRange {
                row: i,
                col: j,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(i * self.ncols + j)
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    /// Panics if `i >= nrows`.
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.nrows, "row {i} out of range for {} rows", self.nrows);
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.nrows).map(move |i| self.row(i))
    }

    /// Reallocate to `rows x cols`, discarding the previous contents.
    pub fn reinit(&mut self, rows: usize, cols: usize) -> Result<()> {
        let len = checked_len(rows, cols)?;
        self.nrows = rows;
        self.ncols = cols;
        self.data = vec![T::zero(); len];
        Ok(())
    }

    pub fn fill(&mut self, value: T) {
        self.data.iter_mut().for_each(|v| *v = value);
    }

    /// Overwrite with the contents of a same-shaped matrix.
    pub fn copy_from(&mut self, other: &DenseMatrix<T>) -> Result<()> {
        self.check_same_shape(other)?;
        self.data.copy_from_slice(&other.data);
        Ok(())
    }

    fn check_same_shape(&self, other: &DenseMatrix<T>) -> Result<()> {
        if self.nrows != other.nrows {
            return Err(MatError::DimensionMismatch {
                expected: self.nrows,
                found: other.nrows,
            });
        }
        if self.ncols != other.ncols {
            return Err(MatError::DimensionMismatch {
                expected: self.ncols,
                found: other.ncols,
            });
        }
        Ok(())
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }

    /// Conjugate transpose.
    pub fn adjoint(&self) -> Self {
        Self::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)].conj())
    }

    /// `self * b`.
    pub fn mmult(&self, b: &DenseMatrix<T>) -> Result<Self> {
        if self.ncols != b.nrows {
            return Err(MatError::DimensionMismatch {
                expected: self.ncols,
                found: b.nrows,
            });
        }
        let mut c = Self::zeros(self.nrows, b.ncols);
        for i in 0..self.nrows {
            for k in 0..self.ncols {
                let aik = self.data[i * self.ncols + k];
                if aik.is_zero() {
                    continue;
                }
                let brow = b.row(k);
                let crow = &mut c.data[i * b.ncols..(i + 1) * b.ncols];
                for (cij, &bkj) in crow.iter_mut().zip(brow) {
                    *cij = *cij + aik * bkj;
                }
            }
        }
        Ok(c)
    }

    /// `selfᵀ * b` (plain transpose, no conjugation).
    pub fn tmmult(&self, b: &DenseMatrix<T>) -> Result<Self> {
        if self.nrows != b.nrows {
            return Err(MatError::DimensionMismatch {
                expected: self.nrows,
                found: b.nrows,
            });
        }
        self.transpose().mmult(b)
    }

    /// `self += a * b`.
    pub fn add_scaled(&mut self, a: T, b: &DenseMatrix<T>) -> Result<()> {
        self.check_same_shape(b)?;
        for (x, &y) in self.data.iter_mut().zip(&b.data) {
            *x = *x + a * y;
        }
        Ok(())
    }

    pub fn scale(&mut self, a: T) {
        self.data.iter_mut().for_each(|v| *v = *v * a);
    }

    pub fn trace(&self) -> Result<T> {
        let n = square_order(self)?;
        Ok((0..n).fold(T::zero(), |acc, i| acc + self.data[i * n + i]))
    }

    /// Largest entry modulus.
    pub fn max_modulus(&self) -> T::Real {
        max_modulus(&self.data)
    }
}

impl<T> MatShape for DenseMatrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }
    fn ncols(&self) -> usize {
        self.ncols
    }
}

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.nrows && j < self.ncols,
            "index ({i}, {j}) out of range for {} x {} matrix",
            self.nrows,
            self.ncols
        );
        &self.data[i * self.ncols + j]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(
            i < self.nrows && j < self.ncols,
            "index ({i}, {j}) out of range for {} x {} matrix",
            self.nrows,
            self.ncols
        );
        &mut self.data[i * self.ncols + j]
    }
}

impl<T: Scalar> Norms for DenseMatrix<T> {
    type Real = T::Real;

    fn l1_norm(&self) -> T::Real {
        let mut sums = vec![<T::Real as Zero>::zero(); self.ncols];
        for row in self.rows() {
            for (s, v) in sums.iter_mut().zip(row) {
                *s = *s + v.modulus();
            }
        }
        sums.into_iter()
            .fold(<T::Real as Zero>::zero(), |acc, s| acc.max(s))
    }

    fn linfty_norm(&self) -> T::Real {
        self.rows()
            .map(|row| {
                row.iter()
                    .fold(<T::Real as Zero>::zero(), |acc, v| acc + v.modulus())
            })
            .fold(<T::Real as Zero>::zero(), |acc, s| acc.max(s))
    }

    fn frobenius_norm(&self) -> T::Real {
        self.data
            .iter()
            .fold(<T::Real as Zero>::zero(), |acc, v| acc + v.modulus_sqr())
            .sqrt()
    }
}
