//! Scalar-contract implementations and interop wrappers.
//!
//! This module implements [`Scalar`] for the primitive real floats and for
//! `num_complex::Complex`, provides the [`MatVec`] product for [`DenseMatrix`]
//! over plain vectors, and converts between [`DenseMatrix`] (row-major, owned)
//! and `faer::Mat` (column-major) so callers can hand small element matrices to
//! faer's factorizations and back.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)
//! - [num-complex crate documentation](https://docs.rs/num-complex)

use crate::core::traits::{MatVec, Scalar};
use crate::matrix::DenseMatrix;
use faer::Mat;
use num_complex::Complex;

macro_rules! impl_scalar_real {
    ($ty:ty) => {
        impl Scalar for $ty {
            type Real = $ty;

            #[inline]
            fn modulus(self) -> $ty {
                self.abs()
            }
            #[inline]
            fn modulus_sqr(self) -> $ty {
                self * self
            }
            #[inline]
            fn conj(self) -> Self {
                self
            }
            #[inline]
            fn from_real(re: $ty) -> Self {
                re
            }
        }
    };
}

impl_scalar_real!(f32);
impl_scalar_real!(f64);

macro_rules! impl_scalar_complex {
    ($ty:ty) => {
        impl Scalar for Complex<$ty> {
            type Real = $ty;

            #[inline]
            fn modulus(self) -> $ty {
                self.norm()
            }
            #[inline]
            fn modulus_sqr(self) -> $ty {
                self.norm_sqr()
            }
            #[inline]
            fn conj(self) -> Self {
                Complex::conj(&self)
            }
            #[inline]
            fn from_real(re: $ty) -> Self {
                Complex::new(re, 0.0)
            }
        }
    };
}

impl_scalar_complex!(f32);
impl_scalar_complex!(f64);

/// Implements matrix-vector multiplication for [`DenseMatrix`].
///
/// Computes `y = A * x` where `x` and `y` are plain vectors.
impl<T: Scalar> MatVec<Vec<T>> for DenseMatrix<T> {
    fn matvec(&self, x: &Vec<T>, y: &mut Vec<T>) {
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        for (yi, row) in y.iter_mut().zip(self.rows()) {
            *yi = row
                .iter()
                .zip(x.iter())
                .fold(T::zero(), |acc, (&a, &b)| acc + a * b);
        }
    }
}

impl<T: Scalar> DenseMatrix<T> {
    /// Copy into a column-major `faer::Mat`.
    pub fn to_faer(&self) -> Mat<T> {
        Mat::from_fn(self.nrows(), self.ncols(), |i, j| self[(i, j)])
    }

    /// Copy out of a `faer::Mat` into row-major storage.
    pub fn from_faer(m: &Mat<T>) -> Self {
        DenseMatrix::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn complex_modulus_ignores_phase() {
        let a = Complex::new(3.0_f64, 4.0);
        let b = Complex::new(-5.0_f64, 0.0);
        assert_abs_diff_eq!(a.modulus(), 5.0, epsilon = 1e-15);
        assert_abs_diff_eq!(b.modulus(), 5.0, epsilon = 1e-15);
        assert_abs_diff_eq!(a.modulus_sqr(), 25.0, epsilon = 1e-15);
        assert_eq!(Scalar::conj(a), Complex::new(3.0, -4.0));
    }

    #[test]
    fn real_scalar_contract() {
        assert_eq!((-2.5_f32).modulus(), 2.5);
        assert_eq!(Scalar::conj(-2.5_f64), -2.5);
        assert_eq!(<f64 as Scalar>::from_real(1.5), 1.5);
    }

    #[test]
    fn faer_round_trip_keeps_layout() {
        let a = DenseMatrix::from_row_major(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let f = a.to_faer();
        assert_eq!(f.nrows(), 2);
        assert_eq!(f.ncols(), 3);
        assert_eq!(f[(0, 2)], 3.0);
        assert_eq!(f[(1, 0)], 4.0);
        assert_eq!(DenseMatrix::from_faer(&f), a);
    }

    #[test]
    fn matvec_matches_manual_product() {
        let a = DenseMatrix::from_row_major(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let x = vec![1.0, -1.0];
        let mut y = vec![0.0; 2];
        a.matvec(&x, &mut y);
        assert_eq!(y, vec![-1.0, -1.0]);
    }
}
