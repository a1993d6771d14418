//! Stack-allocated rank-2 tensors of dimension `D x D`.
//!
//! Used for per-quadrature-point quantities such as Jacobians and their
//! inverses. Storage is `[[T; D]; D]` by value, so a tensor never allocates
//! and always holds exactly `D²` entries.

use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use crate::config::options::EliminationOptions;
use crate::core::traits::{MatShape, Norms, Scalar};
use crate::error::{MatError, Result};
use crate::matrix::DenseMatrix;
use crate::solver::determinant::det_of_buffer;
use crate::tensor::rank1::Tensor1;
use crate::utils::pivot::max_modulus;
use num_traits::{Float, ToPrimitive, Zero};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tensor<const D: usize, T> {
    values: [[T; D]; D],
}

impl<const D: usize, T: Scalar> Tensor<D, T> {
    /// Zero-filled tensor.
    #[inline]
    pub fn zero() -> Self {
        Self {
            values: [[T::zero(); D]; D],
        }
    }

    pub fn identity() -> Self {
        let mut t = Self::zero();
        for i in 0..D {
            t.values[i][i] = T::one();
        }
        t
    }

    #[inline]
    pub fn from_rows(values: [[T; D]; D]) -> Self {
        Self { values }
    }

    /// Element-wise assignment from a flat row-major initializer of `D²`
    /// values.
    pub fn from_row_major(data: &[T]) -> Result<Self> {
        if data.len() != D * D {
            return Err(MatError::DimensionMismatch {
                expected: D * D,
                found: data.len(),
            });
        }
        let mut t = Self::zero();
        for (row, chunk) in t.values.iter_mut().zip(data.chunks_exact(D.max(1))) {
            row.copy_from_slice(chunk);
        }
        Ok(t)
    }

    /// `tensor = s`. Only zero may be assigned to a tensor.
    pub fn assign_scalar(&mut self, s: T) -> Result<()> {
        if !s.is_zero() {
            return Err(MatError::InvalidArgument(
                "only zero may be assigned to a tensor",
            ));
        }
        self.fill_zero();
        Ok(())
    }

    pub fn fill_zero(&mut self) {
        self.values = [[T::zero(); D]; D];
    }

    pub fn rows(&self) -> &[[T; D]; D] {
        &self.values
    }

    /// Bounds-checked read.
    pub fn get(&self, i: usize, j: usize) -> Result<T> {
        if i >= D || j >= D {
            return Err(MatError::IndexOutOfRange {
                row: i,
                col: j,
                nrows: D,
                ncols: D,
            });
        }
        Ok(self.values[i][j])
    }

    /// Euclidean norm over all `D²` entries. Not the induced 1-norm; see
    /// [`Norms::l1_norm`] for that.
    pub fn norm(&self) -> T::Real {
        self.norm_square().sqrt()
    }

    pub fn norm_square(&self) -> T::Real {
        self.values
            .iter()
            .flatten()
            .fold(<T::Real as Zero>::zero(), |acc, v| acc + v.modulus_sqr())
    }

    pub fn scale(&self, s: T) -> Self {
        let mut t = *self;
        t.values.iter_mut().flatten().for_each(|v| *v = *v * s);
        t
    }

    pub fn transpose(&self) -> Self {
        let mut t = Self::zero();
        for i in 0..D {
            for j in 0..D {
                t.values[j][i] = self.values[i][j];
            }
        }
        t
    }

    pub fn trace(&self) -> T {
        (0..D).fold(T::zero(), |acc, i| acc + self.values[i][i])
    }

    fn flat(&self) -> Vec<T> {
        self.values.iter().flatten().copied().collect()
    }

    pub fn determinant(&self) -> T {
        det_of_buffer(&self.flat(), D)
    }

    /// Inverse tensor under the default near-zero pivot policy.
    pub fn invert(&self) -> Result<Self> {
        self.invert_with(&EliminationOptions::default())
    }

    /// Inverse tensor: closed form for `D <= 3`, Gauss–Jordan otherwise.
    ///
    /// The closed form is rejected by the same rule as the elimination: with
    /// `s` the largest entry modulus, `|det| / s^(D-1)` stands in for the last
    /// pivot of a full-pivoting sweep (exactly so for `D <= 2`) and must lie
    /// above the resolved tolerance.
    pub fn invert_with(&self, opts: &EliminationOptions<T::Real>) -> Result<Self> {
        let v = self.flat();
        let mut out = Self::zero();
        if (1..=3).contains(&D) {
            let det = self.determinant();
            let scale = max_modulus(&v);
            let threshold = opts.pivot_tolerance.threshold(scale);
            let lead = scale.powi(D as i32 - 1);
            let last_pivot = if lead.is_zero() {
                det.modulus()
            } else {
                det.modulus() / lead
            };
            if !(last_pivot > threshold) {
                let pivot_modulus = last_pivot.to_f64().unwrap_or(f64::NAN);
                log::debug!("tensor invert: singular {D}x{D}, pivot modulus {pivot_modulus:e}");
                return Err(MatError::SingularMatrix {
                    step: D - 1,
                    pivot_modulus,
                });
            }
        }
        match D {
            0 => {}
            1 => {
                out.values[0][0] = T::one() / v[0];
            }
            2 => {
                let r = T::one() / self.determinant();
                out.values[0][0] = v[3] * r;
                out.values[0][1] = -v[1] * r;
                out.values[1][0] = -v[2] * r;
                out.values[1][1] = v[0] * r;
            }
            3 => {
                let r = T::one() / self.determinant();
                let w = |i: usize, j: usize| v[i * 3 + j];
                // adjugate: cyclic cofactors, transposed
                for i in 0..3 {
                    for j in 0..3 {
                        let (i1, i2) = ((i + 1) % 3, (i + 2) % 3);
                        let (j1, j2) = ((j + 1) % 3, (j + 2) % 3);
                        out.values[i][j] = (w(j1, i1) * w(j2, i2) - w(j1, i2) * w(j2, i1)) * r;
                    }
                }
            }
            _ => {
                let mut m = self.to_dense();
                m.invert_with(opts)?;
                out = Self::try_from(&m)?;
            }
        }
        Ok(out)
    }

    /// Tensor–vector contraction `self · x`.
    pub fn dot(&self, x: &Tensor1<D, T>) -> Tensor1<D, T> {
        let mut y = Tensor1::zero();
        for i in 0..D {
            y[i] = (0..D).fold(T::zero(), |acc, j| acc + self.values[i][j] * x[j]);
        }
        y
    }

    pub fn to_dense(&self) -> DenseMatrix<T> {
        DenseMatrix::from_fn(D, D, |i, j| self.values[i][j])
    }
}

impl<const D: usize, T: Scalar> Default for Tensor<D, T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const D: usize, T: Scalar> TryFrom<&DenseMatrix<T>> for Tensor<D, T> {
    type Error = MatError;

    fn try_from(m: &DenseMatrix<T>) -> Result<Self> {
        if m.nrows() != D || m.ncols() != D {
            return Err(MatError::DimensionMismatch {
                expected: D * D,
                found: m.nrows() * m.ncols(),
            });
        }
        Self::from_row_major(m.as_slice())
    }
}

impl<const D: usize, T> MatShape for Tensor<D, T> {
    fn nrows(&self) -> usize {
        D
    }
    fn ncols(&self) -> usize {
        D
    }
}

impl<const D: usize, T> Index<(usize, usize)> for Tensor<D, T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.values[i][j]
    }
}

impl<const D: usize, T> IndexMut<(usize, usize)> for Tensor<D, T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.values[i][j]
    }
}

impl<const D: usize, T: Scalar> Add for Tensor<D, T> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        for (a, b) in self.values.iter_mut().flatten().zip(rhs.values.iter().flatten()) {
            *a = *a + *b;
        }
        self
    }
}

impl<const D: usize, T: Scalar> Sub for Tensor<D, T> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        for (a, b) in self.values.iter_mut().flatten().zip(rhs.values.iter().flatten()) {
            *a = *a - *b;
        }
        self
    }
}

impl<const D: usize, T: Scalar> Neg for Tensor<D, T> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.values.iter_mut().flatten().for_each(|v| *v = -*v);
        self
    }
}

/// Single contraction: `(A·B)ᵢⱼ = Σₖ AᵢₖBₖⱼ`.
impl<const D: usize, T: Scalar> Mul for Tensor<D, T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut c = Self::zero();
        for i in 0..D {
            for j in 0..D {
                c.values[i][j] =
                    (0..D).fold(T::zero(), |acc, k| acc + self.values[i][k] * rhs.values[k][j]);
            }
        }
        c
    }
}

impl<const D: usize, T: Scalar> Norms for Tensor<D, T> {
    type Real = T::Real;

    fn l1_norm(&self) -> T::Real {
        (0..D)
            .map(|j| {
                (0..D).fold(<T::Real as Zero>::zero(), |acc, i| {
                    acc + self.values[i][j].modulus()
                })
            })
            .fold(<T::Real as Zero>::zero(), |acc, s| acc.max(s))
    }

    fn linfty_norm(&self) -> T::Real {
        self.values
            .iter()
            .map(|row| {
                row.iter()
                    .fold(<T::Real as Zero>::zero(), |acc, v| acc + v.modulus())
            })
            .fold(<T::Real as Zero>::zero(), |acc, s| acc.max(s))
    }

    fn frobenius_norm(&self) -> T::Real {
        self.norm()
    }
}
