//! Rank-1 tensors: fixed-size vectors of dimension `D`.

use std::ops::{Add, Index, IndexMut, Sub};

use crate::core::traits::Scalar;
use num_traits::{Float, Zero};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tensor1<const D: usize, T> {
    values: [T; D],
}

impl<const D: usize, T: Scalar> Tensor1<D, T> {
    #[inline]
    pub fn zero() -> Self {
        Self {
            values: [T::zero(); D],
        }
    }

    #[inline]
    pub fn from_array(values: [T; D]) -> Self {
        Self { values }
    }

    pub fn as_array(&self) -> &[T; D] {
        &self.values
    }

    /// Inner product, conjugating `self`.
    pub fn dot(&self, other: &Self) -> T {
        self.values
            .iter()
            .zip(&other.values)
            .fold(T::zero(), |acc, (&a, &b)| acc + a.conj() * b)
    }

    pub fn norm(&self) -> T::Real {
        self.values
            .iter()
            .fold(<T::Real as Zero>::zero(), |acc, v| acc + v.modulus_sqr())
            .sqrt()
    }

    /// Sum of entry moduli.
    pub fn l1_norm(&self) -> T::Real {
        self.values
            .iter()
            .fold(<T::Real as Zero>::zero(), |acc, v| acc + v.modulus())
    }

    pub fn scale(&self, s: T) -> Self {
        let mut v = *self;
        v.values.iter_mut().for_each(|x| *x = *x * s);
        v
    }
}

impl<const D: usize, T: Scalar> Default for Tensor1<D, T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const D: usize, T> Index<usize> for Tensor1<D, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.values[i]
    }
}

impl<const D: usize, T> IndexMut<usize> for Tensor1<D, T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.values[i]
    }
}

impl<const D: usize, T: Scalar> Add for Tensor1<D, T> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        for (a, &b) in self.values.iter_mut().zip(&rhs.values) {
            *a = *a + b;
        }
        self
    }
}

impl<const D: usize, T: Scalar> Sub for Tensor1<D, T> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        for (a, &b) in self.values.iter_mut().zip(&rhs.values) {
            *a = *a - b;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex;

    #[test]
    fn norms_and_products() {
        let a = Tensor1::from_array([3.0, -4.0]);
        assert_eq!(a.norm(), 5.0);
        assert_eq!(a.l1_norm(), 7.0);
        let b = Tensor1::from_array([1.0, 1.0]);
        assert_eq!(a.dot(&b), -1.0);
        assert_eq!((a + b).as_array(), &[4.0, -3.0]);
        assert_eq!((a - b).scale(2.0).as_array(), &[4.0, -10.0]);
        assert_eq!(Tensor1::<3, f64>::default().norm(), 0.0);
    }

    #[test]
    fn complex_dot_conjugates_left_operand() {
        let a = Tensor1::from_array([Complex::new(0.0, 1.0), Complex::new(1.0, 1.0)]);
        let d = a.dot(&a);
        assert_abs_diff_eq!(d.re, 3.0, epsilon = 1e-15);
        assert_abs_diff_eq!(d.im, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(a.norm(), 3.0_f64.sqrt(), epsilon = 1e-15);
    }
}
