//! Core linear-algebra traits for elemat.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{Float, One, Zero};

/// The scalar contract every matrix or tensor element satisfies.
///
/// Real floats, complex floats and downstream number types (for example
/// automatic-differentiation duals) plug into the kernel by implementing this
/// trait. Pivot selection compares [`Scalar::modulus`] only, so complex entries
/// are never ranked by their real part.
pub trait Scalar:
    Copy
    + Debug
    + PartialEq
    + Send
    + Sync
    + 'static
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Magnitude domain: `Self` for reals, the component type for complex.
    type Real: Float + Debug + Send + Sync + 'static;

    /// |x| for reals, the modulus for complex values.
    fn modulus(self) -> Self::Real;

    /// |x|², avoiding the square root where only ordering or sums are needed.
    fn modulus_sqr(self) -> Self::Real;

    /// Complex conjugate; the identity for reals.
    fn conj(self) -> Self;

    /// Embed a real value.
    fn from_real(re: Self::Real) -> Self;
}

/// Matrix shape queries.
pub trait MatShape {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
}

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x.
    fn matvec(&self, x: &V, y: &mut V);
}

/// Matrix norms shared by dense matrices and fixed-size tensors.
pub trait Norms {
    /// Associated magnitude type.
    type Real;
    /// Induced 1-norm: largest column sum of moduli.
    fn l1_norm(&self) -> Self::Real;
    /// Induced ∞-norm: largest row sum of moduli.
    fn linfty_norm(&self) -> Self::Real;
    /// sqrt of the sum of squared moduli.
    fn frobenius_norm(&self) -> Self::Real;
}
