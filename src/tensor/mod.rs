//! Fixed-size tensors stored by value.
//!
//! - [`Tensor`]: rank 2, `D x D`, for Jacobians and other per-point quantities.
//! - [`Tensor1`]: rank 1, length `D`.

pub mod rank1;
pub mod rank2;

pub use rank1::Tensor1;
pub use rank2::Tensor;
