//! Tests for core dense matrix operations: construction, access, products and norms.
//!
//! These tests exercise `DenseMatrix` and `Tensor` through the public API, using
//! seeded random data and small fixed matrices.

use approx::assert_abs_diff_eq;
use elemat::core::traits::{MatVec, Norms};
use elemat::{DenseMatrix, MatError, Tensor};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Test matrix-vector multiplication for a small random dense matrix.
///
/// Builds a random 5x5 row-major matrix and a random vector, computes the
/// product through `MatVec`, and checks it against a manual computation.
#[test]
fn matvec_random_small() {
    let n = 5;
    let mut rng = StdRng::seed_from_u64(7);
    let vals: Vec<f64> = (0..n * n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let a = DenseMatrix::from_row_major(n, n, vals.clone()).unwrap();
    let x: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let mut y = vec![0.0; n];
    a.matvec(&x, &mut y);

    for i in 0..n {
        let expected = (0..n).map(|j| vals[i * n + j] * x[j]).sum::<f64>();
        assert_abs_diff_eq!(y[i], expected, epsilon = 1e-12);
    }
}

/// Out-of-range access always fails, never returns stale or zero data.
#[test]
fn out_of_range_access_fails() {
    let mut a = DenseMatrix::<f64>::zeros(2, 4);
    for (i, j) in [(2, 0), (0, 4), (5, 5), (usize::MAX, 0)] {
        assert!(matches!(a.at(i, j), Err(MatError::IndexOutOfRange { .. })));
        assert!(matches!(a.set_at(i, j, 1.0), Err(MatError::IndexOutOfRange { .. })));
    }
    assert!(a.as_slice().iter().all(|v| *v == 0.0));
    let t = Tensor::<2, f64>::identity();
    assert!(matches!(t.get(0, 2), Err(MatError::IndexOutOfRange { .. })));
}

/// The l1 norm takes the largest column sum of moduli.
#[test]
fn l1_norm_of_reference_tensor() {
    let t = Tensor::<3, f64>::from_row_major(&[1.0, 2.0, 3.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0])
        .unwrap();
    assert_eq!(t.l1_norm(), 16.0);
    assert_eq!(t.to_dense().l1_norm(), 16.0);

    let mut z = t;
    z.assign_scalar(0.0).unwrap();
    assert_eq!(z.l1_norm(), 0.0);
    assert_eq!(z.norm(), 0.0);
}

/// Construction from a flat buffer checks the length.
#[test]
fn flat_construction_checks_length() {
    assert!(matches!(
        DenseMatrix::from_row_major(3, 3, vec![0.0; 8]),
        Err(MatError::DimensionMismatch { expected: 9, found: 8 })
    ));
    let a = DenseMatrix::from_row_major(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(a.at(1, 0).unwrap(), 3.0);
}
