//! Integration tests for full-pivoting Gauss–Jordan inversion, multi-RHS
//! solves and determinants.
//!
//! Results are checked against identity residuals, against each other, and
//! against faer's full-pivoting LU on the same seeded systems.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use elemat::solver::LinearSolver;
use elemat::{
    Complex, DenseMatrix, EliminationOptions, GaussJordanSolver, MatError, Norms, gauss_jordan,
};
use faer::linalg::solvers::SolveCore;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_real(n: usize, rng: &mut StdRng) -> DenseMatrix<f64> {
    DenseMatrix::from_fn(n, n, |_, _| rng.gen_range(-1.0..1.0))
}

fn random_complex(n: usize, rng: &mut StdRng) -> DenseMatrix<Complex<f64>> {
    DenseMatrix::from_fn(n, n, |_, _| {
        Complex::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
    })
}

fn identity_residual<T: elemat::Scalar<Real = f64>>(p: &DenseMatrix<T>) -> f64 {
    let mut r = p.clone();
    r.add_scaled(-T::one(), &DenseMatrix::identity(p.nrows())).unwrap();
    r.max_modulus()
}

/// A·A⁻¹ ≈ I for random real matrices of order 1 through 6.
#[test]
fn inverse_round_trip_real() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in 1..=6 {
        let a = random_real(n, &mut rng);
        let inv = a.inverse().unwrap();
        assert!(identity_residual(&a.mmult(&inv).unwrap()) < 1e-9, "n = {n}");
        assert!(identity_residual(&inv.mmult(&a).unwrap()) < 1e-9, "n = {n}");
    }
}

/// A·A⁻¹ ≈ I for random complex matrices of order 1 through 6.
#[test]
fn inverse_round_trip_complex() {
    let mut rng = StdRng::seed_from_u64(43);
    for n in 1..=6 {
        let a = random_complex(n, &mut rng);
        let inv = a.inverse().unwrap();
        assert!(identity_residual(&a.mmult(&inv).unwrap()) < 1e-9, "n = {n}");
    }
}

/// Several companions are solved in one sweep and match A⁻¹·Bᵢ.
#[test]
fn companions_match_inverse_times_rhs() {
    let mut rng = StdRng::seed_from_u64(5);
    let n = 6;
    let a = random_real(n, &mut rng);
    let b1 = DenseMatrix::from_fn(n, 3, |_, _| rng.gen_range(-2.0..2.0));
    let b2 = DenseMatrix::from_fn(n, 1, |_, _| rng.gen_range(-2.0..2.0));

    let mut inv = a.clone();
    let mut x1 = b1.clone();
    let mut x2 = b2.clone();
    gauss_jordan(&mut inv, &mut [&mut x1, &mut x2], &EliminationOptions::default()).unwrap();

    let y1 = inv.mmult(&b1).unwrap();
    let y2 = inv.mmult(&b2).unwrap();
    for (x, y) in x1.as_slice().iter().zip(y1.as_slice()) {
        assert_abs_diff_eq!(x, y, epsilon = 1e-10);
    }
    for (x, y) in x2.as_slice().iter().zip(y2.as_slice()) {
        assert_abs_diff_eq!(x, y, epsilon = 1e-10);
    }
    // the companions are genuine solutions
    let r = a.mmult(&x1).unwrap();
    for (r, b) in r.as_slice().iter().zip(b1.as_slice()) {
        assert_abs_diff_eq!(r, b, epsilon = 1e-10);
    }
}

/// det(A·B) ≈ det(A)·det(B) on the pivoted path.
#[test]
fn determinant_is_multiplicative() {
    let mut rng = StdRng::seed_from_u64(11);
    for n in 4..=7 {
        let a = random_real(n, &mut rng);
        let b = random_real(n, &mut rng);
        let ab = a.mmult(&b).unwrap();
        let lhs = ab.determinant().unwrap();
        let rhs = a.determinant().unwrap() * b.determinant().unwrap();
        assert_relative_eq!(lhs, rhs, max_relative = 1e-9);
    }
}

/// The determinant from an inversion report matches `determinant()`.
#[test]
fn inversion_report_carries_determinant() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = random_complex(5, &mut rng);
    let det = a.determinant().unwrap();
    let report = a.clone().invert().unwrap();
    assert!((report.determinant() - det).norm() < 1e-10 * det.norm().max(1.0));
    assert_eq!(report.pivots().len(), 5);
    assert_eq!(report.pivot_values().len(), 5);
}

/// [[1,2,3],[4,5,6],[7,8,9]] is rank two: inversion fails on the last step.
#[test]
fn rank_deficient_matrix_fails() {
    let mut a = DenseMatrix::from_row_major(3, 3, (1..=9).map(f64::from).collect()).unwrap();
    match a.invert() {
        Err(MatError::SingularMatrix { step, pivot_modulus }) => {
            assert_eq!(step, 2);
            assert!(pivot_modulus < 1e-12);
        }
        other => panic!("expected SingularMatrix, got {other:?}"),
    }
    let a = DenseMatrix::from_row_major(3, 3, (1..=9).map(f64::from).collect()).unwrap();
    assert_eq!(a.determinant().unwrap(), 0.0);
}

/// NaN entries are never accepted as pivots.
#[test]
fn nan_pivot_is_singular() {
    let mut a = DenseMatrix::from_row_major(2, 2, vec![f64::NAN, 0.0, 0.0, f64::NAN]).unwrap();
    assert!(matches!(a.invert(), Err(MatError::SingularMatrix { step: 0, .. })));
}

/// The 4x4 regression matrix: 1..9 cycled row-major with 50 on the diagonal.
#[test]
fn four_by_four_regression_determinant() {
    let data: Vec<f64> = (0..16).map(|k| (k % 9 + 1) as f64).collect();
    let mut a = DenseMatrix::from_row_major(4, 4, data).unwrap();
    for i in 0..4 {
        a.set_at(i, i, 50.0).unwrap();
    }
    assert_relative_eq!(a.determinant().unwrap(), 5_989_139.0, max_relative = 1e-12);
    let report = a.clone().invert().unwrap();
    assert_relative_eq!(report.determinant(), 5_989_139.0, max_relative = 1e-12);
}

/// Compare GaussJordanSolver with faer's full-pivoting LU on the same system.
#[test]
fn solver_agrees_with_faer_full_piv_lu() {
    let n = 8;
    let mut rng = StdRng::seed_from_u64(2024);
    let a = random_real(n, &mut rng);
    let b: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();

    let mut x = vec![0.0; n];
    let mut solver = GaussJordanSolver::<f64>::new();
    solver.solve(&a, &b, &mut x).unwrap();

    let fa = a.to_faer();
    let factor = faer::linalg::solvers::FullPivLu::new(fa.as_ref());
    let mut y = b.clone();
    let y_mat = faer::MatMut::from_column_major_slice_mut(&mut y, n, 1);
    factor.solve_in_place_with_conj(faer::Conj::No, y_mat);

    for i in 0..n {
        assert_abs_diff_eq!(x[i], y[i], epsilon = 1e-9);
    }

    let inv = solver.inverse().unwrap();
    let back = DenseMatrix::from_faer(&inv.to_faer());
    assert_eq!(&back, inv);
}

/// Shape errors are reported before any mutation.
#[test]
fn shape_errors() {
    let mut a = DenseMatrix::<f64>::identity(3);
    let mut b = DenseMatrix::<f64>::zeros(2, 2);
    assert_eq!(
        a.solve_in_place(&mut b).unwrap_err(),
        MatError::DimensionMismatch { expected: 3, found: 2 }
    );
    assert_eq!(a, DenseMatrix::identity(3));
    assert_eq!(b, DenseMatrix::zeros(2, 2));

    let mut solver = GaussJordanSolver::<f64>::new();
    let mut x = vec![0.0; 3];
    assert!(matches!(
        solver.solve(&a, &vec![1.0; 4], &mut x),
        Err(MatError::DimensionMismatch { expected: 3, found: 4 })
    ));
    let rect = DenseMatrix::<f64>::zeros(3, 4);
    assert!(matches!(
        solver.solve(&rect, &vec![1.0; 3], &mut x),
        Err(MatError::NotSquare { nrows: 3, ncols: 4 })
    ));
}

/// Inverting the inverse returns the original matrix, and norms agree.
#[test]
fn double_inversion_restores_matrix() {
    let mut rng = StdRng::seed_from_u64(77);
    let a = random_real(6, &mut rng);
    let mut b = a.clone();
    b.invert().unwrap();
    b.invert().unwrap();
    for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
        assert_abs_diff_eq!(x, y, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(a.l1_norm(), b.l1_norm(), epsilon = 1e-9);
}
