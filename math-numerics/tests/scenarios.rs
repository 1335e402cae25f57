//! Worked examples for the solvers and interpolators.

use approx::assert_relative_eq;
use math_numerics::interpolation::{Point, lagrange, linear, polynomial};
use math_numerics::{
    IterativeConfig, NumericsError, condition_number, gauss_jordan_inverse, gauss_seidel,
    gauss_solve, identity, jacobi, lu_decompose, lu_inverse, lu_solve, max_abs_difference,
    multiply,
};
use ndarray::{Array1, Array2, array};

fn dominant_system() -> (Array2<f64>, Array1<f64>) {
    (
        array![[4.0, 2.0, 0.0], [2.0, 10.0, 4.0], [0.0, 4.0, 5.0]],
        array![2.0, 6.0, 5.0],
    )
}

#[test]
fn jacobi_and_gauss_seidel_agree_with_direct_solve() {
    let (a, b) = dominant_system();
    let direct = gauss_solve(&a, &b).expect("system is regular");

    // y = 1/5.8, x = (1 - y)/2, z = 1 - 0.8y
    let y = 1.0 / 5.8;
    assert_relative_eq!(direct[0], (1.0 - y) / 2.0, epsilon = 1e-12);
    assert_relative_eq!(direct[1], y, epsilon = 1e-12);
    assert_relative_eq!(direct[2], 1.0 - 0.8 * y, epsilon = 1e-12);

    let config = IterativeConfig::default();
    let jac = jacobi(&a, &b, &config).expect("matrix is dominant");
    let gs = gauss_seidel(&a, &b, &config).expect("matrix is dominant");

    assert!(jac.converged && gs.converged);
    for i in 0..3 {
        assert!((jac.x[i] - direct[i]).abs() < 1e-2, "Jacobi x[{i}]");
        assert!((gs.x[i] - direct[i]).abs() < 1e-2, "Gauss-Seidel x[{i}]");
    }
}

#[test]
fn non_dominant_matrix_is_refused_by_both_iterative_solvers() {
    let a = array![[1.0, 3.0, 0.0], [2.0, 10.0, 4.0], [0.0, 4.0, 5.0]];
    let b = array![2.0, 6.0, 5.0];
    let config = IterativeConfig::default();

    assert!(matches!(
        jacobi(&a, &b, &config),
        Err(NumericsError::NotDominant { row: 0 })
    ));
    assert!(matches!(
        gauss_seidel(&a, &b, &config),
        Err(NumericsError::NotDominant { row: 0 })
    ));

    // The direct solver has no such precondition
    assert!(gauss_solve(&a, &b).is_ok());
}

#[test]
fn linear_interpolation_through_two_points() {
    let points = [Point::new(1.0, 1.0), Point::new(2.0, 4.0)];
    assert_relative_eq!(linear(&points, 3.0).unwrap(), 7.0, epsilon = 1e-12);
}

#[test]
fn vertical_line_is_degenerate() {
    let points = [Point::new(2.0, 1.0), Point::new(2.0, 5.0)];
    let err = linear(&points, 3.0).unwrap_err();
    assert!(err.is_degenerate(), "got {err}");
}

#[test]
fn quadratic_methods_reproduce_x_squared() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 4.0),
    ];
    assert_relative_eq!(polynomial(&points, 3.0).unwrap(), 9.0, epsilon = 1e-12);
    assert_relative_eq!(lagrange(&points, 3.0).unwrap(), 9.0, epsilon = 1e-12);
}

#[test]
fn lu_factors_solve_like_gaussian_elimination() {
    let a = array![[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]];
    let b = array![1.0, 0.0, 1.0];

    let factors = lu_decompose(&a).unwrap();
    let via_lu = lu_solve(&factors.l, &factors.u, &b).unwrap();
    let via_gauss = gauss_solve(&a, &b).unwrap();

    for i in 0..3 {
        assert_relative_eq!(via_lu[i], 1.0, epsilon = 1e-12);
        assert_relative_eq!(via_lu[i], via_gauss[i], epsilon = 1e-12);
    }
}

#[test]
fn inverse_paths_agree_and_invert_back() {
    let a = array![[4.0, 3.0, 2.0], [2.0, 1.0, 3.0], [3.0, 2.0, 1.0]];

    let gj = gauss_jordan_inverse(&a).unwrap();
    let lu = lu_inverse(&a).unwrap();
    assert!(max_abs_difference(&gj, &lu).unwrap() < 1e-12);

    let product = multiply(&a, &gj).unwrap();
    assert!(max_abs_difference(&product, &identity(3)).unwrap() < 1e-12);

    let back = gauss_jordan_inverse(&gj).unwrap();
    assert!(max_abs_difference(&back, &a).unwrap() < 1e-10);
}

#[test]
fn singular_matrix_fails_everywhere() {
    let a = array![[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]];
    let b = array![1.0, 2.0, 3.0];

    assert!(gauss_solve(&a, &b).unwrap_err().is_singular());
    assert!(lu_decompose(&a).unwrap_err().is_singular());
    assert!(gauss_jordan_inverse(&a).unwrap_err().is_singular());
    assert!(lu_inverse(&a).unwrap_err().is_singular());
    assert!(condition_number(&a).unwrap_err().is_singular());
}

#[test]
fn kernels_leave_inputs_untouched() {
    let (a, b) = dominant_system();
    let (a0, b0) = (a.clone(), b.clone());

    gauss_solve(&a, &b).unwrap();
    lu_decompose(&a).unwrap();
    gauss_jordan_inverse(&a).unwrap();
    lu_inverse(&a).unwrap();
    jacobi(&a, &b, &IterativeConfig::default()).unwrap();
    gauss_seidel(&a, &b, &IterativeConfig::default()).unwrap();

    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

#[test]
fn config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("solver.json");

    let config = IterativeConfig {
        tolerance: 1e-9,
        max_iterations: 250,
        print_interval: 10,
    };
    config.to_file(&path).unwrap();

    let loaded = IterativeConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn config_file_errors_are_typed() {
    let dir = tempfile::tempdir().unwrap();

    let missing = IterativeConfig::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(missing, NumericsError::ConfigIo(_)));

    let garbage = dir.path().join("garbage.json");
    std::fs::write(&garbage, "{ not json").unwrap();
    let err = IterativeConfig::from_file(&garbage).unwrap_err();
    assert!(matches!(err, NumericsError::ConfigParse(_)));

    let invalid = dir.path().join("invalid.json");
    std::fs::write(&invalid, r#"{"tolerance": 0.0}"#).unwrap();
    let err = IterativeConfig::from_file(&invalid).unwrap_err();
    assert!(matches!(err, NumericsError::InvalidConfig(_)));
}
