//! tests for the Gauss-Seidel method

use approx::assert_abs_diff_eq;
use nalgebra::{dmatrix, dvector};
use riffle::config::SolverConfig;
use riffle::linear_systems::errors::LinearSolverError;
use riffle::linear_systems::gauss_seidel::gauss_seidel;
use riffle::linear_systems::jacobi::jacobi;
use riffle::linear_systems::report::TerminationReason;

type TestResult = Result<(), LinearSolverError>;

#[test]
fn solves_diagonally_dominant_system() -> TestResult {
    let a = dmatrix![
        10.0,  1.0,  1.0;
         1.0, 10.0,  1.0;
         1.0,  1.0, 10.0
    ];
    let b = dvector![12.0, 12.0, 12.0];
    let x0 = dvector![0.0, 0.0, 0.0];
    let cfg = SolverConfig::new().set_tolerance(1e-8)?;

    let rep = gauss_seidel(&a, &b, &x0, cfg)?;

    assert_eq!(rep.termination, TerminationReason::ToleranceReached);
    for i in 0..3 {
        assert_abs_diff_eq!(rep.solution[i], 1.0, epsilon = 1e-7);
    }
    assert!(rep.diagnostics.convergence_guaranteed);
    assert_eq!(rep.method_name, "gauss_seidel");
    Ok(())
}

#[test]
fn converges_in_fewer_iterations_than_jacobi() -> TestResult {
    let a = dmatrix![4.0, 1.0; 1.0, 3.0];
    let b = dvector![1.0, 2.0];
    let x0 = dvector![0.0, 0.0];
    let cfg = SolverConfig::new().set_tolerance(1e-10)?;

    let gs = gauss_seidel(&a, &b, &x0, cfg)?;
    let jac = jacobi(&a, &b, &x0, cfg)?;

    assert!(gs.tolerance_met && jac.tolerance_met);
    assert!(gs.iterations < jac.iterations);
    assert!(gs.diagnostics.spectral_radius < jac.diagnostics.spectral_radius);
    Ok(())
}

#[test]
fn honors_a_nonzero_initial_guess() -> TestResult {
    let a = dmatrix![4.0, 1.0; 1.0, 3.0];
    let b = dvector![1.0, 2.0];
    let x0 = dvector![5.0, -5.0];
    let cfg = SolverConfig::new().set_tolerance(1e-8)?;

    let rep = gauss_seidel(&a, &b, &x0, cfg)?;

    assert_eq!(rep.trace[0].approximation, vec![5.0, -5.0]);
    assert_abs_diff_eq!(rep.solution[0], 1.0 / 11.0, epsilon = 1e-7);
    assert_abs_diff_eq!(rep.solution[1], 7.0 / 11.0, epsilon = 1e-7);
    Ok(())
}

#[test]
fn zero_diagonal_entry_is_rejected() {
    let a = dmatrix![1.0, 1.0; 1.0, 0.0];
    let b = dvector![1.0, 1.0];
    let x0 = dvector![0.0, 0.0];

    let err = gauss_seidel(&a, &b, &x0, SolverConfig::new()).unwrap_err();
    assert!(matches!(err, LinearSolverError::ZeroPivot { row: 1 }));
}

#[test]
fn mismatched_initial_guess_is_rejected() {
    let a = dmatrix![4.0, 1.0; 1.0, 3.0];
    let b = dvector![1.0, 2.0];
    let x0 = dvector![0.0, 0.0, 0.0];

    let err = gauss_seidel(&a, &b, &x0, SolverConfig::new()).unwrap_err();
    assert!(matches!(err, LinearSolverError::DimensionMismatch { .. }));
}
