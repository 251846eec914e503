//! tests for the Jacobi method

use approx::assert_abs_diff_eq;
use nalgebra::{dmatrix, dvector};
use riffle::config::SolverConfig;
use riffle::linear_systems::errors::LinearSolverError;
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

    let rep = jacobi(&a, &b, &x0, cfg)?;

    assert_eq!(rep.termination, TerminationReason::ToleranceReached);
    for i in 0..3 {
        assert_abs_diff_eq!(rep.solution[i], 1.0, epsilon = 1e-7);
    }
    assert!(rep.diagnostics.convergence_guaranteed);
    assert_abs_diff_eq!(rep.diagnostics.spectral_radius, 0.2, epsilon = 1e-10);
    assert!(rep.diagnostics.residual < 1e-6);
    assert_eq!(rep.method_name, "jacobi");
    Ok(())
}

#[test]
fn trace_starts_at_the_initial_guess() -> TestResult {
    let a = dmatrix![4.0, 1.0; 1.0, 3.0];
    let b = dvector![1.0, 2.0];
    let x0 = dvector![2.0, 1.0];
    let cfg = SolverConfig::new().set_tolerance(1e-6)?;

    let rep = jacobi(&a, &b, &x0, cfg)?;

    assert_eq!(rep.trace.len(), rep.iterations + 1);
    assert_eq!(rep.trace[0].approximation, vec![2.0, 1.0]);
    assert_eq!(rep.trace[0].index, 0);
    Ok(())
}

#[test]
fn divergent_system_exhausts_the_budget_with_diagnostics() -> TestResult {
    // spectral radius of D⁻¹(L+U) is sqrt(6) > 1: Jacobi cannot converge
    let a = dmatrix![1.0, 2.0; 3.0, 1.0];
    let b = dvector![3.0, 4.0];
    let x0 = dvector![0.0, 0.0];
    let cfg = SolverConfig::new().set_max_iterations(25)?;

    let rep = jacobi(&a, &b, &x0, cfg)?;

    assert_eq!(rep.termination, TerminationReason::IterationLimit);
    assert!(!rep.tolerance_met);
    assert_eq!(rep.iterations, 25);
    assert!(rep.diagnostics.spectral_radius >= 1.0);
    assert!(!rep.diagnostics.convergence_guaranteed);
    Ok(())
}

#[test]
fn divergence_past_overflow_is_a_typed_failure() {
    // left unchecked, the iterate overflows to infinity long before the
    // budget runs out; it must surface as an error, not enter the trace
    let a = dmatrix![1.0, 2.0; 3.0, 1.0];
    let b = dvector![3.0, 4.0];
    let x0 = dvector![0.0, 0.0];
    let cfg = SolverConfig::new().set_max_iterations(1000).unwrap();

    let err = jacobi(&a, &b, &x0, cfg).unwrap_err();
    assert!(matches!(err, LinearSolverError::NonFiniteIterate { iteration } if iteration > 0));
}

#[test]
fn empty_system_is_rejected() {
    // 0x0 is square with a vacuously non-zero diagonal, so it needs
    // its own rejection
    let a = nalgebra::DMatrix::<f64>::zeros(0, 0);
    let b = nalgebra::DVector::<f64>::zeros(0);
    let x0 = nalgebra::DVector::<f64>::zeros(0);

    let err = jacobi(&a, &b, &x0, SolverConfig::new()).unwrap_err();
    assert!(matches!(err, LinearSolverError::EmptySystem));
}

#[test]
fn zero_diagonal_entry_is_rejected() {
    let a = dmatrix![0.0, 1.0; 1.0, 1.0];
    let b = dvector![1.0, 1.0];
    let x0 = dvector![0.0, 0.0];

    let err = jacobi(&a, &b, &x0, SolverConfig::new()).unwrap_err();
    assert!(matches!(err, LinearSolverError::ZeroPivot { row: 0 }));
}

#[test]
fn non_square_matrix_is_rejected() {
    let a = dmatrix![1.0, 2.0, 3.0; 4.0, 5.0, 6.0];
    let b = dvector![1.0, 1.0];
    let x0 = dvector![0.0, 0.0];

    let err = jacobi(&a, &b, &x0, SolverConfig::new()).unwrap_err();
    assert!(matches!(err, LinearSolverError::NotSquare { nrows: 2, ncols: 3 }));
}

#[test]
fn mismatched_right_hand_side_is_rejected() {
    let a = dmatrix![4.0, 1.0; 1.0, 3.0];
    let b = dvector![1.0, 2.0, 3.0];
    let x0 = dvector![0.0, 0.0];

    let err = jacobi(&a, &b, &x0, SolverConfig::new()).unwrap_err();
    assert!(matches!(err, LinearSolverError::DimensionMismatch { .. }));
}
