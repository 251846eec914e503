//! tests for successive over-relaxation

use approx::assert_abs_diff_eq;
use nalgebra::{dmatrix, dvector};
use riffle::config::SolverConfig;
use riffle::linear_systems::errors::LinearSolverError;
use riffle::linear_systems::gauss_seidel::gauss_seidel;
use riffle::linear_systems::report::TerminationReason;
use riffle::linear_systems::sor::sor;

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

    let rep = sor(&a, &b, &x0, 1.1, cfg)?;

    assert_eq!(rep.termination, TerminationReason::ToleranceReached);
    for i in 0..3 {
        assert_abs_diff_eq!(rep.solution[i], 1.0, epsilon = 1e-7);
    }
    assert_eq!(rep.method_name, "sor");
    Ok(())
}

#[test]
fn unit_relaxation_matches_gauss_seidel() -> TestResult {
    let a = dmatrix![4.0, 1.0; 2.0, 5.0];
    let b = dvector![9.0, 13.0];
    let x0 = dvector![0.0, 0.0];
    let cfg = SolverConfig::new().set_tolerance(1e-10)?;

    let relaxed = sor(&a, &b, &x0, 1.0, cfg)?;
    let gs = gauss_seidel(&a, &b, &x0, cfg)?;

    assert_eq!(relaxed.iterations, gs.iterations);
    for i in 0..2 {
        assert_abs_diff_eq!(relaxed.solution[i], gs.solution[i], epsilon = 1e-9);
    }
    assert_abs_diff_eq!(
        relaxed.diagnostics.spectral_radius,
        gs.diagnostics.spectral_radius,
        epsilon = 1e-12
    );
    Ok(())
}

#[test]
fn under_relaxation_also_converges() -> TestResult {
    let a = dmatrix![4.0, 1.0; 1.0, 3.0];
    let b = dvector![1.0, 2.0];
    let x0 = dvector![0.0, 0.0];
    let cfg = SolverConfig::new().set_tolerance(1e-8)?;

    let rep = sor(&a, &b, &x0, 0.8, cfg)?;

    assert!(rep.tolerance_met);
    assert_abs_diff_eq!(rep.solution[0], 1.0 / 11.0, epsilon = 1e-7);
    assert_abs_diff_eq!(rep.solution[1], 7.0 / 11.0, epsilon = 1e-7);
    Ok(())
}

#[test]
fn relaxation_factor_outside_open_interval_is_rejected() {
    let a = dmatrix![4.0, 1.0; 1.0, 3.0];
    let b = dvector![1.0, 2.0];
    let x0 = dvector![0.0, 0.0];

    for omega in [0.0, 2.0, 2.5, -0.5, f64::NAN] {
        let err = sor(&a, &b, &x0, omega, SolverConfig::new()).unwrap_err();
        assert!(matches!(err, LinearSolverError::InvalidRelaxation { .. }));
    }
}

#[test]
fn zero_diagonal_entry_is_rejected() {
    let a = dmatrix![0.0, 1.0; 1.0, 1.0];
    let b = dvector![1.0, 1.0];
    let x0 = dvector![0.0, 0.0];

    let err = sor(&a, &b, &x0, 1.2, SolverConfig::new()).unwrap_err();
    assert!(matches!(err, LinearSolverError::ZeroPivot { row: 0 }));
}
