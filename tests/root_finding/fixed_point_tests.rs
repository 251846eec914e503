//! tests for fixed-point iteration

use approx::assert_abs_diff_eq;
use riffle::config::SolverConfig;
use riffle::expression::DerivativeTable;
use riffle::root_finding::errors::RootFindingError;
use riffle::root_finding::fixed_point::fixed_point;
use riffle::root_finding::report::TerminationReason;

type TestResult = Result<(), RootFindingError>;

#[test]
fn converges_to_cosine_fixed_point() -> TestResult {
    // f(x) = cos(x) - x rearranged as x = cos(x)
    let mut table = DerivativeTable::new();
    let f = table.push(|x| x.cos() - x);
    let g = table.push(f64::cos);
    let cfg = SolverConfig::new()
        .set_tolerance(1e-8)?
        .set_max_iterations(200)?;

    let rep = fixed_point(&table, &f, &g, 0.5, cfg)?;

    assert_eq!(rep.termination, TerminationReason::ToleranceReached);
    assert_abs_diff_eq!(rep.root, 0.739_085_133_2, epsilon = 1e-7);
    assert_eq!(rep.trace.len(), rep.iterations + 1);
    assert_eq!(rep.method_name, "fixed_point");
    Ok(())
}

#[test]
fn starting_point_already_a_root() -> TestResult {
    let mut table = DerivativeTable::new();
    let f = table.push(|x| x * x - 4.0);
    let g = table.push(|x| 4.0 / x);
    let cfg = SolverConfig::new();

    let rep = fixed_point(&table, &f, &g, 2.0, cfg)?;

    assert_eq!(rep.termination, TerminationReason::ExactRootFound);
    assert_eq!(rep.root, 2.0);
    assert_eq!(rep.iterations, 0);
    assert_eq!(rep.trace.len(), 1);
    assert_eq!(rep.error, 0.0);
    Ok(())
}

#[test]
fn rootless_function_exhausts_the_budget() -> TestResult {
    // x = x + 1 walks away forever; f = x^2 + 1 never vanishes
    let mut table = DerivativeTable::new();
    let f = table.push(|x| x * x + 1.0);
    let g = table.push(|x| x + 1.0);
    let cfg = SolverConfig::new().set_max_iterations(20)?;

    let rep = fixed_point(&table, &f, &g, 0.0, cfg)?;

    assert_eq!(rep.termination, TerminationReason::IterationLimit);
    assert!(!rep.tolerance_met);
    assert_eq!(rep.iterations, 20);
    Ok(())
}

#[test]
fn exact_zero_mid_iteration_is_a_failure() {
    // g jumps straight onto the root while the step is still huge
    let mut table = DerivativeTable::new();
    let f = table.push(|x| x - 5.0);
    let g = table.push(|_| 5.0);
    let cfg = SolverConfig::new();

    let err = fixed_point(&table, &f, &g, 0.0, cfg).unwrap_err();
    assert!(matches!(err, RootFindingError::FunctionZeroValue { x } if x == 5.0));
}

#[test]
fn non_finite_guess_is_rejected() {
    let mut table = DerivativeTable::new();
    let f = table.push(|x| x);
    let g = table.push(|x| x / 2.0);
    let cfg = SolverConfig::new();

    let err = fixed_point(&table, &f, &g, f64::INFINITY, cfg).unwrap_err();
    assert!(matches!(err, RootFindingError::InvalidGuess { .. }));
}
