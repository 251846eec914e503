//! tests for the modified Newton method

use approx::assert_abs_diff_eq;
use riffle::config::SolverConfig;
use riffle::expression::DerivativeTable;
use riffle::root_finding::errors::RootFindingError;
use riffle::root_finding::multiple_roots::multiple_roots;
use riffle::root_finding::report::TerminationReason;

type TestResult = Result<(), RootFindingError>;

#[test]
fn finds_double_root_of_cubic() -> TestResult {
    // x^3 - 3x + 2 = (x - 1)^2 (x + 2): double root at 1
    let mut table = DerivativeTable::new();
    let f = table.push(|x| x * x * x - 3.0 * x + 2.0);
    table.push(|x| 3.0 * x * x - 3.0);
    table.push(|x| 6.0 * x);
    let cfg = SolverConfig::new().set_tolerance(1e-3)?;

    let rep = multiple_roots(&table, &f, 1.5, cfg)?;

    assert_eq!(rep.termination, TerminationReason::ToleranceReached);
    assert_abs_diff_eq!(rep.root, 1.0, epsilon = 1e-6);
    // quadratic even at a double root, where plain Newton crawls
    assert!(rep.iterations <= 8);
    assert_eq!(rep.method_name, "multiple_roots");
    Ok(())
}

#[test]
fn simple_root_still_converges() -> TestResult {
    let mut table = DerivativeTable::new();
    let f = table.push(|x| x * x - 2.0);
    table.push(|x| 2.0 * x);
    table.push(|_| 2.0);
    let cfg = SolverConfig::new().set_tolerance(1e-10)?;

    let rep = multiple_roots(&table, &f, 1.0, cfg)?;

    assert!(rep.tolerance_met);
    assert_abs_diff_eq!(rep.root, 2.0_f64.sqrt(), epsilon = 1e-9);
    assert_eq!(rep.trace.len(), rep.iterations + 1);
    Ok(())
}

#[test]
fn exact_landing_on_root_is_a_failure() {
    // for (x - 1)^2 the modified update is exact: one step from any
    // starting point lands precisely on 1, while the step error is still
    // far above tolerance
    let mut table = DerivativeTable::new();
    let f = table.push(|x| x * x - 2.0 * x + 1.0);
    table.push(|x| 2.0 * x - 2.0);
    table.push(|_| 2.0);
    let cfg = SolverConfig::new();

    let err = multiple_roots(&table, &f, 2.0, cfg).unwrap_err();
    assert!(matches!(err, RootFindingError::FunctionZeroValue { x } if x == 1.0));
}

#[test]
fn flat_derivative_is_a_failure() {
    let mut table = DerivativeTable::new();
    let f = table.push(|x| x * x - 2.0);
    table.push(|x| 2.0 * x);
    table.push(|_| 2.0);
    let cfg = SolverConfig::new();

    let err = multiple_roots(&table, &f, 0.0, cfg).unwrap_err();
    assert!(matches!(err, RootFindingError::DerivativeZeroValue { x } if x == 0.0));
}

#[test]
fn missing_second_derivative_is_an_evaluation_error() {
    let mut table = DerivativeTable::new();
    let f = table.push(|x| x * x - 2.0);
    table.push(|x| 2.0 * x);
    let cfg = SolverConfig::new();

    let err = multiple_roots(&table, &f, 1.0, cfg).unwrap_err();
    assert!(matches!(err, RootFindingError::Evaluation(_)));
}
