//! Jacobi method

use super::algorithms::Method;
use super::decompose::{check_finite, check_system, split, Split};
use super::diagnostics::conclude;
use super::errors::LinearSolverError;
use super::report::LinearSolverReport;
use crate::config::SolverConfig;
use crate::convergence;
use crate::trace::{IterationTrace, INITIAL_ERROR};
use nalgebra::{DMatrix, DVector};

/// Solves `A·x = b` with the
/// [Jacobi method](https://en.wikipedia.org/wiki/Jacobi_method):
///
/// `x_new = D⁻¹ (b − (L + U) x)`
///
/// Fully parallel update: every entry of `x_new` uses only the previous
/// iterate. Convergence is guaranteed when the spectral radius of
/// `D⁻¹(L+U)` is below 1 (e.g. strictly diagonally dominant systems);
/// the returned diagnostics report that radius either way.
///
/// # Arguments
/// - `a`   : square coefficient matrix with non-zero diagonal
/// - `b`   : right-hand side
/// - `x0`  : initial guess
/// - `cfg` : [`SolverConfig`] (tolerance, iteration budget, error type)
///
/// # Errors
/// - [`LinearSolverError::NotSquare`] / [`LinearSolverError::DimensionMismatch`]
/// - [`LinearSolverError::ZeroPivot`]           : zero diagonal entry
/// - [`LinearSolverError::NonFiniteIterate`]    : the iteration diverged to NaN/∞
/// - [`LinearSolverError::Measure`]             : relative error with a zero-norm iterate
/// - [`LinearSolverError::ResidualCheckFailed`] : post-hoc verification failed
pub fn jacobi(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    x0: &DVector<f64>,
    cfg: SolverConfig,
) -> Result<LinearSolverReport, LinearSolverError> {
    check_system(a, b, x0)?;

    let Split { d, l, u } = split(a);
    let lu = l + u;
    let d_inv = DMatrix::from_diagonal(&d.diagonal().map(|v| 1.0 / v));

    let tolerance = cfg.tolerance();
    let error_type = cfg.error_type();
    let mut x = x0.clone();
    let mut error = INITIAL_ERROR;
    let mut iterations = 0;
    let mut trace = IterationTrace::new();
    trace.append(x.iter().copied().collect(), None, error);

    while error > tolerance && iterations < cfg.max_iterations() {
        let x_new = &d_inv * (b - &lu * &x);
        iterations += 1;
        check_finite(&x_new, iterations)?;
        error = convergence::vector(&x_new, &x, error_type)?;
        x = x_new;
        trace.append(x.iter().copied().collect(), None, error);
    }

    conclude(Method::Jacobi, a, b, 1.0, x, error, iterations, tolerance, trace)
}
