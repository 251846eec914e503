//! Gauss-Seidel method

use super::algorithms::Method;
use super::decompose::{check_finite, check_system};
use super::diagnostics::conclude;
use super::errors::LinearSolverError;
use super::report::LinearSolverReport;
use crate::config::SolverConfig;
use crate::convergence;
use crate::trace::{IterationTrace, INITIAL_ERROR};
use nalgebra::{DMatrix, DVector};

/// Solves `A·x = b` with the
/// [Gauss-Seidel method](https://en.wikipedia.org/wiki/Gauss%E2%80%93Seidel_method):
///
/// `x_new[i] = (b[i] − Σ_{j<i} A[i,j]·x_new[j] − Σ_{j>i} A[i,j]·x_old[j]) / A[i,i]`
///
/// Sequential sweep: each entry uses the entries already updated within
/// the same sweep, which typically halves the iteration count relative
/// to Jacobi on matrices where both converge.
///
/// # Arguments
/// - `a`   : square coefficient matrix with non-zero diagonal
/// - `b`   : right-hand side
/// - `x0`  : initial guess (a zero vector reproduces the classical start)
/// - `cfg` : [`SolverConfig`] (tolerance, iteration budget, error type)
///
/// # Errors
/// - [`LinearSolverError::NotSquare`] / [`LinearSolverError::DimensionMismatch`]
/// - [`LinearSolverError::ZeroPivot`]           : zero diagonal entry
/// - [`LinearSolverError::NonFiniteIterate`]    : the iteration diverged to NaN/∞
/// - [`LinearSolverError::Measure`]             : relative error with a zero-norm iterate
/// - [`LinearSolverError::ResidualCheckFailed`] : post-hoc verification failed
pub fn gauss_seidel(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    x0: &DVector<f64>,
    cfg: SolverConfig,
) -> Result<LinearSolverReport, LinearSolverError> {
    check_system(a, b, x0)?;

    let n = a.nrows();
    let tolerance = cfg.tolerance();
    let error_type = cfg.error_type();
    let mut x = x0.clone();
    let mut error = INITIAL_ERROR;
    let mut iterations = 0;
    let mut trace = IterationTrace::new();
    trace.append(x.iter().copied().collect(), None, error);

    while error > tolerance && iterations < cfg.max_iterations() {
        let x_old = x.clone();
        let mut x_new = x_old.clone();
        for i in 0..n {
            let mut ahead = 0.0;
            for j in 0..i {
                ahead += a[(i, j)] * x_new[j];
            }
            let mut behind = 0.0;
            for j in (i + 1)..n {
                behind += a[(i, j)] * x_old[j];
            }
            x_new[i] = (b[i] - ahead - behind) / a[(i, i)];
        }

        iterations += 1;
        check_finite(&x_new, iterations)?;
        error = convergence::vector(&x_new, &x_old, error_type)?;
        x = x_new;
        trace.append(x.iter().copied().collect(), None, error);
    }

    conclude(Method::GaussSeidel, a, b, 1.0, x, error, iterations, tolerance, trace)
}
