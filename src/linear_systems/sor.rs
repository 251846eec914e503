//! Successive over-relaxation (SOR) method

use super::algorithms::Method;
use super::decompose::{check_finite, check_system, split, Split};
use super::diagnostics::conclude;
use super::errors::LinearSolverError;
use super::report::LinearSolverReport;
use crate::config::SolverConfig;
use crate::convergence;
use crate::trace::{IterationTrace, INITIAL_ERROR};
use nalgebra::{DMatrix, DVector};

/// Solves `A·x = b` with
/// [successive over-relaxation](https://en.wikipedia.org/wiki/Successive_over-relaxation),
/// in matrix form:
///
/// `x_new = (D + ωL)⁻¹ [(1−ω)D − ωU] x + ω (D + ωL)⁻¹ b`
///
/// The relaxation factor `ω` tunes convergence speed; `ω = 1`
/// degenerates to Gauss-Seidel, `ω > 1` over-relaxes, `ω < 1`
/// under-relaxes. Values outside `(0, 2)` cannot converge for any matrix
/// and are rejected.
///
/// # Arguments
/// - `a`     : square coefficient matrix with non-zero diagonal
/// - `b`     : right-hand side
/// - `x0`    : initial guess
/// - `omega` : relaxation factor, finite in `(0, 2)`
/// - `cfg`   : [`SolverConfig`] (tolerance, iteration budget, error type)
///
/// # Errors
/// - [`LinearSolverError::InvalidRelaxation`]   : `omega` outside `(0, 2)`
/// - [`LinearSolverError::NotSquare`] / [`LinearSolverError::DimensionMismatch`]
/// - [`LinearSolverError::ZeroPivot`]           : zero diagonal entry
/// - [`LinearSolverError::Singular`]            : `D + ωL` not invertible
/// - [`LinearSolverError::NonFiniteIterate`]    : the iteration diverged to NaN/∞
/// - [`LinearSolverError::Measure`]             : relative error with a zero-norm iterate
/// - [`LinearSolverError::ResidualCheckFailed`] : post-hoc verification failed
pub fn sor(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    x0: &DVector<f64>,
    omega: f64,
    cfg: SolverConfig,
) -> Result<LinearSolverReport, LinearSolverError> {
    if !omega.is_finite() || omega <= 0.0 || omega >= 2.0 {
        return Err(LinearSolverError::InvalidRelaxation { got: omega });
    }
    check_system(a, b, x0)?;

    let Split { d, l, u } = split(a);
    let m_inv = (&d + omega * l)
        .try_inverse()
        .ok_or(LinearSolverError::Singular { what: "D + omega*L" })?;
    let t = &m_inv * ((1.0 - omega) * d - omega * u);
    let c = omega * (&m_inv * b);

    let tolerance = cfg.tolerance();
    let error_type = cfg.error_type();
    let mut x = x0.clone();
    let mut error = INITIAL_ERROR;
    let mut iterations = 0;
    let mut trace = IterationTrace::new();
    trace.append(x.iter().copied().collect(), None, error);

    while error > tolerance && iterations < cfg.max_iterations() {
        let x_new = &t * &x + &c;
        iterations += 1;
        check_finite(&x_new, iterations)?;
        error = convergence::vector(&x_new, &x, error_type)?;
        x = x_new;
        trace.append(x.iter().copied().collect(), None, error);
    }

    conclude(Method::Sor, a, b, omega, x, error, iterations, tolerance, trace)
}
