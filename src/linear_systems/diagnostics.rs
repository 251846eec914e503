//! Spectral radius diagnostics and post-hoc solution verification.
//!
//! After a solver's loop concludes, whether tolerance was met or the
//! budget exhausted, the iteration matrix implied by the method is
//! formed and its spectral
//! radius (largest eigenvalue magnitude) computed. The value is advisory:
//! it says whether the iteration was theoretically guaranteed to converge
//! for this matrix, independent of whether the run met tolerance.
//!
//! The residual check guards against ill-conditioned systems reporting a
//! false positive: a tolerance on successive iterates does not bound
//! `‖A·x − b‖`.

use super::algorithms::Method;
use super::decompose::{split, Split};
use super::errors::LinearSolverError;
use super::report::{LinearSolverReport, SpectralDiagnostics, TerminationReason};
use crate::trace::IterationTrace;
use nalgebra::{DMatrix, DVector};

/// Slack applied to the iterate tolerance when verifying the relative
/// residual. Coupling the residual directly to the iterate tolerance
/// rejects legitimately converged runs on well-conditioned systems.
pub(crate) const RESIDUAL_SLACK: f64 = 1e3;

impl Method {
    /// Iteration matrix implied by the method for a coefficient matrix.
    ///
    /// - Jacobi       : `D⁻¹ (L + U)`
    /// - Gauss-Seidel : `−(D + L)⁻¹ U`
    /// - SOR          : `(D + ωL)⁻¹ [(1−ω)D − ωU]`
    ///
    /// `omega` is ignored outside SOR.
    ///
    /// # Errors
    /// - [`LinearSolverError::ZeroPivot`] : zero diagonal entry (Jacobi)
    /// - [`LinearSolverError::Singular`]  : non-invertible `D + L` / `D + ωL`
    pub fn iteration_matrix(
        self,
        a: &DMatrix<f64>,
        omega: f64,
    ) -> Result<DMatrix<f64>, LinearSolverError> {
        let Split { d, l, u } = split(a);
        match self {
            Method::Jacobi => {
                if let Some(row) = (0..a.nrows()).find(|&i| d[(i, i)] == 0.0) {
                    return Err(LinearSolverError::ZeroPivot { row });
                }
                let d_inv = DMatrix::from_diagonal(&d.diagonal().map(|v| 1.0 / v));
                Ok(d_inv * (l + u))
            }
            Method::GaussSeidel => {
                let dl_inv = (d + l)
                    .try_inverse()
                    .ok_or(LinearSolverError::Singular { what: "D + L" })?;
                Ok(-(dl_inv * u))
            }
            Method::Sor => {
                let m_inv = (&d + omega * l)
                    .try_inverse()
                    .ok_or(LinearSolverError::Singular { what: "D + omega*L" })?;
                Ok(m_inv * ((1.0 - omega) * d - omega * u))
            }
        }
    }
}

/// Largest eigenvalue magnitude of an iteration matrix.
#[must_use]
pub fn spectral_radius(t: &DMatrix<f64>) -> f64 {
    t.complex_eigenvalues()
        .iter()
        .map(|eig| eig.norm())
        .fold(0.0, f64::max)
}

/// Shared loop epilogue: compute diagnostics, verify the claimed
/// solution, and assemble the report.
///
/// # Errors
/// [`LinearSolverError::ResidualCheckFailed`] when tolerance was
/// nominally met but the relative residual exceeds
/// `tolerance * RESIDUAL_SLACK`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn conclude(
    method: Method,
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    omega: f64,
    solution: DVector<f64>,
    error: f64,
    iterations: usize,
    tolerance: f64,
    trace: IterationTrace<Vec<f64>>,
) -> Result<LinearSolverReport, LinearSolverError> {
    let residual = (a * &solution - b).norm();

    let tolerance_met = error <= tolerance;
    if tolerance_met {
        let relative_residual = residual / b.norm().max(1.0);
        let threshold = tolerance * RESIDUAL_SLACK;
        if relative_residual > threshold {
            return Err(LinearSolverError::ResidualCheckFailed {
                residual: relative_residual,
                threshold,
            });
        }
    }

    let rho = spectral_radius(&method.iteration_matrix(a, omega)?);

    Ok(LinearSolverReport {
        solution,
        iterations,
        error,
        termination: if tolerance_met {
            TerminationReason::ToleranceReached
        } else {
            TerminationReason::IterationLimit
        },
        tolerance_met,
        trace,
        diagnostics: SpectralDiagnostics {
            spectral_radius: rho,
            convergence_guaranteed: rho < 1.0,
            residual,
        },
        method_name: method.method_name(),
    })
}
