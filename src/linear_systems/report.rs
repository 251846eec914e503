//! Defines the [`LinearSolverReport`] struct returned by all
//! linear-system solvers.

use crate::trace::IterationTrace;
use nalgebra::DVector;

/// Reasons a linear-solver loop may stop. Exhaustion and tolerance are
/// independent facts; see [`LinearSolverReport::tolerance_met`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
}

/// Advisory convergence diagnostics computed after the loop concludes,
/// whether or not tolerance was met.
///
/// - `spectral_radius`        : largest eigenvalue magnitude of the
///   method's iteration matrix; `< 1` means the iteration was
///   theoretically guaranteed to converge for this matrix
/// - `convergence_guaranteed` : `spectral_radius < 1`
/// - `residual`               : `‖A·x − b‖₂` at the returned solution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralDiagnostics {
    pub spectral_radius: f64,
    pub convergence_guaranteed: bool,
    pub residual: f64,
}

/// Summary of a linear-solver run.
///
/// - `solution`      : final iterate
/// - `iterations`    : sweeps performed; `trace.len() == iterations + 1`
/// - `error`         : last measured error vs. the previous iterate
/// - `termination`   : why the loop stopped
/// - `tolerance_met` : whether `error <= tolerance` at exit
/// - `trace`         : per-step audit trail (iterates as `Vec<f64>`)
/// - `diagnostics`   : [`SpectralDiagnostics`]
/// - `method_name`   : e.g. `"jacobi"`
#[derive(Debug, Clone)]
pub struct LinearSolverReport {
    pub solution: DVector<f64>,
    pub iterations: usize,
    pub error: f64,
    pub termination: TerminationReason,
    pub tolerance_met: bool,
    pub trace: IterationTrace<Vec<f64>>,
    pub diagnostics: SpectralDiagnostics,
    pub method_name: &'static str,
}
