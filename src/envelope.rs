//! Result/error reporting protocol.
//!
//! Every method's raw outcome, a `Result` of report or typed failure,
//! is converted here, and only here, into one uniform [`Outcome`]
//! envelope: success carries the root and the iteration trace, failure
//! carries a [`FailureKind`] with a stable code and a human-readable
//! message. Exactly one side is ever populated; the constructors enforce
//! it. Serializing the envelope to a wire format is the caller's concern.

use crate::linear_systems::errors::LinearSolverError;
use crate::linear_systems::report::{LinearSolverReport, SpectralDiagnostics};
use crate::root_finding::errors::RootFindingError;
use crate::root_finding::report::{RootFindingReport, TerminationReason};
use crate::trace::IterationTrace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
}

impl Status {
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Error   => "error",
        }
    }
}

/// Closed failure taxonomy shared by both solver families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    DivisionByZero,
    FunctionEvaluation,
    FunctionZeroValue,
    DerivativeZeroValue,
    MaxIterationsReached,
    ToleranceNotMet,
    RangeNotContainingRoot,
    Matrix,
    Convergence,
    Unknown,
}

impl FailureKind {
    /// Stable wire code for the kind.
    pub const fn code(self) -> &'static str {
        match self {
            FailureKind::DivisionByZero         => "DIVISION_BY_ZERO",
            FailureKind::FunctionEvaluation     => "FUNCTION_EVALUATION_ERROR",
            FailureKind::FunctionZeroValue      => "FUNCTION_ZERO_VALUE",
            FailureKind::DerivativeZeroValue    => "DERIVATIVE_ZERO_VALUE",
            FailureKind::MaxIterationsReached   => "MAX_ITERATIONS_REACHED",
            FailureKind::ToleranceNotMet        => "TOLERANCE_NOT_MET",
            FailureKind::RangeNotContainingRoot => "RANGE_NOT_CONTAINING_ROOT",
            FailureKind::Matrix                 => "MATRIX_ERROR",
            FailureKind::Convergence            => "CONVERGENCE_ERROR",
            FailureKind::Unknown                => "UNKNOWN_ERROR",
        }
    }
}

/// Typed failure carried by an error envelope.
#[derive(Debug, Clone)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

/// Root value: scalar for root finding, vector for linear systems.
#[derive(Debug, Clone, PartialEq)]
pub enum Root {
    Scalar(f64),
    Vector(Vec<f64>),
}

/// Iteration trace in either family's shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Trace {
    Scalar(IterationTrace<f64>),
    Vector(IterationTrace<Vec<f64>>),
}

impl Trace {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Trace::Scalar(t) => t.len(),
            Trace::Vector(t) => t.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Uniform outcome envelope.
///
/// Invariant: exactly one of (`root` + `iterations`) or `error` is
/// populated, never both and never neither. `extra` may accompany either
/// side (linear-solver diagnostics are reported even on exhaustion).
#[derive(Debug, Clone)]
pub struct Outcome {
    status: Status,
    root: Option<Root>,
    iterations: Option<Trace>,
    extra: Option<SpectralDiagnostics>,
    error: Option<Failure>,
}

impl Outcome {
    fn success(root: Root, iterations: Trace, extra: Option<SpectralDiagnostics>) -> Self {
        Self {
            status: Status::Success,
            root: Some(root),
            iterations: Some(iterations),
            extra,
            error: None,
        }
    }

    fn failure(kind: FailureKind, message: String, extra: Option<SpectralDiagnostics>) -> Self {
        Self {
            status: Status::Error,
            root: None,
            iterations: None,
            extra,
            error: Some(Failure { kind, message }),
        }
    }

    /// Wrap a root-finding outcome.
    ///
    /// A report that stopped on the iteration limit, or whose bracket
    /// collapsed before meeting tolerance, becomes an error envelope; the
    /// exhaustion message carries the tolerance fact, since both hold.
    #[must_use]
    pub fn from_root_finding(result: Result<RootFindingReport, RootFindingError>) -> Self {
        match result {
            Ok(report) => match report.termination {
                TerminationReason::IterationLimit => Self::failure(
                    FailureKind::MaxIterationsReached,
                    format!(
                        "reached the maximum of {} iterations; error {:.3e} still above tolerance",
                        report.iterations, report.error,
                    ),
                    None,
                ),
                TerminationReason::BracketCollapsed if !report.tolerance_met => Self::failure(
                    FailureKind::ToleranceNotMet,
                    format!(
                        "bracket collapsed after {} iterations with error {:.3e} above tolerance",
                        report.iterations, report.error,
                    ),
                    None,
                ),
                _ => Self::success(
                    Root::Scalar(report.root),
                    Trace::Scalar(report.trace),
                    None,
                ),
            },
            Err(e) => Self::failure(root_finding_kind(&e), e.to_string(), None),
        }
    }

    /// Wrap a linear-solver outcome, merging spectral diagnostics into
    /// `extra` on success and on exhaustion alike.
    #[must_use]
    pub fn from_linear_system(result: Result<LinearSolverReport, LinearSolverError>) -> Self {
        match result {
            Ok(report) => {
                if report.tolerance_met {
                    Self::success(
                        Root::Vector(report.solution.iter().copied().collect()),
                        Trace::Vector(report.trace),
                        Some(report.diagnostics),
                    )
                } else {
                    Self::failure(
                        FailureKind::MaxIterationsReached,
                        format!(
                            "reached the maximum of {} iterations; error {:.3e} still above tolerance",
                            report.iterations, report.error,
                        ),
                        Some(report.diagnostics),
                    )
                }
            }
            Err(e) => Self::failure(linear_system_kind(&e), e.to_string(), None),
        }
    }

    // accessors
    #[must_use] pub fn status(&self)     -> Status { self.status }
    #[must_use] pub fn root(&self)       -> Option<&Root> { self.root.as_ref() }
    #[must_use] pub fn iterations(&self) -> Option<&Trace> { self.iterations.as_ref() }
    #[must_use] pub fn extra(&self)      -> Option<&SpectralDiagnostics> { self.extra.as_ref() }
    #[must_use] pub fn error(&self)      -> Option<&Failure> { self.error.as_ref() }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

fn root_finding_kind(error: &RootFindingError) -> FailureKind {
    match error {
        RootFindingError::Evaluation(_)
        | RootFindingError::NonFiniteEvaluation { .. }    => FailureKind::FunctionEvaluation,
        RootFindingError::Measure(_)
        | RootFindingError::UpdateDivisionByZero { .. }   => FailureKind::DivisionByZero,
        RootFindingError::RangeNotContainingRoot { .. }   => FailureKind::RangeNotContainingRoot,
        RootFindingError::FunctionZeroValue { .. }        => FailureKind::FunctionZeroValue,
        RootFindingError::DerivativeZeroValue { .. }      => FailureKind::DerivativeZeroValue,
        RootFindingError::Config(_)
        | RootFindingError::InvalidBracket { .. }
        | RootFindingError::InvalidGuess { .. }           => FailureKind::Unknown,
    }
}

fn linear_system_kind(error: &LinearSolverError) -> FailureKind {
    match error {
        LinearSolverError::Measure(_)
        | LinearSolverError::ZeroPivot { .. }             => FailureKind::DivisionByZero,
        LinearSolverError::NotSquare { .. }
        | LinearSolverError::EmptySystem
        | LinearSolverError::DimensionMismatch { .. }
        | LinearSolverError::Singular { .. }
        | LinearSolverError::NonFiniteIterate { .. }      => FailureKind::Matrix,
        LinearSolverError::ResidualCheckFailed { .. }     => FailureKind::Convergence,
        LinearSolverError::Config(_)
        | LinearSolverError::InvalidRelaxation { .. }     => FailureKind::Unknown,
    }
}
