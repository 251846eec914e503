//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding methods.

use crate::trace::IterationTrace;

/// Reasons a root-finding loop may stop.
///
/// Exhaustion and tolerance are independent facts: `termination`
/// says why the loop stopped, [`RootFindingReport::tolerance_met`]
/// says whether the final error met tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// Measured error dropped to or below the configured tolerance.
    ToleranceReached,
    /// An iterate or bracket endpoint hit an exact zero of `f`.
    ExactRootFound,
    /// Bracket endpoints collapsed to equal function values
    /// (false position only).
    BracketCollapsed,
    /// The iteration budget was exhausted before meeting tolerance.
    IterationLimit,
}

/// Summary of a root-finding run.
///
/// - `root`          : best root approximation
/// - `f_root`        : function value at `root`
/// - `iterations`    : corrections performed; `trace.len() == iterations + 1`
/// - `evaluations`   : total expression-evaluator calls
/// - `error`         : last measured error vs. the previous iterate
/// - `termination`   : why the loop stopped
/// - `tolerance_met` : whether `error <= tolerance` at exit
/// - `trace`         : per-step audit trail
/// - `method_name`   : e.g. `"bisection"`
#[derive(Debug, Clone)]
pub struct RootFindingReport {
    pub root: f64,
    pub f_root: f64,
    pub iterations: usize,
    pub evaluations: usize,
    pub error: f64,
    pub termination: TerminationReason,
    pub tolerance_met: bool,
    pub trace: IterationTrace<f64>,
    pub method_name: &'static str,
}
