//! Bisection method

use super::algorithms::{BracketFamily, Method};
use super::errors::RootFindingError;
use super::eval::eval_checked;
use super::report::{RootFindingReport, TerminationReason};
use crate::config::SolverConfig;
use crate::convergence;
use crate::expression::Evaluator;
use crate::trace::{IterationTrace, INITIAL_ERROR};

const METHOD: &str = Method::Bracket(BracketFamily::Bisection).method_name();

#[inline]
fn midpoint(left: f64, right: f64) -> f64 {
    left + (right - left) * 0.5
}

/// Finds a root of `f` on `[left, right]` using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Requires `f` continuous on the bracket with a sign change across it,
/// which guarantees a root exists inside. Each step halves the bracket,
/// replacing the endpoint whose function value shares sign with the
/// midpoint's.
///
/// # Arguments
/// - `ev`    : expression collaborator ([`Evaluator`])
/// - `f`     : expression whose root is sought
/// - `left`  : lower bracket bound, finite and `< right`
/// - `right` : upper bracket bound, finite
/// - `cfg`   : [`SolverConfig`] (tolerance, iteration budget, error type)
///
/// # Returns
/// [`RootFindingReport`]; the trace holds the midpoint sequence starting
/// with the initial midpoint at index 0 (sentinel error). If an endpoint
/// is already an exact root, returns it with a one-record trace and zero
/// error.
///
/// # Errors
/// - [`RootFindingError::InvalidBracket`]          : non-finite bounds or `left >= right`
/// - [`RootFindingError::RangeNotContainingRoot`]  : `f(left) * f(right) > 0`
/// - [`RootFindingError::NonFiniteEvaluation`]     : `f` produced NaN/∞
/// - [`RootFindingError::Evaluation`]              : collaborator rejected the expression
/// - [`RootFindingError::Measure`]                 : relative error with a zero previous iterate
pub fn bisection<E: Evaluator>(
    ev: &E,
    f: &E::Expr,
    mut left: f64,
    mut right: f64,
    cfg: SolverConfig,
) -> Result<RootFindingReport, RootFindingError> {
    if !(left.is_finite() && right.is_finite()) || left >= right {
        return Err(RootFindingError::InvalidBracket { left, right });
    }

    let tolerance = cfg.tolerance();
    let error_type = cfg.error_type();
    let mut evals = 0;
    let mut trace = IterationTrace::new();

    // endpoint already an exact root
    let mut f_left = eval_checked(ev, f, left, &mut evals)?;
    if f_left == 0.0 {
        trace.append(left, Some(f_left), 0.0);
        return Ok(RootFindingReport {
            root          : left,
            f_root        : f_left,
            iterations    : 0,
            evaluations   : evals,
            error         : 0.0,
            termination   : TerminationReason::ExactRootFound,
            tolerance_met : true,
            trace,
            method_name   : METHOD,
        });
    }
    let f_right = eval_checked(ev, f, right, &mut evals)?;
    if f_right == 0.0 {
        trace.append(right, Some(f_right), 0.0);
        return Ok(RootFindingReport {
            root          : right,
            f_root        : f_right,
            iterations    : 0,
            evaluations   : evals,
            error         : 0.0,
            termination   : TerminationReason::ExactRootFound,
            tolerance_met : true,
            trace,
            method_name   : METHOD,
        });
    }

    if f_left * f_right > 0.0 {
        return Err(RootFindingError::RangeNotContainingRoot { left, right });
    }

    let mut x = midpoint(left, right);
    let mut fx = eval_checked(ev, f, x, &mut evals)?;
    let mut error = INITIAL_ERROR;
    let mut iterations = 0;
    trace.append(x, Some(fx), error);

    while error > tolerance && fx != 0.0 && iterations < cfg.max_iterations() {
        // shrink the bracket around the sign change
        if f_left * fx > 0.0 {
            left = x;
            f_left = fx;
        } else {
            right = x;
        }

        let x_new = midpoint(left, right);
        fx = eval_checked(ev, f, x_new, &mut evals)?;
        iterations += 1;
        error = convergence::scalar(x_new, x, error_type)?;
        x = x_new;
        trace.append(x, Some(fx), error);
    }

    let tolerance_met = error <= tolerance;
    let termination = if tolerance_met {
        TerminationReason::ToleranceReached
    } else if fx == 0.0 {
        // exact midpoint zero short-circuits as the root
        TerminationReason::ExactRootFound
    } else {
        TerminationReason::IterationLimit
    };

    Ok(RootFindingReport {
        root          : x,
        f_root        : fx,
        iterations,
        evaluations   : evals,
        error,
        termination,
        tolerance_met,
        trace,
        method_name   : METHOD,
    })
}
