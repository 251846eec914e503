//! False position (regula falsi) method

use super::algorithms::{BracketFamily, Method};
use super::errors::RootFindingError;
use super::eval::eval_checked;
use super::report::{RootFindingReport, TerminationReason};
use crate::config::SolverConfig;
use crate::convergence;
use crate::expression::Evaluator;
use crate::trace::{IterationTrace, INITIAL_ERROR};

const METHOD: &str = Method::Bracket(BracketFamily::FalsePosition).method_name();

/// Secant-weighted interior point of the bracket.
#[inline]
fn interior_point(left: f64, right: f64, f_left: f64, f_right: f64) -> f64 {
    right - f_right * (right - left) / (f_right - f_left)
}

/// Finds a root of `f` on `[left, right]` using the
/// [false position method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// Like bisection, but the next estimate is the secant-weighted interior
/// point using both endpoints' function values, so it leans toward the
/// endpoint with the smaller residual. An opposite-sign bracket is a hard
/// entry precondition, not silently handled.
///
/// # Arguments
/// - `ev`    : expression collaborator ([`Evaluator`])
/// - `f`     : expression whose root is sought
/// - `left`  : lower bracket bound, finite and `< right`
/// - `right` : upper bracket bound, finite
/// - `cfg`   : [`SolverConfig`] (tolerance, iteration budget, error type)
///
/// # Returns
/// [`RootFindingReport`]. If the two endpoint function values become
/// numerically equal the secant denominator vanishes; the loop performs
/// its designed early exit with [`TerminationReason::BracketCollapsed`]
/// and the current estimate.
///
/// # Errors
/// - [`RootFindingError::InvalidBracket`]          : non-finite bounds or `left >= right`
/// - [`RootFindingError::RangeNotContainingRoot`]  : `f(left) * f(right) > 0`
/// - [`RootFindingError::NonFiniteEvaluation`]     : `f` produced NaN/∞
/// - [`RootFindingError::Evaluation`]              : collaborator rejected the expression
/// - [`RootFindingError::Measure`]                 : relative error with a zero previous iterate
pub fn false_position<E: Evaluator>(
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
    let mut f_right = eval_checked(ev, f, right, &mut evals)?;
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

    let mut x = interior_point(left, right, f_left, f_right);
    let mut fx = eval_checked(ev, f, x, &mut evals)?;
    let mut error = INITIAL_ERROR;
    let mut iterations = 0;
    let mut collapsed = false;
    trace.append(x, Some(fx), error);

    while error > tolerance && fx != 0.0 && iterations < cfg.max_iterations() {
        if f_left * fx > 0.0 {
            left = x;
            f_left = fx;
        } else {
            right = x;
            f_right = fx;
        }

        // vanished secant denominator: bracket collapsed
        if f_right - f_left == 0.0 {
            collapsed = true;
            break;
        }

        let x_new = interior_point(left, right, f_left, f_right);
        fx = eval_checked(ev, f, x_new, &mut evals)?;
        iterations += 1;
        error = convergence::scalar(x_new, x, error_type)?;
        x = x_new;
        trace.append(x, Some(fx), error);
    }

    let tolerance_met = error <= tolerance;
    let termination = if collapsed {
        TerminationReason::BracketCollapsed
    } else if tolerance_met {
        TerminationReason::ToleranceReached
    } else if fx == 0.0 {
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
