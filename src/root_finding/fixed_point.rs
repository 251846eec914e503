//! Fixed-point iteration

use super::algorithms::{Method, OpenFamily};
use super::errors::RootFindingError;
use super::eval::eval_checked;
use super::report::{RootFindingReport, TerminationReason};
use crate::config::SolverConfig;
use crate::convergence;
use crate::expression::Evaluator;
use crate::trace::{IterationTrace, INITIAL_ERROR};

const METHOD: &str = Method::Open(OpenFamily::FixedPoint).method_name();

/// Finds a root of `f` by
/// [fixed-point iteration](https://en.wikipedia.org/wiki/Fixed-point_iteration)
/// on a caller-supplied iteration function `g`: `x_new = g(x)`, with `f`
/// re-evaluated at each new iterate.
///
/// `g` must be a rearrangement of `f(x) = 0` into `x = g(x)`; the engine
/// does not check this, it only tracks `f` along the iteration.
///
/// # Arguments
/// - `ev`  : expression collaborator ([`Evaluator`])
/// - `f`   : expression whose root is sought
/// - `g`   : iteration function expression
/// - `x0`  : finite starting point
/// - `cfg` : [`SolverConfig`] (tolerance, iteration budget, error type)
///
/// # Errors
/// - [`RootFindingError::InvalidGuess`]        : `x0` non-finite
/// - [`RootFindingError::FunctionZeroValue`]   : `f` hit an exact zero
///   mid-iteration before tolerance was met (distinct from `x0` already
///   being a root, which is an early success)
/// - [`RootFindingError::NonFiniteEvaluation`] : `f` or `g` produced NaN/∞
/// - [`RootFindingError::Evaluation`]          : collaborator rejected an expression
/// - [`RootFindingError::Measure`]             : relative error with a zero previous iterate
pub fn fixed_point<E: Evaluator>(
    ev: &E,
    f: &E::Expr,
    g: &E::Expr,
    x0: f64,
    cfg: SolverConfig,
) -> Result<RootFindingReport, RootFindingError> {
    if !x0.is_finite() {
        return Err(RootFindingError::InvalidGuess { x0 });
    }

    let tolerance = cfg.tolerance();
    let error_type = cfg.error_type();
    let mut evals = 0;
    let mut trace = IterationTrace::new();

    let mut x = x0;
    let mut fx = eval_checked(ev, f, x, &mut evals)?;
    if fx == 0.0 {
        trace.append(x, Some(fx), 0.0);
        return Ok(RootFindingReport {
            root          : x,
            f_root        : fx,
            iterations    : 0,
            evaluations   : evals,
            error         : 0.0,
            termination   : TerminationReason::ExactRootFound,
            tolerance_met : true,
            trace,
            method_name   : METHOD,
        });
    }

    let mut error = INITIAL_ERROR;
    let mut iterations = 0;
    trace.append(x, Some(fx), error);

    while error > tolerance && fx != 0.0 && iterations < cfg.max_iterations() {
        let x_new = eval_checked(ev, g, x, &mut evals)?;
        fx = eval_checked(ev, f, x_new, &mut evals)?;
        iterations += 1;
        error = convergence::scalar(x_new, x, error_type)?;
        x = x_new;
        trace.append(x, Some(fx), error);
    }

    let tolerance_met = error <= tolerance;
    if !tolerance_met && fx == 0.0 {
        return Err(RootFindingError::FunctionZeroValue { x });
    }

    Ok(RootFindingReport {
        root          : x,
        f_root        : fx,
        iterations,
        evaluations   : evals,
        error,
        termination   : if tolerance_met {
            TerminationReason::ToleranceReached
        } else {
            TerminationReason::IterationLimit
        },
        tolerance_met,
        trace,
        method_name   : METHOD,
    })
}
