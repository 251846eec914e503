//! Modified Newton method for multiple roots

use super::algorithms::{Method, OpenFamily};
use super::errors::RootFindingError;
use super::eval::eval_checked;
use super::report::{RootFindingReport, TerminationReason};
use crate::config::SolverConfig;
use crate::convergence;
use crate::expression::Evaluator;
use crate::trace::{IterationTrace, INITIAL_ERROR};

const METHOD: &str = Method::Open(OpenFamily::MultipleRoots).method_name();

/// Finds a root of `f` using the modified Newton update for roots of
/// multiplicity greater than one:
///
/// `x_new = x - f·f' / (f'² - f·f'')`
///
/// First and second derivatives are obtained at entry via
/// [`Evaluator::differentiate`], applied twice. Restores quadratic
/// convergence at multiple roots, where plain Newton-Raphson degrades to
/// linear.
///
/// # Arguments
/// - `ev`  : expression collaborator ([`Evaluator`])
/// - `f`   : expression whose root is sought
/// - `x0`  : finite starting point
/// - `cfg` : [`SolverConfig`] (tolerance, iteration budget, error type)
///
/// # Errors
/// - [`RootFindingError::InvalidGuess`]          : `x0` non-finite
/// - [`RootFindingError::DerivativeZeroValue`]   : `f'(x) == 0` mid-iteration
/// - [`RootFindingError::FunctionZeroValue`]     : `f` hit an exact zero
///   mid-iteration before tolerance was met
/// - [`RootFindingError::UpdateDivisionByZero`]  : `f'² - f·f''` vanished
/// - [`RootFindingError::NonFiniteEvaluation`]   : an evaluation produced NaN/∞
/// - [`RootFindingError::Evaluation`]            : evaluation or differentiation rejected
/// - [`RootFindingError::Measure`]               : relative error with a zero previous iterate
pub fn multiple_roots<E: Evaluator>(
    ev: &E,
    f: &E::Expr,
    x0: f64,
    cfg: SolverConfig,
) -> Result<RootFindingReport, RootFindingError> {
    if !x0.is_finite() {
        return Err(RootFindingError::InvalidGuess { x0 });
    }

    let df = ev.differentiate(f)?;
    let d2f = ev.differentiate(&df)?;

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
        let dfx = eval_checked(ev, &df, x, &mut evals)?;
        if dfx == 0.0 {
            return Err(RootFindingError::DerivativeZeroValue { x });
        }
        let d2fx = eval_checked(ev, &d2f, x, &mut evals)?;

        let denominator = dfx * dfx - fx * d2fx;
        if denominator == 0.0 {
            return Err(RootFindingError::UpdateDivisionByZero { x });
        }

        let x_new = x - (fx * dfx) / denominator;
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
