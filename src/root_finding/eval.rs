//! Checked evaluation over the expression collaborator.

use super::errors::RootFindingError;
use crate::expression::Evaluator;

/// Evaluate `expr` at `x`, counting the call and rejecting non-finite
/// results with a typed failure instead of letting NaN/∞ reach the trace.
#[inline]
pub(crate) fn eval_checked<E: Evaluator>(
    ev: &E,
    expr: &E::Expr,
    x: f64,
    evals: &mut usize,
) -> Result<f64, RootFindingError> {
    *evals += 1;
    let fx = ev.evaluate(expr, x)?;
    if !fx.is_finite() {
        return Err(RootFindingError::NonFiniteEvaluation { x, fx });
    }
    Ok(fx)
}
