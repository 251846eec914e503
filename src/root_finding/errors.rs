//! Root-finding error types.
//!
//! One family-wide enum; every failure is raised at the point of
//! detection and propagates unhandled to the reporting boundary
//! ([`crate::envelope`]), which converts it into the outcome envelope.
//! Leaf error types (config, expression, error measurement) are wrapped
//! transparently.

use crate::config::ConfigError;
use crate::convergence::MeasureError;
use crate::expression::EvalError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Evaluation(#[from] EvalError),

    #[error(transparent)]
    Measure(#[from] MeasureError),

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid bracket: bounds must be finite with left < right. got [{left}, {right}]")]
    InvalidBracket { left: f64, right: f64 },

    #[error("no sign change on [{left}, {right}]: f(left) * f(right) > 0")]
    RangeNotContainingRoot { left: f64, right: f64 },

    #[error("invalid initial guess: x0={x0} must be finite")]
    InvalidGuess { x0: f64 },

    #[error("f takes an exact zero value at x={x} before tolerance was met")]
    FunctionZeroValue { x: f64 },

    #[error("derivative of f takes an exact zero value at x={x}")]
    DerivativeZeroValue { x: f64 },

    #[error("zero denominator in update formula at x={x}")]
    UpdateDivisionByZero { x: f64 },
}
