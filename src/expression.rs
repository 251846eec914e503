//! Expression evaluator seam.
//!
//! The engine consumes exactly two operations from a symbolic-math
//! collaborator: evaluating an expression at a point and differentiating
//! an expression. Both are abstracted behind the [`Evaluator`] trait so
//! the engine never depends on a concrete expression representation —
//! a textual-expression backend and the closure-backed
//! [`DerivativeTable`] below are interchangeable.

use thiserror::Error;

/// Failures reported by the expression collaborator.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("cannot evaluate expression at x={x}: {message}")]
    Evaluate { x: f64, message: String },

    #[error("cannot differentiate expression: {message}")]
    Differentiate { message: String },
}

/// Capability interface over the external expression collaborator.
pub trait Evaluator {
    /// Opaque expression handle. Cloned when a derivative expression is
    /// retained across iterations.
    type Expr: Clone;

    /// Evaluate `expr` at the point `x`.
    fn evaluate(&self, expr: &Self::Expr, x: f64) -> Result<f64, EvalError>;

    /// Symbolically differentiate `expr`, yielding a new expression.
    fn differentiate(&self, expr: &Self::Expr) -> Result<Self::Expr, EvalError>;
}

/// [`Evaluator`] backed by an ordered table of closures, where entry
/// `k + 1` is the derivative of entry `k`.
///
/// Expression handles are table indices; [`Evaluator::differentiate`]
/// shifts one slot down the table and fails past the last entry. Intended
/// for callers with native Rust functions (and for tests), where analytic
/// derivatives are supplied up front instead of derived symbolically.
#[derive(Default)]
pub struct DerivativeTable {
    entries: Vec<Box<dyn Fn(f64) -> f64>>,
}

impl DerivativeTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a function; returns its expression handle.
    pub fn push<F>(&mut self, f: F) -> usize
    where
        F: Fn(f64) -> f64 + 'static,
    {
        self.entries.push(Box::new(f));
        self.entries.len() - 1
    }
}

impl Evaluator for DerivativeTable {
    type Expr = usize;

    fn evaluate(&self, expr: &usize, x: f64) -> Result<f64, EvalError> {
        match self.entries.get(*expr) {
            Some(f) => Ok(f(x)),
            None => Err(EvalError::Evaluate {
                x,
                message: format!("no expression with handle {expr}"),
            }),
        }
    }

    fn differentiate(&self, expr: &usize) -> Result<usize, EvalError> {
        let next = expr + 1;
        if next >= self.entries.len() {
            return Err(EvalError::Differentiate {
                message: format!("no derivative registered for handle {expr}"),
            });
        }
        Ok(next)
    }
}
