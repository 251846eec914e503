//! Linear-solver error types.
//!
//! Risky divisions are pre-checked (zero pivots, singular intermediate
//! matrices) and surface as typed failures before a NaN or infinity can
//! enter the iteration trace. Leaf error types are wrapped transparently.

use crate::config::ConfigError;
use crate::convergence::MeasureError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinearSolverError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Measure(#[from] MeasureError),

    #[error("zero pivot: diagonal entry ({row}, {row}) of the coefficient matrix is zero")]
    ZeroPivot { row: usize },

    #[error("coefficient matrix must be square. got {nrows}x{ncols}")]
    NotSquare { nrows: usize, ncols: usize },

    #[error("empty system: the coefficient matrix has no rows")]
    EmptySystem,

    #[error("dimension mismatch: matrix is {n}x{n} but {what} has {len} entries")]
    DimensionMismatch { n: usize, what: &'static str, len: usize },

    #[error("matrix {what} is singular and cannot be inverted")]
    Singular { what: &'static str },

    #[error("invalid relaxation factor: omega must be finite in (0, 2). got {got}")]
    InvalidRelaxation { got: f64 },

    #[error("iterate became non-finite at iteration {iteration}: diverging or ill-conditioned system")]
    NonFiniteIterate { iteration: usize },

    #[error("relative residual {residual:.3e} exceeds {threshold:.3e}: claimed solution fails verification")]
    ResidualCheckFailed { residual: f64, threshold: f64 },
}
