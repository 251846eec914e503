//! `A = D + L + U` decomposition and system entry checks.
//!
//! One sign convention throughout the crate: `D` is the diagonal, `L`
//! and `U` are the strict lower/upper triangular parts of `A`,
//! unnegated, so `D + L + U == A`.

use super::errors::LinearSolverError;
use nalgebra::{DMatrix, DVector};

pub(crate) struct Split {
    pub d: DMatrix<f64>,
    pub l: DMatrix<f64>,
    pub u: DMatrix<f64>,
}

pub(crate) fn split(a: &DMatrix<f64>) -> Split {
    let d = DMatrix::from_diagonal(&a.diagonal());
    let mut l = a.lower_triangle();
    l.fill_diagonal(0.0);
    let mut u = a.upper_triangle();
    u.fill_diagonal(0.0);
    Split { d, l, u }
}

/// Entry checks shared by all three solvers: square non-empty matrix,
/// agreeing dimensions, and non-zero diagonal entries. A zero pivot is a
/// detectable failure here, not a precondition the loops silently assume.
/// A 0x0 system is square with a vacuously non-zero diagonal, so it gets
/// its own rejection before it can reach the eigenvalue routine.
pub(crate) fn check_system(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    x0: &DVector<f64>,
) -> Result<(), LinearSolverError> {
    let (nrows, ncols) = a.shape();
    if nrows != ncols {
        return Err(LinearSolverError::NotSquare { nrows, ncols });
    }
    if nrows == 0 {
        return Err(LinearSolverError::EmptySystem);
    }
    if b.len() != nrows {
        return Err(LinearSolverError::DimensionMismatch {
            n: nrows,
            what: "the right-hand side",
            len: b.len(),
        });
    }
    if x0.len() != nrows {
        return Err(LinearSolverError::DimensionMismatch {
            n: nrows,
            what: "the initial guess",
            len: x0.len(),
        });
    }
    for row in 0..nrows {
        if a[(row, row)] == 0.0 {
            return Err(LinearSolverError::ZeroPivot { row });
        }
    }
    Ok(())
}

/// Rejects a diverging iterate before it can enter the trace.
pub(crate) fn check_finite(
    x: &DVector<f64>,
    iteration: usize,
) -> Result<(), LinearSolverError> {
    if x.iter().any(|v| !v.is_finite()) {
        return Err(LinearSolverError::NonFiniteIterate { iteration });
    }
    Ok(())
}
