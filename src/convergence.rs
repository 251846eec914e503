//! Convergence and error measurement.
//!
//! Computes the error between successive iterates in scalar and vector
//! form. Which formula governs termination is selected per run via
//! [`ErrorType`] in the solver configuration.
//!
//! - [`scalar`] : `|c - p|`, or `|c - p| / |p|` for relative error
//! - [`vector`] : `‖c - p‖∞`, or `‖c - p‖∞ / ‖c‖∞` for relative error
//!
//! Relative error divides by the *previous* scalar iterate but by the
//! *new* vector iterate's norm; the vector normalization is applied
//! identically across all linear solvers. Zero denominators are rejected
//! with a typed error rather than propagating an infinity or NaN.

use nalgebra::DVector;
use thiserror::Error;

/// Which error formula governs termination for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    Absolute,
    Relative,
}

impl ErrorType {
    pub const fn name(self) -> &'static str {
        match self {
            ErrorType::Absolute => "absolute",
            ErrorType::Relative => "relative",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error-measurement failures.
#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("division by zero measuring relative error: denominator iterate is zero")]
    ZeroDenominator,
}

/// Error between successive scalar iterates.
///
/// # Errors
/// [`MeasureError::ZeroDenominator`] for relative error with `previous == 0`.
pub fn scalar(current: f64, previous: f64, error_type: ErrorType) -> Result<f64, MeasureError> {
    match error_type {
        ErrorType::Absolute => Ok((current - previous).abs()),
        ErrorType::Relative => {
            if previous == 0.0 {
                return Err(MeasureError::ZeroDenominator);
            }
            Ok((current - previous).abs() / previous.abs())
        }
    }
}

/// Error between successive vector iterates, in the infinity norm.
///
/// # Errors
/// [`MeasureError::ZeroDenominator`] for relative error when the new
/// iterate has zero norm.
pub fn vector(
    current: &DVector<f64>,
    previous: &DVector<f64>,
    error_type: ErrorType,
) -> Result<f64, MeasureError> {
    let diff_norm = (current - previous).amax();
    match error_type {
        ErrorType::Absolute => Ok(diff_norm),
        ErrorType::Relative => {
            let scale = current.amax();
            if scale == 0.0 {
                return Err(MeasureError::ZeroDenominator);
            }
            Ok(diff_norm / scale)
        }
    }
}
