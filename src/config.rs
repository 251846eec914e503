//! Shared solver configuration.
//!
//! Provides [`SolverConfig`], immutable per call, selecting the tolerance,
//! the iteration budget, and which error formula governs termination.
//!
//! Setters validate eagerly and return `Result`, so a constructed config
//! only ever carries usable values.

use crate::convergence::ErrorType;
use thiserror::Error;

pub const DEFAULT_TOLERANCE: f64 = 1e-7;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iterations: must be >= 1. got {got}")]
    InvalidMaxIterations { got: usize },
}

/// Termination parameters shared by every method.
///
/// - `tolerance`      : maximum acceptable error for convergence
/// - `max_iterations` : hard iteration budget
/// - `error_type`     : [`ErrorType::Absolute`] or [`ErrorType::Relative`]
#[derive(Debug, Copy, Clone)]
pub struct SolverConfig {
    tolerance: f64,
    max_iterations: usize,
    error_type: ErrorType,
}

impl SolverConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tolerance(mut self, v: f64) -> Result<Self, ConfigError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ConfigError::InvalidTolerance { got: v });
        }
        self.tolerance = v;
        Ok(self)
    }

    pub fn set_max_iterations(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidMaxIterations { got: v });
        }
        self.max_iterations = v;
        Ok(self)
    }

    #[must_use]
    pub fn set_error_type(mut self, v: ErrorType) -> Self {
        self.error_type = v;
        self
    }

    // getters
    #[inline] #[must_use] pub fn tolerance(&self)      -> f64 { self.tolerance }
    #[inline] #[must_use] pub fn max_iterations(&self) -> usize { self.max_iterations }
    #[inline] #[must_use] pub fn error_type(&self)     -> ErrorType { self.error_type }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            error_type: ErrorType::Absolute,
        }
    }
}
