//! Iteration trace shared by all solver families.
//!
//! Every method appends one [`IterationRecord`] per step to an
//! [`IterationTrace`], starting with the initial state at index 0.
//! The trace is the audit trail of convergence: insertion order is
//! significant and records are immutable once appended.

/// Sentinel error value for the index-0 record, before any error
/// has been measured.
pub const INITIAL_ERROR: f64 = 100.0;

/// One step of an iterative solve.
///
/// - `index`         : step number; 0 is the initial state
/// - `approximation` : the iterate (`f64` for scalars, `Vec<f64>` for systems)
/// - `f_value`       : function value at the iterate; `None` for linear solvers
/// - `error`         : measured error vs. the previous iterate
///                     ([`INITIAL_ERROR`] at index 0)
#[derive(Debug, Clone, PartialEq)]
pub struct IterationRecord<X> {
    pub index: usize,
    pub approximation: X,
    pub f_value: Option<f64>,
    pub error: f64,
}

/// Append-only ordered log of [`IterationRecord`]s.
///
/// Owned exclusively by the run that produced it; length is bounded by
/// `max_iterations + 1` since every run appends exactly one record per
/// iteration plus the index-0 record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IterationTrace<X> {
    records: Vec<IterationRecord<X>>,
}

impl<X> IterationTrace<X> {
    #[must_use]
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    /// Append the next record. Indices are assigned in order starting at 0.
    pub(crate) fn append(&mut self, approximation: X, f_value: Option<f64>, error: f64) {
        let index = self.records.len();
        self.records.push(IterationRecord { index, approximation, f_value, error });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&IterationRecord<X>> {
        self.records.last()
    }

    #[must_use]
    pub fn records(&self) -> &[IterationRecord<X>] {
        &self.records
    }
}

impl<X> std::ops::Index<usize> for IterationTrace<X> {
    type Output = IterationRecord<X>;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.records[idx]
    }
}
