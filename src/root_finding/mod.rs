// common helpers
pub mod algorithms;
pub mod errors;
pub mod report;
pub(crate) mod eval;

// methods
pub mod bisection;
pub mod false_position;
pub mod fixed_point;
pub mod multiple_roots;
pub mod newton;
