// common helpers
pub mod algorithms;
pub mod diagnostics;
pub mod errors;
pub mod report;
pub(crate) mod decompose;

// methods
pub mod gauss_seidel;
pub mod jacobi;
pub mod sor;
