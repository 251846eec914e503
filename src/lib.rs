//! `riffle` — classical iterative numerical methods behind one
//! report/outcome contract.
//!
//! Two solver families share a convergence framework, an append-only
//! iteration trace, and a uniform outcome envelope:
//!
//! - [`root_finding`] : bisection, false position, fixed point,
//!   Newton-Raphson, and modified Newton for multiple roots, over an
//!   external expression collaborator ([`expression::Evaluator`]).
//! - [`linear_systems`] : Jacobi, Gauss-Seidel, and SOR over dense
//!   `nalgebra` matrices, with spectral-radius convergence diagnostics.
//!
//! Every solve is a pure, synchronous computation over caller-supplied
//! inputs: all state is created per invocation and discarded once the
//! outcome is produced, so independent solves can run concurrently with
//! no coordination.
//!
//! ```
//! use riffle::config::SolverConfig;
//! use riffle::envelope::Outcome;
//! use riffle::expression::DerivativeTable;
//! use riffle::root_finding::bisection::bisection;
//!
//! let mut table = DerivativeTable::new();
//! let f = table.push(|x| x * x - 2.0);
//!
//! let cfg = SolverConfig::new().set_tolerance(1e-6).unwrap();
//! let outcome = Outcome::from_root_finding(bisection(&table, &f, 0.0, 2.0, cfg));
//! assert!(outcome.is_success());
//! ```

pub mod config;
pub mod convergence;
pub mod envelope;
pub mod expression;
pub mod linear_systems;
pub mod root_finding;
pub mod trace;
