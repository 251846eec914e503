//! Linear-solver method definitions.
//!
//! The closed [`Method`] enum enumerates the stationary iterative
//! solvers. All three iterate on the `A = D + L + U` decomposition
//! (diagonal plus strict triangular parts) and differ only in how the
//! next iterate is assembled.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Method {
    Jacobi,
    GaussSeidel,
    Sor,
}

impl Method {
    pub const fn method_name(self) -> &'static str {
        match self {
            Method::Jacobi      => "jacobi",
            Method::GaussSeidel => "gauss_seidel",
            Method::Sor         => "sor",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method_name())
    }
}
