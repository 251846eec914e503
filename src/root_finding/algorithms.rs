//! Root-finding method definitions.
//!
//! Provides the closed [`Method`] enum enumerating all supported methods,
//! split into bracketing and open families. Method selection is exhaustive
//! matching over these variants; there is no string dispatch.

/// Root-finding method variants.
/// - [`Method::Bracket`] methods maintain a sign-change interval and are
///   guaranteed to converge given a valid bracket, but slowly.
/// - [`Method::Open`] methods iterate from a single starting point and
///   converge quickly near a root, but may hit a zero derivative or
///   diverge; the degeneracy guards are mandatory.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Method {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BracketFamily {
    Bisection,
    FalsePosition,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OpenFamily {
    FixedPoint,
    NewtonRaphson,
    MultipleRoots,
}

impl Method {
    pub const fn method_name(self) -> &'static str {
        match self {
            Method::Bracket(BracketFamily::Bisection)     => "bisection",
            Method::Bracket(BracketFamily::FalsePosition) => "false_position",
            Method::Open(OpenFamily::FixedPoint)          => "fixed_point",
            Method::Open(OpenFamily::NewtonRaphson)       => "newton_raphson",
            Method::Open(OpenFamily::MultipleRoots)       => "multiple_roots",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method_name())
    }
}
