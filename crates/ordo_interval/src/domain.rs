//! Fast-path classification of a bound pair.
//!
//! Resolved once at construction; every traversal and query dispatches on
//! the stored tag instead of re-inspecting the bounds.

use std::fmt;

use crate::bound::{Bound, Scalar};

/// Strategy family selected for an interval.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Both bounds are machine integers.
    Integer,
    /// Numeric bounds with at least one floating magnitude.
    Floating,
    /// Both bounds are symbols.
    Symbolic,
    /// Both bounds are text.
    Lexical,
    /// Numbers without a machine-integer view (e.g. `u128::MAX`).
    Numeric,
    /// Anything else; iteration needs the successor protocol.
    Discrete,
}

impl Domain {
    /// Classify a bound pair.
    pub fn resolve<V: Bound>(lower: &V, upper: &V) -> Self {
        match (lower.scalar(), upper.scalar()) {
            (Some(Scalar::Int(_)), Some(Scalar::Int(_))) => Domain::Integer,
            (Some(Scalar::Symbol(_)), Some(Scalar::Symbol(_))) => Domain::Symbolic,
            (Some(Scalar::Int(_) | Scalar::Float(_)), Some(Scalar::Int(_) | Scalar::Float(_))) => {
                Domain::Floating
            }
            (Some(Scalar::Text(_)), Some(Scalar::Text(_))) => Domain::Lexical,
            _ if lower.is_numeric() || upper.is_numeric() => Domain::Numeric,
            _ => Domain::Discrete,
        }
    }

    /// Whether membership reduces to coverage.
    pub fn is_numeric(self) -> bool {
        matches!(self, Domain::Integer | Domain::Floating | Domain::Numeric)
    }

    /// Lowercase name used in logs and error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Integer => "integer",
            Domain::Floating => "floating",
            Domain::Symbolic => "symbolic",
            Domain::Lexical => "lexical",
            Domain::Numeric => "numeric",
            Domain::Discrete => "discrete",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
