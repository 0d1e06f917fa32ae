//! Error types for interval construction, traversal and queries.
//!
//! `IntervalErrorKind` carries the structured category; factory functions
//! (e.g. `not_iterable()`) are the public way to build errors and fill in
//! both `kind` and `message`.

use std::fmt;

/// Result of an interval operation.
pub type IntervalResult<T> = Result<T, IntervalError>;

/// Typed error category.
///
/// Every failure is a contract violation by the caller or by the bound type,
/// so none of these are retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IntervalErrorKind {
    /// The bounds are not mutually comparable.
    InvalidBounds { lower: String, upper: String },
    /// Stride is zero, negative, NaN or unusable for the domain.
    InvalidStep { reason: String },
    /// The domain has neither a fast path nor a successor.
    NotIterable { type_name: String },
    /// Exclusive maximum requested on a domain without a predecessor.
    UndefinedPredecessor { reason: String },
    /// Offset conversion fell outside the sequence length.
    OutOfRange {
        lower: i64,
        upper: i64,
        exclusive: bool,
    },
}

impl fmt::Display for IntervalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds { lower, upper } => {
                write!(f, "bad value for range: {lower} and {upper} are not comparable")
            }
            Self::InvalidStep { reason } | Self::UndefinedPredecessor { reason } => {
                write!(f, "{reason}")
            }
            Self::NotIterable { type_name } => write!(f, "can't iterate from {type_name}"),
            Self::OutOfRange {
                lower,
                upper,
                exclusive,
            } => {
                let dots = if *exclusive { "..." } else { ".." };
                write!(f, "{lower}{dots}{upper} out of range")
            }
        }
    }
}

/// Interval error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntervalError {
    /// Structured error category.
    pub kind: IntervalErrorKind,
    /// Human-readable message, equal to `kind.to_string()`.
    pub message: String,
}

impl IntervalError {
    fn from_kind(kind: IntervalErrorKind) -> Self {
        let message = kind.to_string();
        IntervalError { kind, message }
    }

    /// Get the structured category.
    pub fn kind(&self) -> &IntervalErrorKind {
        &self.kind
    }
}

impl fmt::Display for IntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for IntervalError {}

// Construction Errors

/// Bounds that fail the comparability probe.
#[cold]
pub fn invalid_bounds(lower: &str, upper: &str) -> IntervalError {
    IntervalError::from_kind(IntervalErrorKind::InvalidBounds {
        lower: lower.to_string(),
        upper: upper.to_string(),
    })
}

// Stepping Errors

/// Negative stride.
#[cold]
pub fn negative_step() -> IntervalError {
    IntervalError::from_kind(IntervalErrorKind::InvalidStep {
        reason: "step can't be negative".to_string(),
    })
}

/// Zero (or NaN) stride.
#[cold]
pub fn zero_step() -> IntervalError {
    IntervalError::from_kind(IntervalErrorKind::InvalidStep {
        reason: "step can't be 0".to_string(),
    })
}

/// Stride the domain cannot apply, e.g. `0.5` over strings.
#[cold]
pub fn unusable_step(step: &str, domain: &str) -> IntervalError {
    IntervalError::from_kind(IntervalErrorKind::InvalidStep {
        reason: format!("step {step} can't be applied to {domain} bounds"),
    })
}

// Traversal Errors

/// Iteration requested on a domain with no successor.
#[cold]
pub fn not_iterable(type_name: &str) -> IntervalError {
    IntervalError::from_kind(IntervalErrorKind::NotIterable {
        type_name: type_name.to_string(),
    })
}

// Query Errors

/// Exclusive end that is not an integer.
#[cold]
pub fn non_integer_end() -> IntervalError {
    IntervalError::from_kind(IntervalErrorKind::UndefinedPredecessor {
        reason: "cannot exclude non Integer end value".to_string(),
    })
}

/// Exclusive integer end with a non-integer beginning.
#[cold]
pub fn non_integer_begin() -> IntervalError {
    IntervalError::from_kind(IntervalErrorKind::UndefinedPredecessor {
        reason: "cannot exclude end value with non Integer begin value".to_string(),
    })
}

/// Offset conversion outside the sequence.
#[cold]
pub fn out_of_range(lower: i64, upper: i64, exclusive: bool) -> IntervalError {
    IntervalError::from_kind(IntervalErrorKind::OutOfRange {
        lower,
        upper,
        exclusive,
    })
}
