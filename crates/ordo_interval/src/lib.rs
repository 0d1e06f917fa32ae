//! Ordo Interval - immutable intervals over ordered domains.
//!
//! This crate provides:
//! - The bound protocols (`Bound`, `Scalar`) a type implements to be usable
//!   as an interval end
//! - `Interval<V>`: validated, immutable `(lower, upper, exclusive)` triples
//! - Traversal (`Iter`, `StepIter`) with integer, floating, lexical and
//!   successor strategies
//! - Membership, coverage and boundary queries
//! - Offset conversion of integer ranges against a sequence length
//! - Error types (`IntervalError`, `IntervalResult`)
//!
//! # Architecture
//!
//! Construction resolves the bound pair into a [`Domain`] once. Every later
//! operation dispatches on that tag, so the fast paths never re-inspect the
//! bounds.
//!
//! Structural operations (equality, hashing, inspection) thread an explicit
//! [`RecursionGuard`] through the bound hooks. Bound values that contain
//! their own interval therefore terminate instead of recursing forever.

mod bound;
mod domain;
mod errors;
mod guard;
mod interval;
mod iter;
pub mod lexical;
mod offset;
#[cfg(feature = "persist")]
mod persist;
mod query;
mod step;

#[cfg(test)]
mod laws;

pub use bound::{Bound, Scalar};
pub use domain::Domain;
pub use errors::{IntervalError, IntervalErrorKind, IntervalResult};
pub use guard::{ensure_sufficient_stack, RecursionGuard};
pub use interval::Interval;
pub use iter::Iter;
pub use offset::{offsets, OffsetPolicy, RangeLike, Span};
pub use query::{ByEnumeration, ByOrdering, Membership};
pub use step::{StepIter, Stride};

// Re-export error constructors for bound implementations in other crates
pub use errors::{
    invalid_bounds, negative_step, non_integer_begin, non_integer_end, not_iterable,
    out_of_range, unusable_step, zero_step,
};
