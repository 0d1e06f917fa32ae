//! Ordo Value - a dynamic value domain for ordo intervals.
//!
//! This crate provides:
//! - `Value`: nil, booleans, integers, floats, strings, symbols, shared
//!   lists, nested intervals and user objects
//! - The `Bound` implementation that lets any `Value` pair form an
//!   `Interval<Value>`, routing to the integer, floating, lexical or
//!   successor strategies
//! - `Object`: the capability trait for user-defined bounds
//! - Literal syntax (`Value::parse_literal`, `parse_interval`)
//! - Persistence through serde (feature `persist`)
//!
//! Lists are shared and mutable, so a list can contain an interval whose
//! bound is the list itself. Comparison, equality, hashing and inspection
//! all terminate on such values.

mod bound;
mod literal;
mod object;
#[cfg(feature = "persist")]
mod persist;
mod value;

pub use literal::{parse_interval, LiteralError};
pub use object::Object;
pub use value::{Shared, Value};

// Re-export the interval surface so callers need a single dependency
pub use ordo_interval::{
    Domain, Interval, IntervalError, IntervalErrorKind, IntervalResult, OffsetPolicy, Span, Stride,
};
