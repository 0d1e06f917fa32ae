//! Runtime values usable as interval bounds.
//!
//! # Sharing
//!
//! Strings and symbols are immutable `Arc<str>`. Lists are shared and
//! mutable (`Arc<RwLock<Vec<Value>>>`), which is what makes self-referential
//! structures possible: a list may hold an interval whose bound is the list
//! itself.
//!
//! # Construction
//!
//! Use the factory methods (`Value::int`, `Value::string`, `Value::range`,
//! ...) rather than building variants by hand.

use std::fmt;
use std::sync::Arc;

use ordo_interval::{Bound, Interval, IntervalResult, RecursionGuard};
use parking_lot::RwLock;

use crate::object::Object;

/// Shared, interior-mutable heap cell.
pub type Shared<T> = Arc<RwLock<T>>;

/// A dynamically typed value.
#[derive(Clone)]
pub enum Value {
    /// Absence of a value.
    Nil,
    Bool(bool),
    /// Machine integer (integer fast path).
    Int(i64),
    /// Floating magnitude.
    Float(f64),
    /// Text, iterated lexically.
    Str(Arc<str>),
    /// Interned-style name, iterated lexically and produced as symbols.
    Symbol(Arc<str>),
    /// Shared mutable list.
    List(Shared<Vec<Value>>),
    /// Nested interval.
    Range(Arc<Interval<Value>>),
    /// User-defined object.
    Object(Arc<dyn Object>),
}

impl Value {
    #[inline]
    pub fn nil() -> Self {
        Value::Nil
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Create a symbol value (`:name`).
    #[inline]
    pub fn symbol(name: impl Into<Arc<str>>) -> Self {
        Value::Symbol(name.into())
    }

    /// Create a list value.
    ///
    /// ```text
    /// let nums = Value::list(vec![Value::int(1), Value::int(2)]);
    /// ```
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Arc::new(RwLock::new(items)))
    }

    /// Create an interval value, validating the bounds.
    pub fn range(lower: Value, upper: Value, exclusive: bool) -> IntervalResult<Self> {
        Interval::new(lower, upper, exclusive).map(|interval| Value::Range(Arc::new(interval)))
    }

    /// Wrap a user-defined object.
    #[inline]
    pub fn object(object: impl Object + 'static) -> Self {
        Value::Object(Arc::new(object))
    }

    /// Append to a list. Returns `false` if `self` is not a list.
    ///
    /// Pushing a list (or an interval over it) into itself creates a cycle.
    pub fn push(&self, item: Value) -> bool {
        match self {
            Value::List(items) => {
                items.write().push(item);
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_range(&self) -> Option<&Interval<Value>> {
        match self {
            Value::Range(interval) => Some(interval),
            _ => None,
        }
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
            Value::Range(_) => "range",
            Value::Object(object) => object.type_name(),
        }
    }

    /// Programmer-facing rendering (strings quoted, symbols prefixed).
    pub fn inspect(&self) -> String {
        self.inspect_guarded(&mut RecursionGuard::new())
    }

    /// Hash consistent with `==` (so `1` and `1.0` hash alike).
    pub fn hash_code(&self) -> u64 {
        self.hash_guarded(&mut RecursionGuard::new())
    }

    /// Strict equality (`1` is not `eql` to `1.0`).
    pub fn eql(&self, other: &Value) -> bool {
        self.eql_guarded(other, &mut RecursionGuard::new())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.eq_guarded(other, &mut RecursionGuard::new())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(s) | Value::Symbol(s) => f.write_str(s),
            Value::List(_) => f.write_str(&self.inspect()),
            Value::Range(interval) => write!(f, "{interval}"),
            Value::Object(object) => f.write_str(&object.display()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
