//! Persisted form of values.
//!
//! Each value is an externally tagged variant of `Value`; a nested interval
//! uses the same `begin`/`end`/`excl` layout as a top-level one. Objects and
//! self-referential lists have no persisted form and fail to serialize.

use std::cell::RefCell;
use std::sync::Arc;

use ordo_interval::Interval;
use rustc_hash::FxHashSet;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::Value;

/// A value together with the lists currently being written.
struct Tracked<'a> {
    value: &'a Value,
    open_lists: &'a RefCell<FxHashSet<usize>>,
}

impl Tracked<'_> {
    fn nested<'b>(&'b self, value: &'b Value) -> Tracked<'b> {
        Tracked {
            value,
            open_lists: self.open_lists,
        }
    }
}

#[derive(Serialize)]
#[serde(rename = "Interval")]
struct IntervalRef<'a> {
    begin: Tracked<'a>,
    end: Tracked<'a>,
    excl: bool,
}

impl Serialize for Tracked<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value {
            Value::Nil => serializer.serialize_unit_variant("Value", 0, "Nil"),
            Value::Bool(b) => serializer.serialize_newtype_variant("Value", 1, "Bool", b),
            Value::Int(n) => serializer.serialize_newtype_variant("Value", 2, "Int", n),
            Value::Float(f) => serializer.serialize_newtype_variant("Value", 3, "Float", f),
            Value::Str(s) => serializer.serialize_newtype_variant("Value", 4, "Str", &**s),
            Value::Symbol(s) => serializer.serialize_newtype_variant("Value", 5, "Symbol", &**s),
            Value::List(items) => {
                let key = Arc::as_ptr(items).cast::<()>() as usize;
                if !self.open_lists.borrow_mut().insert(key) {
                    return Err(S::Error::custom("cannot persist a self-referential list"));
                }
                let items = items.read_recursive();
                let elements: Vec<Tracked<'_>> =
                    items.iter().map(|item| self.nested(item)).collect();
                let result = serializer.serialize_newtype_variant("Value", 6, "List", &elements);
                self.open_lists.borrow_mut().remove(&key);
                result
            }
            Value::Range(interval) => {
                let persisted = IntervalRef {
                    begin: self.nested(interval.lower()),
                    end: self.nested(interval.upper()),
                    excl: interval.is_exclusive(),
                };
                serializer.serialize_newtype_variant("Value", 7, "Range", &persisted)
            }
            Value::Object(object) => Err(S::Error::custom(format!(
                "cannot persist {} objects",
                object.type_name()
            ))),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let open_lists = RefCell::default();
        Tracked {
            value: self,
            open_lists: &open_lists,
        }
        .serialize(serializer)
    }
}

/// Owned mirror of the persisted variants.
#[derive(Deserialize)]
#[serde(rename = "Value")]
enum Persisted {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Symbol(String),
    List(Vec<Value>),
    Range(Interval<Value>),
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Persisted::deserialize(deserializer)? {
            Persisted::Nil => Value::nil(),
            Persisted::Bool(b) => Value::bool(b),
            Persisted::Int(n) => Value::int(n),
            Persisted::Float(f) => Value::float(f),
            Persisted::Str(s) => Value::string(s),
            Persisted::Symbol(s) => Value::symbol(s),
            Persisted::List(items) => Value::list(items),
            Persisted::Range(interval) => Value::Range(Arc::new(interval)),
        })
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
