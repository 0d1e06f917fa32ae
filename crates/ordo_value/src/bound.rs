//! `Bound` implementation for [`Value`].
//!
//! # Equality
//!
//! `==` is loose across numbers (`1 == 1.0`); `eql` is strict and requires
//! the same variant. Lists compare element-wise and intervals compare their
//! triples, both under the recursion guard so cyclic structures terminate.
//!
//! # Hashing
//!
//! Integral floats hash as the integer they equal, which keeps hashing
//! consistent with loose equality.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use ordo_interval::{lexical, Bound, RecursionGuard, Scalar, Stride};
use parking_lot::RwLock;
use rustc_hash::FxHasher;

use crate::value::Value;

impl Bound for Value {
    fn type_name(&self) -> &str {
        Value::type_name(self)
    }

    fn compare(&self, other: &Self) -> Option<Ordering> {
        compare_guarded(self, other, &mut RecursionGuard::new())
    }

    fn is_discrete(&self) -> bool {
        match self {
            Value::Int(_) | Value::Str(_) | Value::Symbol(_) => true,
            Value::Object(object) => object.is_discrete(),
            _ => false,
        }
    }

    fn successor(&self) -> Option<Self> {
        match self {
            Value::Int(n) => n.checked_add(1).map(Value::Int),
            Value::Str(s) => Some(Value::string(lexical::succ(s))),
            Value::Symbol(s) => Some(Value::symbol(lexical::succ(s))),
            Value::Object(object) => object.successor().map(Value::Object),
            _ => None,
        }
    }

    fn predecessor(&self) -> Option<Self> {
        match self {
            Value::Int(n) => n.checked_sub(1).map(Value::Int),
            _ => None,
        }
    }

    fn scalar(&self) -> Option<Scalar<'_>> {
        match self {
            Value::Int(n) => Some(Scalar::Int(*n)),
            Value::Float(f) => Some(Scalar::Float(*f)),
            Value::Str(s) => Some(Scalar::Text(s)),
            Value::Symbol(s) => Some(Scalar::Symbol(s)),
            _ => None,
        }
    }

    fn from_scalar(scalar: Scalar<'_>) -> Option<Self> {
        Some(match scalar {
            Scalar::Int(n) => Value::Int(n),
            Scalar::Float(f) => Value::Float(f),
            Scalar::Text(s) => Value::string(s),
            Scalar::Symbol(s) => Value::symbol(s),
        })
    }

    fn is_numeric(&self) -> bool {
        match self {
            Value::Int(_) | Value::Float(_) => true,
            Value::Object(object) => object.is_numeric(),
            _ => false,
        }
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "float offsets follow float arithmetic"
    )]
    fn offset(&self, stride: Stride, count: u64) -> Option<Self> {
        match (self, stride) {
            (Value::Int(n), Stride::Int(step)) => {
                let count = i64::try_from(count).ok()?;
                n.checked_add(step.checked_mul(count)?).map(Value::Int)
            }
            (Value::Int(n), Stride::Float(step)) => {
                Some(Value::Float(*n as f64 + count as f64 * step))
            }
            (Value::Float(f), _) => {
                let step = match stride {
                    Stride::Int(step) => step as f64,
                    Stride::Float(step) => step,
                };
                Some(Value::Float(f + count as f64 * step))
            }
            (Value::Object(object), _) => object.offset(stride, count).map(Value::Object),
            _ => None,
        }
    }

    fn eq_guarded(&self, other: &Self, guard: &mut RecursionGuard) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                compare_int_float(*a, *b) == Some(Ordering::Equal)
            }
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::List(a), Value::List(b)) => lists_equal(a, b, guard, Value::eq_guarded),
            (Value::Range(a), Value::Range(b)) => a.eq_with(b, guard),
            (Value::Object(a), Value::Object(b)) => a.compare(b.as_ref()) == Some(Ordering::Equal),
            _ => same_scalar(self, other),
        }
    }

    fn eql_guarded(&self, other: &Self, guard: &mut RecursionGuard) -> bool {
        match (self, other) {
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::List(a), Value::List(b)) => lists_equal(a, b, guard, Value::eql_guarded),
            (Value::Range(a), Value::Range(b)) => a.eql_with(b, guard),
            (Value::Object(a), Value::Object(b)) => a.compare(b.as_ref()) == Some(Ordering::Equal),
            _ => same_scalar(self, other),
        }
    }

    fn hash_guarded(&self, guard: &mut RecursionGuard) -> u64 {
        let mut hasher = FxHasher::default();
        match self {
            Value::Nil => 0_u8.hash(&mut hasher),
            Value::Bool(b) => (1_u8, b).hash(&mut hasher),
            Value::Int(n) => (2_u8, n).hash(&mut hasher),
            Value::Float(f) => match integral(*f) {
                Some(n) => (2_u8, n).hash(&mut hasher),
                None => (3_u8, f.to_bits()).hash(&mut hasher),
            },
            Value::Str(s) => (4_u8, s.as_bytes()).hash(&mut hasher),
            Value::Symbol(s) => (5_u8, s.as_bytes()).hash(&mut hasher),
            Value::List(items) => {
                6_u8.hash(&mut hasher);
                // A list nested in itself contributes only its tag.
                guard.single(&**items, |guard| {
                    let items = items.read_recursive();
                    items.len().hash(&mut hasher);
                    for item in items.iter() {
                        item.hash_guarded(guard).hash(&mut hasher);
                    }
                });
            }
            Value::Range(interval) => (7_u8, interval.hash_with(guard)).hash(&mut hasher),
            Value::Object(object) => (8_u8, object.hash_code()).hash(&mut hasher),
        }
        hasher.finish()
    }

    fn inspect_guarded(&self, guard: &mut RecursionGuard) -> String {
        match self {
            Value::Nil => "nil".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => format!("{f:?}"),
            Value::Str(s) => format!("{:?}", &**s),
            Value::Symbol(s) => format!(":{s}"),
            Value::List(items) => guard
                .single(&**items, |guard| {
                    let rendered: Vec<String> = items
                        .read_recursive()
                        .iter()
                        .map(|item| item.inspect_guarded(guard))
                        .collect();
                    format!("[{}]", rendered.join(", "))
                })
                .unwrap_or_else(|| "[...]".to_string()),
            Value::Range(interval) => interval.inspect_with(guard),
            Value::Object(object) => object.display(),
        }
    }
}

/// Three-way comparison under an existing guard.
pub(crate) fn compare_guarded(a: &Value, b: &Value, guard: &mut RecursionGuard) -> Option<Ordering> {
    match (a, b) {
        (Value::Nil, Value::Nil) => Some(Ordering::Equal),
        (Value::Bool(x), Value::Bool(y)) => (x == y).then_some(Ordering::Equal),
        (Value::Int(x), Value::Int(y)) => Some(x.cmp(y)),
        (Value::Int(x), Value::Float(y)) => compare_int_float(*x, *y),
        (Value::Float(x), Value::Int(y)) => compare_int_float(*y, *x).map(Ordering::reverse),
        (Value::Float(x), Value::Float(y)) => x.partial_cmp(y),
        (Value::Str(x), Value::Str(y)) | (Value::Symbol(x), Value::Symbol(y)) => {
            Some(x.as_bytes().cmp(y.as_bytes()))
        }
        (Value::List(x), Value::List(y)) => compare_lists(x, y, guard),
        (Value::Range(x), Value::Range(y)) => x.eq_with(y, guard).then_some(Ordering::Equal),
        (Value::Object(x), Value::Object(y)) => x.compare(y.as_ref()),
        _ => None,
    }
}

/// Lexicographic list order. A pair already being compared further up is
/// treated as equal, leaving the decision to the lengths.
fn compare_lists(
    a: &Arc<RwLock<Vec<Value>>>,
    b: &Arc<RwLock<Vec<Value>>>,
    guard: &mut RecursionGuard,
) -> Option<Ordering> {
    if Arc::ptr_eq(a, b) {
        return Some(Ordering::Equal);
    }
    let (left, right) = (a.read_recursive(), b.read_recursive());
    let common = guard.paired(&**a, &**b, |guard| {
        for (x, y) in left.iter().zip(right.iter()) {
            match compare_guarded(x, y, guard)? {
                Ordering::Equal => {}
                decided => return Some(decided),
            }
        }
        Some(Ordering::Equal)
    });
    match common.unwrap_or(Some(Ordering::Equal))? {
        Ordering::Equal => Some(left.len().cmp(&right.len())),
        decided => Some(decided),
    }
}

fn lists_equal(
    a: &Arc<RwLock<Vec<Value>>>,
    b: &Arc<RwLock<Vec<Value>>>,
    guard: &mut RecursionGuard,
    same: fn(&Value, &Value, &mut RecursionGuard) -> bool,
) -> bool {
    if Arc::ptr_eq(a, b) {
        return true;
    }
    let (left, right) = (a.read_recursive(), b.read_recursive());
    if left.len() != right.len() {
        return false;
    }
    guard
        .paired(&**a, &**b, |guard| {
            left.iter().zip(right.iter()).all(|(x, y)| same(x, y, guard))
        })
        .unwrap_or(true)
}

fn same_scalar(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Nil, Value::Nil) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::Str(x), Value::Str(y)) | (Value::Symbol(x), Value::Symbol(y)) => x == y,
        _ => false,
    }
}

/// Exact comparison of an integer with a float.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "the truncated float is range-checked first"
)]
fn compare_int_float(n: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    // 2^63 is exactly representable; everything at or beyond it is outside i64.
    if f >= 9_223_372_036_854_775_808.0 {
        return Some(Ordering::Less);
    }
    if f < i64::MIN as f64 {
        return Some(Ordering::Greater);
    }
    let whole = f.trunc();
    match n.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(f - whole)),
        decided => Some(decided),
    }
}

/// The integer an integral float equals, if it fits.
#[expect(
    clippy::cast_possible_truncation,
    reason = "only integral, in-range floats are converted"
)]
fn integral(f: f64) -> Option<i64> {
    (f.fract() == 0.0 && (-9_223_372_036_854_775_808.0..9_223_372_036_854_775_808.0).contains(&f))
        .then(|| f as i64)
}
