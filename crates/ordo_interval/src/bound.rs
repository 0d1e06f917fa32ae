//! The protocols a type must satisfy to serve as an interval bound.
//!
//! # Ordering Protocol
//!
//! [`Bound::compare`] is the only required capability: a three-way
//! comparison that may report "incomparable" with `None`. Consistency
//! (antisymmetry, transitivity) is a contract on the implementor.
//!
//! # Successor Protocol
//!
//! Discrete domains advertise [`Bound::is_discrete`] and implement
//! [`Bound::successor`]. Domains without it can still answer coverage
//! queries but cannot be iterated.
//!
//! # Fast Paths
//!
//! [`Bound::scalar`] exposes a borrowed view that the integer, floating and
//! lexical strategies operate on directly; [`Bound::from_scalar`] turns
//! elements produced by those strategies back into bound values.
//!
//! # Structural Hooks
//!
//! Equality, hashing and inspection take a [`RecursionGuard`] so that bound
//! values which contain their own interval terminate.

use std::cmp::Ordering;
use std::hash::BuildHasher;

use rustc_hash::FxBuildHasher;

use crate::guard::RecursionGuard;
use crate::lexical;
use crate::step::Stride;

/// Borrowed view of a bound understood by one of the fast paths.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Scalar<'a> {
    /// Machine integer (integer fast path).
    Int(i64),
    /// Floating magnitude (floating stepping path).
    Float(f64),
    /// Lexical token (lexical `upto` path).
    Text(&'a str),
    /// Symbolic token; iterated like text, produced as symbols.
    Symbol(&'a str),
}

/// A value usable as the lower or upper end of an [`Interval`](crate::Interval).
pub trait Bound: Clone {
    /// Type name for error messages.
    fn type_name(&self) -> &str;

    /// Three-way comparison. `None` means the values are incomparable.
    fn compare(&self, other: &Self) -> Option<Ordering>;

    /// Whether this value supports [`Bound::successor`].
    fn is_discrete(&self) -> bool {
        false
    }

    /// The next element strictly greater than `self`.
    ///
    /// `None` ends the sequence (e.g. at the top of a bounded type).
    fn successor(&self) -> Option<Self> {
        None
    }

    /// The next element strictly less than `self`.
    ///
    /// Only integers have one; it gives the largest element below an
    /// exclusive upper bound.
    fn predecessor(&self) -> Option<Self> {
        None
    }

    /// Fast-path view of this value, if any.
    fn scalar(&self) -> Option<Scalar<'_>> {
        None
    }

    /// Rebuild a value from an element produced by a fast path.
    fn from_scalar(scalar: Scalar<'_>) -> Option<Self> {
        let _ = scalar;
        None
    }

    /// Whether this value is a number (selects the numeric stepping path).
    fn is_numeric(&self) -> bool {
        matches!(self.scalar(), Some(Scalar::Int(_) | Scalar::Float(_)))
    }

    /// Whether this value is an integer of any width.
    fn is_integer(&self) -> bool {
        matches!(self.scalar(), Some(Scalar::Int(_)))
    }

    /// `self + count * stride`, or `None` if not representable.
    fn offset(&self, stride: Stride, count: u64) -> Option<Self> {
        let _ = (stride, count);
        None
    }

    /// Domain equality (`==`).
    fn eq_guarded(&self, other: &Self, guard: &mut RecursionGuard) -> bool;

    /// Strict equality, used by hash-keyed collections.
    fn eql_guarded(&self, other: &Self, guard: &mut RecursionGuard) -> bool {
        self.eq_guarded(other, guard)
    }

    /// Hash consistent with [`Bound::eq_guarded`].
    fn hash_guarded(&self, guard: &mut RecursionGuard) -> u64;

    /// Programmer-facing rendering.
    fn inspect_guarded(&self, guard: &mut RecursionGuard) -> String;
}

// Integer Bounds

macro_rules! impl_integer_bound {
    ($($t:ty),* $(,)?) => {$(
        impl Bound for $t {
            fn type_name(&self) -> &str {
                stringify!($t)
            }

            fn compare(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }

            fn is_discrete(&self) -> bool {
                true
            }

            fn successor(&self) -> Option<Self> {
                self.checked_add(1)
            }

            fn predecessor(&self) -> Option<Self> {
                self.checked_sub(1)
            }

            // Values outside `i64` fall back to the generic numeric path.
            fn scalar(&self) -> Option<Scalar<'_>> {
                i64::try_from(*self).ok().map(Scalar::Int)
            }

            fn from_scalar(scalar: Scalar<'_>) -> Option<Self> {
                match scalar {
                    Scalar::Int(n) => Self::try_from(n).ok(),
                    _ => None,
                }
            }

            fn is_numeric(&self) -> bool {
                true
            }

            fn is_integer(&self) -> bool {
                true
            }

            fn offset(&self, stride: Stride, count: u64) -> Option<Self> {
                let Stride::Int(step) = stride else {
                    return None;
                };
                let step = Self::try_from(step).ok()?;
                let count = Self::try_from(count).ok()?;
                self.checked_add(step.checked_mul(count)?)
            }

            fn eq_guarded(&self, other: &Self, _guard: &mut RecursionGuard) -> bool {
                self == other
            }

            fn hash_guarded(&self, _guard: &mut RecursionGuard) -> u64 {
                FxBuildHasher.hash_one(self)
            }

            fn inspect_guarded(&self, _guard: &mut RecursionGuard) -> String {
                self.to_string()
            }
        }
    )*};
}

impl_integer_bound!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Floating Bounds

impl Bound for f64 {
    fn type_name(&self) -> &str {
        "f64"
    }

    fn compare(&self, other: &Self) -> Option<Ordering> {
        self.partial_cmp(other)
    }

    fn scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Float(*self))
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "integer elements of a float range are materialised as floats"
    )]
    fn from_scalar(scalar: Scalar<'_>) -> Option<Self> {
        match scalar {
            Scalar::Float(f) => Some(f),
            Scalar::Int(n) => Some(n as f64),
            _ => None,
        }
    }

    fn eq_guarded(&self, other: &Self, _guard: &mut RecursionGuard) -> bool {
        self == other
    }

    fn hash_guarded(&self, _guard: &mut RecursionGuard) -> u64 {
        // -0.0 == 0.0, so both must hash alike.
        let normalized = if *self == 0.0 { 0.0_f64 } else { *self };
        FxBuildHasher.hash_one(normalized.to_bits())
    }

    fn inspect_guarded(&self, _guard: &mut RecursionGuard) -> String {
        format!("{self:?}")
    }
}

impl Bound for f32 {
    fn type_name(&self) -> &str {
        "f32"
    }

    fn compare(&self, other: &Self) -> Option<Ordering> {
        self.partial_cmp(other)
    }

    fn scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Float(f64::from(*self)))
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        reason = "elements of an f32 range are narrowed back to f32"
    )]
    fn from_scalar(scalar: Scalar<'_>) -> Option<Self> {
        match scalar {
            Scalar::Float(f) => Some(f as f32),
            Scalar::Int(n) => Some(n as f32),
            _ => None,
        }
    }

    fn eq_guarded(&self, other: &Self, _guard: &mut RecursionGuard) -> bool {
        self == other
    }

    fn hash_guarded(&self, _guard: &mut RecursionGuard) -> u64 {
        let normalized = if *self == 0.0 { 0.0_f32 } else { *self };
        FxBuildHasher.hash_one(normalized.to_bits())
    }

    fn inspect_guarded(&self, _guard: &mut RecursionGuard) -> String {
        format!("{self:?}")
    }
}

// Lexical Bounds

impl Bound for String {
    fn type_name(&self) -> &str {
        "String"
    }

    fn compare(&self, other: &Self) -> Option<Ordering> {
        Some(self.as_bytes().cmp(other.as_bytes()))
    }

    fn is_discrete(&self) -> bool {
        true
    }

    fn successor(&self) -> Option<Self> {
        Some(lexical::succ(self))
    }

    fn scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Text(self))
    }

    fn from_scalar(scalar: Scalar<'_>) -> Option<Self> {
        match scalar {
            Scalar::Text(s) => Some(s.to_owned()),
            _ => None,
        }
    }

    fn eq_guarded(&self, other: &Self, _guard: &mut RecursionGuard) -> bool {
        self == other
    }

    fn hash_guarded(&self, _guard: &mut RecursionGuard) -> u64 {
        FxBuildHasher.hash_one(self)
    }

    fn inspect_guarded(&self, _guard: &mut RecursionGuard) -> String {
        format!("{self:?}")
    }
}

// Characters take the generic successor path.

impl Bound for char {
    fn type_name(&self) -> &str {
        "char"
    }

    fn compare(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }

    fn is_discrete(&self) -> bool {
        true
    }

    fn successor(&self) -> Option<Self> {
        match *self {
            '\u{D7FF}' => Some('\u{E000}'),
            c => char::from_u32(u32::from(c).checked_add(1)?),
        }
    }

    fn eq_guarded(&self, other: &Self, _guard: &mut RecursionGuard) -> bool {
        self == other
    }

    fn hash_guarded(&self, _guard: &mut RecursionGuard) -> u64 {
        FxBuildHasher.hash_one(self)
    }

    fn inspect_guarded(&self, _guard: &mut RecursionGuard) -> String {
        format!("{self:?}")
    }
}

#[cfg(test)]
mod tests;
