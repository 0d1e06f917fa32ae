//! Conversion of an integer range into a `(start, length)` span over a
//! sequence, with negative indices counting from the back.

use std::ops::{Range, RangeInclusive};

use crate::bound::{Bound, Scalar};
use crate::errors::{invalid_bounds, out_of_range, IntervalResult};
use crate::guard::RecursionGuard;
use crate::interval::Interval;

/// Anything that exposes interval bounds.
pub trait RangeLike<V> {
    /// `(lower, upper, exclusive)`
    fn bounds(&self) -> (&V, &V, bool);
}

impl<V: Bound> RangeLike<V> for Interval<V> {
    fn bounds(&self) -> (&V, &V, bool) {
        (self.lower(), self.upper(), self.is_exclusive())
    }
}

impl<V> RangeLike<V> for Range<V> {
    fn bounds(&self) -> (&V, &V, bool) {
        (&self.start, &self.end, true)
    }
}

impl<V> RangeLike<V> for RangeInclusive<V> {
    fn bounds(&self) -> (&V, &V, bool) {
        (self.start(), self.end(), false)
    }
}

/// What to do when the range falls outside the sequence.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OffsetPolicy {
    /// Return `None`; the end is clamped to the sequence length.
    #[default]
    Lenient,
    /// Fail; the end is not clamped.
    Strict,
    /// Fail; the end is clamped to the sequence length.
    Truncate,
}

/// A resolved slice of a sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

/// Resolve `range` against a sequence of `len` elements.
///
/// Under the clamping policies an inclusive end is clamped before it is
/// made exclusive, so the span can run one past the sequence; slicing
/// trims it.
pub fn offsets<V: Bound, R: RangeLike<V> + ?Sized>(
    range: &R,
    len: usize,
    policy: OffsetPolicy,
) -> IntervalResult<Option<Span>> {
    let (lower, upper, exclusive) = range.bounds();
    let (Some(b), Some(e)) = (index_of(lower.scalar()), index_of(upper.scalar())) else {
        let mut guard = RecursionGuard::new();
        return Err(invalid_bounds(
            &lower.inspect_guarded(&mut guard),
            &upper.inspect_guarded(&mut guard),
        ));
    };

    let outside = || {
        if policy == OffsetPolicy::Lenient {
            Ok(None)
        } else {
            Err(out_of_range(b, e, exclusive))
        }
    };

    let len = i128::try_from(len).unwrap_or(i128::MAX);
    let mut start = i128::from(b);
    let mut end = i128::from(e);

    if start < 0 {
        start += len;
        if start < 0 {
            return outside();
        }
    }
    if policy != OffsetPolicy::Strict {
        if start > len {
            return outside();
        }
        end = end.min(len);
    }
    if end < 0 {
        end += len;
    }
    if !exclusive {
        end += 1;
    }
    let count = (end - start).max(0);

    match (usize::try_from(start), usize::try_from(count)) {
        (Ok(start), Ok(len)) => Ok(Some(Span { start, len })),
        _ => outside(),
    }
}

/// Integer index of a bound; finite floats truncate toward zero.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    reason = "the float is truncated and range-checked before the cast"
)]
fn index_of(scalar: Option<Scalar<'_>>) -> Option<i64> {
    match scalar? {
        Scalar::Int(n) => Some(n),
        Scalar::Float(f) => {
            let whole = f.trunc();
            (whole >= i64::MIN as f64 && whole < i64::MAX as f64).then_some(whole as i64)
        }
        _ => None,
    }
}

impl<V: Bound> Interval<V> {
    /// [`offsets`] for this interval.
    pub fn offsets(&self, len: usize, policy: OffsetPolicy) -> IntervalResult<Option<Span>> {
        offsets(self, len, policy)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
