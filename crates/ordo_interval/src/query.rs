//! Membership, coverage and boundary queries.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::bound::{Bound, Scalar};
use crate::domain::Domain;
use crate::errors::{non_integer_begin, non_integer_end, IntervalResult};
use crate::guard::RecursionGuard;
use crate::interval::Interval;

/// Membership test for values outside the numeric and single-character
/// fast paths.
pub trait Membership<V: Bound> {
    fn contains(&self, interval: &Interval<V>, value: &V) -> IntervalResult<bool>;
}

/// Membership by ordering alone (same as [`Interval::cover`]).
#[derive(Copy, Clone, Debug, Default)]
pub struct ByOrdering;

impl<V: Bound> Membership<V> for ByOrdering {
    fn contains(&self, interval: &Interval<V>, value: &V) -> IntervalResult<bool> {
        Ok(interval.cover(value))
    }
}

/// Membership by enumerating the interval and testing equality.
#[derive(Copy, Clone, Debug, Default)]
pub struct ByEnumeration;

impl<V: Bound> Membership<V> for ByEnumeration {
    fn contains(&self, interval: &Interval<V>, value: &V) -> IntervalResult<bool> {
        let mut guard = RecursionGuard::new();
        for element in interval.iter()? {
            if element.eq_guarded(value, &mut guard) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl<V: Bound> Interval<V> {
    // Membership

    /// `lower <= value` and `value < upper` (or `<=` when inclusive).
    ///
    /// Uses the ordering only; incomparable values are not covered.
    pub fn cover(&self, value: &V) -> bool {
        if !matches!(
            self.lower().compare(value),
            Some(Ordering::Less | Ordering::Equal)
        ) {
            return false;
        }
        match value.compare(self.upper()) {
            Some(Ordering::Less) => true,
            Some(Ordering::Equal) => !self.is_exclusive(),
            _ => false,
        }
    }

    /// Whether `value` is an element of the interval.
    ///
    /// Numeric intervals answer by coverage. Single ASCII character bounds
    /// compare bytes directly. Anything else falls back to [`Interval::cover`].
    pub fn member(&self, value: &V) -> bool {
        self.fast_member(value).unwrap_or_else(|| self.cover(value))
    }

    /// [`Interval::member`] with a caller-chosen fallback.
    pub fn member_with(&self, value: &V, membership: &impl Membership<V>) -> IntervalResult<bool> {
        match self.fast_member(value) {
            Some(found) => Ok(found),
            None => membership.contains(self, value),
        }
    }

    /// Pattern-matching entry point; same as [`Interval::member`].
    pub fn case_eq(&self, value: &V) -> bool {
        self.member(value)
    }

    fn fast_member(&self, value: &V) -> Option<bool> {
        if self.domain().is_numeric() {
            return Some(self.cover(value));
        }
        if self.domain() != Domain::Lexical {
            return None;
        }
        let (Some(Scalar::Text(lower)), Some(Scalar::Text(upper))) =
            (self.lower().scalar(), self.upper().scalar())
        else {
            return None;
        };
        let ([b], [e]) = (lower.as_bytes(), upper.as_bytes()) else {
            return None;
        };
        let Some(Scalar::Text(text)) = value.scalar() else {
            return None;
        };
        let [v] = text.as_bytes() else {
            return Some(false);
        };
        if !(b.is_ascii() && e.is_ascii() && v.is_ascii()) {
            return None;
        }
        Some((b <= v && v < e) || (!self.is_exclusive() && v == e))
    }

    // Boundary Queries

    /// The lower bound.
    #[inline]
    pub fn first(&self) -> &V {
        self.lower()
    }

    /// The upper bound, even when excluded.
    #[inline]
    pub fn last(&self) -> &V {
        self.upper()
    }

    /// The first `count` elements.
    pub fn first_n(&self, count: usize) -> IntervalResult<Vec<V>> {
        Ok(self.iter()?.take(count).collect())
    }

    /// The last `count` elements, in ascending order.
    pub fn last_n(&self, count: usize) -> IntervalResult<Vec<V>> {
        if let (Domain::Integer, Some(Scalar::Int(lower)), Some(Scalar::Int(upper))) =
            (self.domain(), self.lower().scalar(), self.upper().scalar())
        {
            return Ok(integer_tail(lower, upper, self.is_exclusive(), count));
        }

        let elements = self.iter()?;
        if count == 0 {
            return Ok(Vec::new());
        }
        let mut tail = VecDeque::with_capacity(count.min(1024));
        for element in elements {
            if tail.len() == count {
                tail.pop_front();
            }
            tail.push_back(element);
        }
        Ok(tail.into())
    }

    /// The smallest element, or `None` for an empty interval.
    pub fn min(&self) -> IntervalResult<Option<V>> {
        Ok(match self.bound_ordering()? {
            Ordering::Greater => None,
            Ordering::Equal if self.is_exclusive() => None,
            _ => Some(self.lower().clone()),
        })
    }

    /// The largest element, or `None` for an empty interval.
    ///
    /// An exclusive upper bound needs a predecessor, which only integers
    /// have.
    pub fn max(&self) -> IntervalResult<Option<V>> {
        let ordering = self.bound_ordering()?;
        if ordering == Ordering::Greater {
            return Ok(None);
        }
        if !self.is_exclusive() {
            return Ok(Some(self.upper().clone()));
        }
        if !self.upper().is_integer() {
            return Err(non_integer_end());
        }
        if ordering == Ordering::Equal {
            return Ok(None);
        }
        if !self.lower().is_integer() {
            return Err(non_integer_begin());
        }
        // `lower < upper`, so the predecessor exists.
        Ok(self.upper().predecessor())
    }
}

fn integer_tail<V: Bound>(lower: i64, upper: i64, exclusive: bool, count: usize) -> Vec<V> {
    let last = if exclusive { upper.checked_sub(1) } else { Some(upper) };
    let Some(last) = last else {
        return Vec::new();
    };
    if count == 0 || lower > last {
        return Vec::new();
    }
    let start = (i128::from(last) + 1 - i128::try_from(count).unwrap_or(i128::MAX))
        .max(i128::from(lower));
    // `start` lies within `lower..=last`.
    let start = i64::try_from(start).unwrap_or(lower);
    (start..=last)
        .map_while(|n| V::from_scalar(Scalar::Int(n)))
        .collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
