//! The immutable interval value.
//!
//! An `Interval<V>` is the triple `(lower, upper, exclusive)` plus the
//! [`Domain`] resolved from its bounds. Fields are private and there is no
//! mutating accessor, so an interval never changes after construction.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::bound::Bound;
use crate::domain::Domain;
use crate::errors::{invalid_bounds, IntervalResult};
use crate::guard::RecursionGuard;

/// Set of elements between `lower` and `upper`, optionally excluding `upper`.
#[derive(Clone)]
pub struct Interval<V> {
    lower: V,
    upper: V,
    exclusive: bool,
    domain: Domain,
}

impl<V: Bound> Interval<V> {
    /// Build an interval, probing that the bounds are comparable.
    ///
    /// The probe is skipped for machine-integer bounds.
    pub fn new(lower: V, upper: V, exclusive: bool) -> IntervalResult<Self> {
        let domain = Domain::resolve(&lower, &upper);
        if domain == Domain::Integer {
            tracing::trace!("integer bounds, comparability probe skipped");
        } else if lower.compare(&upper).is_none() {
            return Err(incomparable(&lower, &upper));
        }
        tracing::trace!(%domain, exclusive, "interval constructed");
        Ok(Interval {
            lower,
            upper,
            exclusive,
            domain,
        })
    }

    /// `lower..upper`
    pub fn inclusive(lower: V, upper: V) -> IntervalResult<Self> {
        Self::new(lower, upper, false)
    }

    /// `lower...upper`
    pub fn exclusive(lower: V, upper: V) -> IntervalResult<Self> {
        Self::new(lower, upper, true)
    }

    #[inline]
    pub fn lower(&self) -> &V {
        &self.lower
    }

    #[inline]
    pub fn upper(&self) -> &V {
        &self.upper
    }

    #[inline]
    pub fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    #[inline]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Ordering of `lower` against `upper`.
    pub(crate) fn bound_ordering(&self) -> IntervalResult<Ordering> {
        self.lower
            .compare(&self.upper)
            .ok_or_else(|| incomparable(&self.lower, &self.upper))
    }

    /// Whether no element lies inside the interval.
    pub fn is_empty(&self) -> IntervalResult<bool> {
        Ok(match self.bound_ordering()? {
            Ordering::Greater => true,
            Ordering::Equal => self.exclusive,
            Ordering::Less => false,
        })
    }

    // Equality

    /// Loose equality: same exclusivity and bounds equal by `==`.
    pub fn is_equal(&self, other: &Self) -> bool {
        self.eq_with(other, &mut RecursionGuard::new())
    }

    /// Strict equality: bounds must also agree in type (`1` vs `1.0`).
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.eql_with(other, &mut RecursionGuard::new())
    }

    /// [`Interval::is_equal`] under an existing guard, for bound types that
    /// nest intervals.
    pub fn eq_with(&self, other: &Self, guard: &mut RecursionGuard) -> bool {
        self.pairwise(other, guard, V::eq_guarded)
    }

    /// [`Interval::is_equivalent`] under an existing guard.
    pub fn eql_with(&self, other: &Self, guard: &mut RecursionGuard) -> bool {
        self.pairwise(other, guard, V::eql_guarded)
    }

    fn pairwise(
        &self,
        other: &Self,
        guard: &mut RecursionGuard,
        same: fn(&V, &V, &mut RecursionGuard) -> bool,
    ) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        if self.exclusive != other.exclusive {
            return false;
        }
        // A comparison already in flight further up counts as equal.
        guard
            .paired(self, other, |guard| {
                same(&self.lower, &other.lower, guard) && same(&self.upper, &other.upper, guard)
            })
            .unwrap_or(true)
    }

    // Hashing

    /// Hash code consistent with [`Interval::is_equal`].
    pub fn hash_code(&self) -> u64 {
        self.hash_with(&mut RecursionGuard::new())
    }

    /// [`Interval::hash_code`] under an existing guard.
    pub fn hash_with(&self, guard: &mut RecursionGuard) -> u64 {
        let mut hasher = FxHasher::default();
        hasher.write_u8(u8::from(self.exclusive));
        // Recursive occurrences contribute nothing for their bounds.
        guard.single(self, |guard| {
            hasher.write_u64(self.lower.hash_guarded(guard));
            hasher.write_u64(self.upper.hash_guarded(guard));
        });
        hasher.write_u64(u64::from(self.exclusive) << 24);
        hasher.finish()
    }

    // Rendering

    /// Programmer-facing rendering; bounds use their own inspect form.
    pub fn inspect(&self) -> String {
        self.inspect_with(&mut RecursionGuard::new())
    }

    /// [`Interval::inspect`] under an existing guard.
    pub fn inspect_with(&self, guard: &mut RecursionGuard) -> String {
        let dots = self.dots();
        guard
            .single(self, |guard| {
                format!(
                    "{}{dots}{}",
                    self.lower.inspect_guarded(guard),
                    self.upper.inspect_guarded(guard)
                )
            })
            .unwrap_or_else(|| format!("(... {dots} ...)"))
    }

    fn dots(&self) -> &'static str {
        if self.exclusive {
            "..."
        } else {
            ".."
        }
    }
}

#[cold]
fn incomparable<V: Bound>(lower: &V, upper: &V) -> crate::errors::IntervalError {
    let mut guard = RecursionGuard::new();
    let lower = lower.inspect_guarded(&mut guard);
    let upper = upper.inspect_guarded(&mut guard);
    invalid_bounds(&lower, &upper)
}

impl<V: Bound> PartialEq for Interval<V> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equivalent(other)
    }
}

impl<V: Bound> Eq for Interval<V> {}

impl<V: Bound> Hash for Interval<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<V: Bound> fmt::Debug for Interval<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}

impl<V: Bound + fmt::Display> fmt::Display for Interval<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.lower, self.dots(), self.upper)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
