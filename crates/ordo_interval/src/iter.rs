//! Ascending traversal of an interval.
//!
//! Strategy is chosen from the interval's [`Domain`]:
//!
//! | Domain | Strategy |
//! |---|---|
//! | `Integer` | machine arithmetic, no successor calls |
//! | `Symbolic`, `Lexical` | [`lexical::upto`] |
//! | anything with a discrete lower bound | successor protocol |
//!
//! Everything else is not iterable.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use crate::bound::{Bound, Scalar};
use crate::domain::Domain;
use crate::errors::{not_iterable, IntervalResult};
use crate::interval::Interval;
use crate::lexical::{self, Upto};

/// Lazy ascending iterator over the elements of an [`Interval`].
#[derive(Clone)]
pub struct Iter<V> {
    state: State<V>,
}

#[derive(Clone)]
enum State<V> {
    Integer(RangeInclusive<i64>),
    Lexical { upto: Upto, symbolic: bool },
    Successor(Successor<V>),
    Done,
}

#[derive(Clone)]
struct Successor<V> {
    cursor: Cursor<V>,
    upper: V,
    exclusive: bool,
}

#[derive(Clone)]
enum Cursor<V> {
    /// First element, not yet emitted.
    Start(V),
    /// Last emitted element; its successor is computed on demand.
    After(V),
    Done,
}

impl<V: Bound> Interval<V> {
    /// Iterate the elements in ascending order.
    ///
    /// Every call starts a fresh traversal from `lower`.
    pub fn iter(&self) -> IntervalResult<Iter<V>> {
        Iter::new(self)
    }
}

impl<V: Bound> Iter<V> {
    fn new(interval: &Interval<V>) -> IntervalResult<Self> {
        let (lower, upper) = (interval.lower(), interval.upper());
        let exclusive = interval.is_exclusive();

        let state = match (interval.domain(), lower.scalar(), upper.scalar()) {
            (Domain::Integer, Some(Scalar::Int(l)), Some(Scalar::Int(u))) => {
                tracing::debug!(strategy = "integer", "iterating interval");
                let last = if exclusive { u.checked_sub(1) } else { Some(u) };
                match last {
                    Some(last) => State::Integer(l..=last),
                    None => State::Done,
                }
            }
            (Domain::Symbolic, Some(Scalar::Symbol(l)), Some(Scalar::Symbol(u))) => {
                tracing::debug!(strategy = "symbolic", "iterating interval");
                State::Lexical {
                    upto: lexical::upto(l, u, exclusive),
                    symbolic: true,
                }
            }
            (Domain::Lexical, Some(Scalar::Text(l)), Some(Scalar::Text(u))) => {
                tracing::debug!(strategy = "lexical", "iterating interval");
                State::Lexical {
                    upto: lexical::upto(l, u, exclusive),
                    symbolic: false,
                }
            }
            _ if lower.is_discrete() => {
                tracing::debug!(strategy = "successor", "iterating interval");
                State::Successor(Successor {
                    cursor: Cursor::Start(lower.clone()),
                    upper: upper.clone(),
                    exclusive,
                })
            }
            _ => return Err(not_iterable(lower.type_name())),
        };
        Ok(Iter { state })
    }
}

impl<V: Bound> Iterator for Iter<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        let item = match &mut self.state {
            State::Integer(range) => range.next().and_then(|n| V::from_scalar(Scalar::Int(n))),
            State::Lexical { upto, symbolic } => upto.next().and_then(|s| {
                if *symbolic {
                    V::from_scalar(Scalar::Symbol(&s))
                } else {
                    V::from_scalar(Scalar::Text(&s))
                }
            }),
            State::Successor(successor) => successor.advance(),
            State::Done => None,
        };
        if item.is_none() {
            self.state = State::Done;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Integer(range) => range.size_hint(),
            State::Done => (0, Some(0)),
            State::Lexical { .. } | State::Successor(_) => (0, None),
        }
    }
}

impl<V: Bound> Successor<V> {
    fn advance(&mut self) -> Option<V> {
        let candidate = match std::mem::replace(&mut self.cursor, Cursor::Done) {
            Cursor::Start(first) => first,
            Cursor::After(previous) => {
                let next = previous.successor()?;
                if next.compare(&previous) != Some(Ordering::Greater) {
                    tracing::warn!(
                        type_name = previous.type_name(),
                        "successor did not advance; iteration stopped"
                    );
                    return None;
                }
                next
            }
            Cursor::Done => return None,
        };

        match candidate.compare(&self.upper) {
            Some(Ordering::Less) => {
                self.cursor = Cursor::After(candidate.clone());
                Some(candidate)
            }
            // The upper bound itself: emit and stop without a successor call.
            Some(Ordering::Equal) if !self.exclusive => Some(candidate),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
