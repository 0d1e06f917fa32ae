//! Strided traversal.
//!
//! # Strategies
//!
//! - **Integer** bounds with an integer stride: machine arithmetic, stopping
//!   on overflow.
//! - **Floating** (any float among the bounds or the stride): element count
//!   is computed up front with a rounding tolerance, then every element is
//!   recomputed from the origin as `lower + i * unit`.
//! - **Numeric** bounds without a machine view: `lower.offset(stride, i)`.
//! - Everything else samples the ordinary iteration every `n` elements.

use std::cmp::Ordering;
use std::fmt;
use std::iter::StepBy;

use crate::bound::{Bound, Scalar};
use crate::domain::Domain;
use crate::errors::{negative_step, unusable_step, zero_step, IntervalResult};
use crate::interval::Interval;
use crate::iter::Iter;

/// Distance between consecutive elements of a stepped traversal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Stride {
    Int(i64),
    Float(f64),
}

impl Stride {
    /// Reject negative, zero and NaN strides.
    fn validate(self) -> IntervalResult<Self> {
        match self {
            Stride::Int(n) if n < 0 => Err(negative_step()),
            Stride::Int(0) => Err(zero_step()),
            Stride::Float(f) if f < 0.0 => Err(negative_step()),
            // NaN is neither positive nor negative.
            Stride::Float(f) if f.is_nan() || f == 0.0 => Err(zero_step()),
            stride => Ok(stride),
        }
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "integer strides over float bounds are applied as floats"
    )]
    fn as_f64(self) -> f64 {
        match self {
            Stride::Int(n) => n as f64,
            Stride::Float(f) => f,
        }
    }

    /// Sampling interval for non-numeric traversals.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "checked finite, integral and positive before the cast"
    )]
    fn as_count(self) -> Option<usize> {
        match self {
            Stride::Int(n) => Some(usize::try_from(n).unwrap_or(usize::MAX)),
            Stride::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(f as usize),
            Stride::Float(_) => None,
        }
    }
}

impl From<i64> for Stride {
    fn from(n: i64) -> Self {
        Stride::Int(n)
    }
}

impl From<i32> for Stride {
    fn from(n: i32) -> Self {
        Stride::Int(i64::from(n))
    }
}

impl From<u32> for Stride {
    fn from(n: u32) -> Self {
        Stride::Int(i64::from(n))
    }
}

impl From<f64> for Stride {
    fn from(f: f64) -> Self {
        Stride::Float(f)
    }
}

impl fmt::Display for Stride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stride::Int(n) => write!(f, "{n}"),
            Stride::Float(x) => write!(f, "{x:?}"),
        }
    }
}

/// Lazy iterator returned by [`Interval::step`].
#[derive(Clone)]
pub struct StepIter<V> {
    state: State<V>,
}

#[derive(Clone)]
enum State<V> {
    Integer {
        next: Option<i64>,
        last: i64,
        unit: i64,
    },
    Floating {
        origin: f64,
        unit: f64,
        index: u64,
        count: u64,
    },
    Numeric {
        origin: V,
        upper: V,
        exclusive: bool,
        stride: Stride,
        index: u64,
    },
    Sampled(StepBy<Iter<V>>),
    Done,
}

impl<V: Bound> Interval<V> {
    /// Iterate every `stride`-th element, starting with `lower`.
    pub fn step(&self, stride: impl Into<Stride>) -> IntervalResult<StepIter<V>> {
        let stride = stride.into().validate()?;
        let state = match (self.domain(), stride) {
            (Domain::Integer, Stride::Int(unit)) => integer_state(self, unit),
            (Domain::Integer, Stride::Float(_)) | (Domain::Floating, _) => {
                // Integer-only types cannot hold fractional elements.
                if V::from_scalar(Scalar::Float(0.5)).is_none() {
                    return Err(unusable_step(&stride.to_string(), self.domain().as_str()));
                }
                floating_state(self, stride.as_f64())
            }
            (Domain::Numeric, _) => {
                if self.lower().offset(stride, 0).is_none() {
                    return Err(unusable_step(&stride.to_string(), self.domain().as_str()));
                }
                tracing::debug!(strategy = "numeric", %stride, "stepping interval");
                State::Numeric {
                    origin: self.lower().clone(),
                    upper: self.upper().clone(),
                    exclusive: self.is_exclusive(),
                    stride,
                    index: 0,
                }
            }
            (domain, _) => {
                let Some(n) = stride.as_count() else {
                    return Err(unusable_step(&stride.to_string(), domain.as_str()));
                };
                tracing::debug!(strategy = "sampled", every = n, "stepping interval");
                State::Sampled(self.iter()?.step_by(n))
            }
        };
        Ok(StepIter { state })
    }
}

fn integer_state<V: Bound>(interval: &Interval<V>, unit: i64) -> State<V> {
    tracing::debug!(strategy = "integer", unit, "stepping interval");
    let (Some(Scalar::Int(lower)), Some(Scalar::Int(upper))) =
        (interval.lower().scalar(), interval.upper().scalar())
    else {
        return State::Done;
    };
    let last = if interval.is_exclusive() {
        upper.checked_sub(1)
    } else {
        Some(upper)
    };
    match last {
        Some(last) if lower <= last => State::Integer {
            next: Some(lower),
            last,
            unit,
        },
        _ => State::Done,
    }
}

#[expect(
    clippy::cast_precision_loss,
    reason = "bounds are stepped in floating point"
)]
fn scalar_f64(scalar: Option<Scalar<'_>>) -> Option<f64> {
    match scalar {
        Some(Scalar::Int(n)) => Some(n as f64),
        Some(Scalar::Float(f)) => Some(f),
        _ => None,
    }
}

fn floating_state<V: Bound>(interval: &Interval<V>, unit: f64) -> State<V> {
    let (Some(origin), Some(end)) = (
        scalar_f64(interval.lower().scalar()),
        scalar_f64(interval.upper().scalar()),
    ) else {
        return State::Done;
    };
    let count = float_step_count(origin, end, unit, interval.is_exclusive());
    tracing::debug!(strategy = "floating", unit, count, "stepping interval");
    State::Floating {
        origin,
        unit,
        index: 0,
        count,
    }
}

/// Number of elements `origin + i * unit` inside the interval.
///
/// Rounding error is absorbed by a tolerance proportional to the magnitudes
/// involved, capped at half a step.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "count is floored and checked positive before the cast"
)]
fn float_step_count(origin: f64, end: f64, unit: f64, exclusive: bool) -> u64 {
    if unit.is_infinite() {
        return u64::from(origin <= end);
    }
    let span = end - origin;
    let err = ((origin.abs() + end.abs() + span.abs()) / unit.abs() * f64::EPSILON).min(0.5);
    let mut n = (span / unit + err).floor();
    if !exclusive || n * unit + origin < end {
        n += 1.0;
    }
    if n >= 1.0 {
        n as u64
    } else {
        0
    }
}

impl<V: Bound> Iterator for StepIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        let item = match &mut self.state {
            State::Integer { next, last, unit } => {
                let current = (*next)?;
                *next = current.checked_add(*unit).filter(|n| *n <= *last);
                V::from_scalar(Scalar::Int(current))
            }
            State::Floating {
                origin,
                unit,
                index,
                count,
            } => {
                if *index >= *count {
                    None
                } else {
                    // The first element is the origin itself; `0 * inf` would be NaN.
                    #[expect(clippy::cast_precision_loss, reason = "index is below the element count")]
                    let value = if *index == 0 {
                        *origin
                    } else {
                        *index as f64 * *unit + *origin
                    };
                    *index += 1;
                    V::from_scalar(Scalar::Float(value))
                }
            }
            State::Numeric {
                origin,
                upper,
                exclusive,
                stride,
                index,
            } => {
                *index += 1;
                origin
                    .offset(*stride, *index - 1)
                    .filter(|value| match value.compare(upper) {
                        Some(Ordering::Less) => true,
                        Some(Ordering::Equal) => !*exclusive,
                        _ => false,
                    })
            }
            State::Sampled(inner) => inner.next(),
            State::Done => None,
        };
        if item.is_none() {
            self.state = State::Done;
        }
        item
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
