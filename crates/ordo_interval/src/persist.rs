//! Persisted form: three named fields `begin`, `end` and `excl`.
//!
//! Loading goes back through [`Interval::new`], so a payload with
//! incomparable bounds is rejected instead of producing an interval.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bound::Bound;
use crate::interval::Interval;

#[derive(Serialize)]
#[serde(rename = "Interval")]
struct PersistedRef<'a, V> {
    begin: &'a V,
    end: &'a V,
    excl: bool,
}

#[derive(Deserialize)]
#[serde(rename = "Interval")]
struct Persisted<V> {
    begin: V,
    end: V,
    excl: bool,
}

impl<V: Bound + Serialize> Serialize for Interval<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PersistedRef {
            begin: self.lower(),
            end: self.upper(),
            excl: self.is_exclusive(),
        }
        .serialize(serializer)
    }
}

impl<'de, V: Bound + Deserialize<'de>> Deserialize<'de> for Interval<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Persisted { begin, end, excl } = Persisted::deserialize(deserializer)?;
        Interval::new(begin, end, excl).map_err(D::Error::custom)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
