//! User-defined objects as interval bounds.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::any::Any;
use std::cmp::Ordering;
use std::sync::Arc;

use ordo_value::{Domain, Interval, Object, Value};
use pretty_assertions::assert_eq;

/// Calendar day number; discrete through `successor`.
#[derive(Debug)]
struct Day(u32);

impl Object for Day {
    fn type_name(&self) -> &str {
        "Day"
    }

    fn compare(&self, other: &dyn Object) -> Option<Ordering> {
        let other = other.as_any().downcast_ref::<Day>()?;
        Some(self.0.cmp(&other.0))
    }

    fn is_discrete(&self) -> bool {
        true
    }

    fn successor(&self) -> Option<Arc<dyn Object>> {
        Some(Arc::new(Day(self.0 + 1)))
    }

    fn hash_code(&self) -> u64 {
        u64::from(self.0)
    }

    fn display(&self) -> String {
        format!("day{}", self.0)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Hundredths; numeric through `offset`.
#[derive(Debug)]
struct Cents(i64);

impl Object for Cents {
    fn type_name(&self) -> &str {
        "Cents"
    }

    fn compare(&self, other: &dyn Object) -> Option<Ordering> {
        let other = other.as_any().downcast_ref::<Cents>()?;
        Some(self.0.cmp(&other.0))
    }

    fn is_numeric(&self) -> bool {
        true
    }

    fn offset(&self, stride: ordo_value::Stride, count: u64) -> Option<Arc<dyn Object>> {
        let ordo_value::Stride::Int(step) = stride else {
            return None;
        };
        let count = i64::try_from(count).ok()?;
        Some(Arc::new(Cents(self.0 + step * count)))
    }

    fn display(&self) -> String {
        format!("{}.{:02}", self.0 / 100, self.0 % 100)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn days(lower: u32, upper: u32, exclusive: bool) -> Interval<Value> {
    Interval::new(Value::object(Day(lower)), Value::object(Day(upper)), exclusive).unwrap()
}

#[test]
fn successor_objects_iterate() {
    let interval = days(3, 6, true);
    assert_eq!(interval.domain(), Domain::Discrete);
    let rendered: Vec<String> = interval.iter().unwrap().map(|d| d.to_string()).collect();
    assert_eq!(rendered, ["day3", "day4", "day5"]);
    let sampled: Vec<String> = interval.step(2).unwrap().map(|d| d.to_string()).collect();
    assert_eq!(sampled, ["day3", "day5"]);
}

#[test]
fn successor_objects_answer_queries() {
    let interval = days(3, 6, false);
    assert!(interval.cover(&Value::object(Day(6))));
    assert!(!interval.cover(&Value::object(Day(7))));
    assert!(!interval.cover(&Value::int(4)));
    assert_eq!(interval.last_n(2).unwrap().len(), 2);
    assert_eq!(interval.to_string(), "day3..day6");
}

#[test]
fn objects_of_different_types_do_not_form_intervals() {
    let err = Interval::new(Value::object(Day(1)), Value::object(Cents(1)), false).unwrap_err();
    assert_eq!(err.message, "bad value for range: day1 and 0.01 are not comparable");
}

#[test]
fn numeric_objects_step_by_offset() {
    let interval =
        Interval::new(Value::object(Cents(100)), Value::object(Cents(200)), false).unwrap();
    assert_eq!(interval.domain(), Domain::Numeric);
    let rendered: Vec<String> = interval.step(25).unwrap().map(|c| c.to_string()).collect();
    assert_eq!(rendered, ["1.00", "1.25", "1.50", "1.75", "2.00"]);

    // Cents only take whole strides.
    let err = interval.step(0.5).err().unwrap();
    assert_eq!(err.to_string(), "step 0.5 can't be applied to numeric bounds");

    // Numeric objects are not iterable without a successor.
    assert!(interval.iter().is_err());
    // Membership reduces to coverage.
    assert!(interval.member(&Value::object(Cents(133))));
}

#[test]
fn equal_objects_hash_alike() {
    assert_eq!(days(1, 2, false).hash_code(), days(1, 2, false).hash_code());
    assert!(days(1, 2, false).is_equal(&days(1, 2, false)));
    assert!(!days(1, 2, false).is_equal(&days(1, 3, false)));
}
