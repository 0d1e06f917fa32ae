//! Interval behaviour across the dynamic value domains.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use ordo_value::{parse_interval, Domain, Interval, IntervalErrorKind, OffsetPolicy, Span, Value};
use pretty_assertions::assert_eq;

fn interval(text: &str) -> Interval<Value> {
    parse_interval(text).unwrap()
}

fn rendered(values: impl IntoIterator<Item = Value>) -> Vec<String> {
    values.into_iter().map(|v| v.inspect()).collect()
}

// Domain resolution

#[test]
fn domains_follow_the_bound_kinds() {
    assert_eq!(interval("1..5").domain(), Domain::Integer);
    assert_eq!(interval("1..2.5").domain(), Domain::Floating);
    assert_eq!(interval(":a..:c").domain(), Domain::Symbolic);
    assert_eq!(interval("'a'..'c'").domain(), Domain::Lexical);
}

// Iteration

#[test]
fn integer_iteration() {
    assert_eq!(rendered(interval("1...5").iter().unwrap()), ["1", "2", "3", "4"]);
    assert!(interval("5..1").iter().unwrap().next().is_none());
}

#[test]
fn symbols_iterate_as_symbols() {
    assert_eq!(rendered(interval(":a..:c").iter().unwrap()), [":a", ":b", ":c"]);
}

#[test]
fn strings_iterate_lexically() {
    assert_eq!(
        rendered(interval("'az'..'bc'").iter().unwrap()),
        ["\"az\"", "\"ba\"", "\"bb\"", "\"bc\""]
    );
    assert_eq!(
        rendered(interval("'9'..'11'").iter().unwrap()),
        ["\"9\"", "\"10\"", "\"11\""]
    );
}

#[test]
fn integer_lower_with_float_upper_uses_successors() {
    assert_eq!(rendered(interval("1..2.5").iter().unwrap()), ["1", "2"]);
    assert_eq!(rendered(interval("1...3.0").iter().unwrap()), ["1", "2"]);
}

#[test]
fn float_lower_is_not_iterable() {
    let err = interval("0.5..2").iter().err().unwrap();
    assert_eq!(err.kind, IntervalErrorKind::NotIterable { type_name: "float".to_string() });
    assert_eq!(err.message, "can't iterate from float");
    // Coverage still works.
    assert!(interval("0.5..2").cover(&Value::float(1.25)));
}

// Stepping

#[test]
fn integer_bounds_with_float_step_yield_floats() {
    assert_eq!(
        rendered(interval("1..2").step(0.5).unwrap()),
        ["1.0", "1.5", "2.0"]
    );
}

#[test]
fn float_stepping_absorbs_rounding() {
    assert_eq!(interval("0.0..1.0").step(0.3).unwrap().count(), 4);
    assert_eq!(interval("0.0...1.0").step(0.25).unwrap().count(), 4);
    assert_eq!(interval("1.0..2.0").step(0.1).unwrap().count(), 11);
}

#[test]
fn string_stepping_samples_the_iteration() {
    assert_eq!(
        rendered(interval("'a'..'g'").step(3).unwrap()),
        ["\"a\"", "\"d\"", "\"g\""]
    );
    let err = interval("'a'..'g'").step(0.5).err().unwrap();
    assert_eq!(err.message, "step 0.5 can't be applied to lexical bounds");
}

#[test]
fn invalid_strides() {
    assert_eq!(interval("1..5").step(0).err().unwrap().message, "step can't be 0");
    assert_eq!(
        interval("1..5").step(-1).err().unwrap().message,
        "step can't be negative"
    );
    assert_eq!(
        interval("0.0..1.0").step(f64::NAN).err().unwrap().message,
        "step can't be 0"
    );
}

// Queries

#[test]
fn membership_across_domains() {
    assert!(interval("1..10").member(&Value::float(5.5)));
    assert!(interval("'a'..'e'").member(&Value::string("c")));
    assert!(!interval("'a'..'e'").member(&Value::string("cc")));
    assert!(interval("'a'..'e'").cover(&Value::string("cc")));
    assert!(!interval("1..10").cover(&Value::string("5")));
}

#[test]
fn max_of_mixed_bounds() {
    assert!(interval("1..2.5").max().unwrap().unwrap().eql(&Value::float(2.5)));
    assert!(interval("1...5").max().unwrap().unwrap().eql(&Value::int(4)));

    let err = interval("1...2.5").max().unwrap_err();
    assert_eq!(err.message, "cannot exclude non Integer end value");

    let err = interval("1.5...3").max().unwrap_err();
    assert_eq!(err.message, "cannot exclude end value with non Integer begin value");
}

#[test]
fn last_n_over_symbols() {
    assert_eq!(rendered(interval(":a..:e").last_n(2).unwrap()), [":d", ":e"]);
}

#[test]
fn offsets_against_a_sequence() {
    let span = interval("-3..-1").offsets(10, OffsetPolicy::Lenient).unwrap();
    assert_eq!(span, Some(Span { start: 7, len: 3 }));

    let err = interval("-11..2").offsets(10, OffsetPolicy::Strict).unwrap_err();
    assert_eq!(err.message, "-11..2 out of range");
}

// Equality

#[test]
fn loose_equality_crosses_numeric_kinds() {
    let ints = interval("1..2");
    let floats = interval("1.0..2.0");
    assert!(ints.is_equal(&floats));
    assert!(!ints.is_equivalent(&floats));
    assert_eq!(ints.hash_code(), floats.hash_code());
    assert!(!ints.is_equal(&interval("1...2")));
}
