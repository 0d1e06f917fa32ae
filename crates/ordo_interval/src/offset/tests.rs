use super::*;
use crate::errors::IntervalErrorKind;

fn span(start: usize, len: usize) -> Option<Span> {
    Some(Span { start, len })
}

#[test]
fn positive_ranges() {
    assert_eq!(offsets(&(1..3), 10, OffsetPolicy::Lenient), Ok(span(1, 2)));
    assert_eq!(offsets(&(1..=3), 10, OffsetPolicy::Lenient), Ok(span(1, 3)));
}

#[test]
fn negative_ends_count_from_the_back() {
    assert_eq!(offsets(&(-3..=-1), 10, OffsetPolicy::Lenient), Ok(span(7, 3)));
    assert_eq!(offsets(&(0..-1), 10, OffsetPolicy::Lenient), Ok(span(0, 9)));
}

#[test]
fn reversed_range_has_zero_length() {
    assert_eq!(offsets(&(5..=2), 10, OffsetPolicy::Lenient), Ok(span(5, 0)));
}

#[test]
fn end_is_clamped_unless_strict() {
    // The inclusive end is added after clamping; slicing trims the excess.
    assert_eq!(offsets(&(2..=50), 10, OffsetPolicy::Lenient), Ok(span(2, 9)));
    assert_eq!(offsets(&(2..50), 10, OffsetPolicy::Truncate), Ok(span(2, 8)));
    assert_eq!(offsets(&(2..=50), 10, OffsetPolicy::Strict), Ok(span(2, 49)));
}

#[test]
fn start_at_length_is_an_empty_span() {
    assert_eq!(offsets(&(10..12), 10, OffsetPolicy::Lenient), Ok(span(10, 0)));
}

#[test]
fn out_of_range_start() {
    assert_eq!(offsets(&(-11..2), 10, OffsetPolicy::Lenient), Ok(None));
    assert_eq!(offsets(&(11..12), 10, OffsetPolicy::Lenient), Ok(None));

    let err = offsets(&(-7..=2), 5, OffsetPolicy::Truncate).unwrap_err();
    assert_eq!(err.message, "-7..2 out of range");

    let err = offsets(&(9..12), 5, OffsetPolicy::Truncate).unwrap_err();
    assert_eq!(
        err.kind,
        IntervalErrorKind::OutOfRange {
            lower: 9,
            upper: 12,
            exclusive: true
        }
    );
    assert_eq!(err.message, "9...12 out of range");
}

#[test]
fn strict_does_not_check_start_past_the_end() {
    assert_eq!(offsets(&(12..=13), 10, OffsetPolicy::Strict), Ok(span(12, 2)));
}

#[test]
fn intervals_resolve_like_std_ranges() {
    let interval = Interval::exclusive(-4_i64, -1).unwrap();
    assert_eq!(interval.offsets(6, OffsetPolicy::Strict), Ok(span(2, 3)));
    assert_eq!(
        interval.offsets(6, OffsetPolicy::default()),
        offsets(&(-4_i64..-1), 6, OffsetPolicy::Lenient)
    );
}

#[test]
fn float_bounds_truncate_toward_zero() {
    assert_eq!(offsets(&(1.7_f64..=3.2), 10, OffsetPolicy::Lenient), Ok(span(1, 3)));
    assert_eq!(offsets(&(0.5_f64..2.9), 10, OffsetPolicy::Lenient), Ok(span(0, 2)));
    assert_eq!(offsets(&(-2.5_f64..=-1.0), 10, OffsetPolicy::Lenient), Ok(span(8, 2)));
}

#[test]
fn non_integer_bounds_are_rejected() {
    let err = offsets(&("a".to_string().."c".to_string()), 10, OffsetPolicy::Lenient).unwrap_err();
    assert!(matches!(err.kind, IntervalErrorKind::InvalidBounds { .. }));

    let err = offsets(&(f64::NAN..=2.0), 10, OffsetPolicy::Lenient).unwrap_err();
    assert!(matches!(err.kind, IntervalErrorKind::InvalidBounds { .. }));
    assert!(offsets(&(0.0_f64..f64::INFINITY), 10, OffsetPolicy::Lenient).is_err());
}
