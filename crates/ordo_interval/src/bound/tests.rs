use super::*;

fn guard() -> RecursionGuard {
    RecursionGuard::new()
}

// Integers

#[test]
fn integers_expose_a_machine_view_when_it_fits() {
    assert_eq!(7_u8.scalar(), Some(Scalar::Int(7)));
    assert_eq!(u64::MAX.scalar(), None);
    assert_eq!(i128::MIN.scalar(), None);
    assert!(u128::MAX.is_numeric());
}

#[test]
fn integers_rebuild_only_from_integers_in_range() {
    assert_eq!(u8::from_scalar(Scalar::Int(255)), Some(255));
    assert_eq!(u8::from_scalar(Scalar::Int(256)), None);
    assert_eq!(i32::from_scalar(Scalar::Float(1.0)), None);
}

#[test]
fn integer_successor_stops_at_the_top() {
    assert_eq!(41_i64.successor(), Some(42));
    assert_eq!(u8::MAX.successor(), None);
}

#[test]
fn integer_offset_is_checked() {
    assert_eq!(10_u32.offset(Stride::Int(5), 3), Some(25));
    assert_eq!(250_u8.offset(Stride::Int(5), 2), None);
    assert_eq!(1_u8.offset(Stride::Int(-1), 1), None);
    assert_eq!(1_i64.offset(Stride::Float(0.5), 1), None);
}

// Floats

#[test]
fn floats_accept_integer_elements() {
    assert_eq!(f64::from_scalar(Scalar::Int(3)), Some(3.0));
    assert_eq!(f32::from_scalar(Scalar::Float(0.5)), Some(0.5));
    assert_eq!(f64::from_scalar(Scalar::Text("1")), None);
}

#[test]
fn nan_is_incomparable() {
    assert_eq!(f64::NAN.compare(&1.0), None);
    assert_eq!(1.0_f32.compare(&2.0), Some(Ordering::Less));
}

#[test]
fn signed_zeros_hash_alike() {
    assert_eq!((-0.0_f64).hash_guarded(&mut guard()), 0.0_f64.hash_guarded(&mut guard()));
    assert_eq!((-0.0_f32).hash_guarded(&mut guard()), 0.0_f32.hash_guarded(&mut guard()));
}

#[test]
fn floats_are_not_discrete() {
    assert!(!1.5_f64.is_discrete());
    assert_eq!(1.5_f64.successor(), None);
    assert_eq!(2.5_f64.inspect_guarded(&mut guard()), "2.5");
}

// Strings

#[test]
fn strings_compare_by_bytes() {
    let upper = "Z".to_string();
    let lower = "a".to_string();
    assert_eq!(upper.compare(&lower), Some(Ordering::Less));
}

#[test]
fn string_successor_carries() {
    assert_eq!("az".to_string().successor().as_deref(), Some("ba"));
    assert_eq!("Zz".to_string().successor().as_deref(), Some("AAa"));
}

#[test]
fn strings_inspect_quoted() {
    assert_eq!("a\"b".to_string().inspect_guarded(&mut guard()), "\"a\\\"b\"");
}

// Characters

#[test]
fn char_successor_skips_surrogates() {
    assert_eq!('a'.successor(), Some('b'));
    assert_eq!('\u{D7FF}'.successor(), Some('\u{E000}'));
    assert_eq!(char::MAX.successor(), None);
}

#[test]
fn chars_have_no_fast_path() {
    assert_eq!('a'.scalar(), None);
    assert!(!'a'.is_numeric());
    assert!('a'.eql_guarded(&'a', &mut guard()));
}
