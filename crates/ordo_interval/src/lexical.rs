//! Lexical iteration: alphanumeric increment (`succ`) and `upto`.
//!
//! # Increment Rules
//!
//! The rightmost alphanumeric is incremented. A wrap (`9→0`, `z→a`, `Z→A`)
//! carries into the next alphanumeric to the left, skipping other
//! characters. A carry does not cross a separator from a digit run
//! into a letter run (or the reverse). A carry that runs off the left end
//! inserts `1`, `a` or `A` in front of the last wrapped character.
//!
//! Strings without any ASCII alphanumeric increment their rightmost
//! character by code point instead.

use std::ops::RangeInclusive;

/// Next string in alphanumeric order. `succ("") == ""`.
pub fn succ(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let mut carry: Option<(usize, char)> = None;
    let mut last_wrapped: Option<char> = None;
    let mut after_separator = false;

    for i in (0..chars.len()).rev() {
        let c = chars[i];
        if after_separator {
            if let Some(wrapped) = last_wrapped {
                if crosses_class(wrapped, c) {
                    break;
                }
            }
        }
        match bump_alnum(c) {
            None => after_separator = true,
            Some((next, None)) => {
                chars[i] = next;
                return chars.into_iter().collect();
            }
            Some((next, Some(carry_char))) => {
                chars[i] = next;
                last_wrapped = Some(next);
                carry = Some((i, carry_char));
                after_separator = false;
            }
        }
    }

    if last_wrapped.is_none() {
        for i in (0..chars.len()).rev() {
            let (next, wrapped) = bump_char(chars[i]);
            chars[i] = next;
            if !wrapped {
                return chars.into_iter().collect();
            }
            carry = Some((i, '\u{1}'));
        }
    }

    if let Some((pos, c)) = carry {
        chars.insert(pos, c);
    }
    chars.into_iter().collect()
}

fn crosses_class(wrapped: char, c: char) -> bool {
    (wrapped.is_ascii_alphabetic() && c.is_ascii_digit())
        || (wrapped.is_ascii_digit() && c.is_ascii_alphabetic())
}

/// Increment an ASCII alphanumeric; the second field is the carry on wrap.
fn bump_alnum(c: char) -> Option<(char, Option<char>)> {
    match c {
        '9' => Some(('0', Some('1'))),
        'z' => Some(('a', Some('a'))),
        'Z' => Some(('A', Some('A'))),
        '0'..='8' | 'a'..='y' | 'A'..='Y' => Some((next_code_point(c), None)),
        _ => None,
    }
}

/// Increment by code point; `true` when `char::MAX` wrapped to NUL.
fn bump_char(c: char) -> (char, bool) {
    if c == char::MAX {
        ('\0', true)
    } else {
        (next_code_point(c), false)
    }
}

fn next_code_point(c: char) -> char {
    match c {
        '\u{D7FF}' => '\u{E000}',
        c => char::from_u32(u32::from(c) + 1).unwrap_or(char::MAX),
    }
}

/// Ascending lexical sequence from `lower` to `upper`.
pub fn upto(lower: &str, upper: &str, exclusive: bool) -> Upto {
    let (lb, ub) = (lower.as_bytes(), upper.as_bytes());

    // Single ASCII characters step by byte value.
    if lb.len() == 1 && ub.len() == 1 && lb[0].is_ascii() && ub[0].is_ascii() {
        let (c, e) = (lb[0], ub[0]);
        let bytes = if exclusive {
            e.checked_sub(1).map_or(empty_bytes(), |last| c..=last)
        } else {
            c..=e
        };
        return Upto {
            state: UptoState::Bytes(bytes),
        };
    }

    // All-digit bounds count numerically, padded to the width of `lower`.
    if let (Some(b), Some(e)) = (all_digits(lower), all_digits(upper)) {
        let last = if exclusive { e.checked_sub(1) } else { Some(e) };
        let numbers = last.map_or(empty_numbers(), |last| b..=last);
        return Upto {
            state: UptoState::Digits {
                numbers,
                width: lower.len(),
            },
        };
    }

    let current = if lb > ub || (exclusive && lb == ub) {
        None
    } else {
        Some(lower.to_owned())
    };
    Upto {
        state: UptoState::Succ {
            current,
            after_upper: succ(upper),
            upper: upper.to_owned(),
            exclusive,
        },
    }
}

fn all_digits(s: &str) -> Option<i64> {
    if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

#[expect(
    clippy::reversed_empty_ranges,
    reason = "an exhausted range is the empty sequence"
)]
fn empty_bytes() -> RangeInclusive<u8> {
    1..=0
}

#[expect(
    clippy::reversed_empty_ranges,
    reason = "an exhausted range is the empty sequence"
)]
fn empty_numbers() -> RangeInclusive<i64> {
    1..=0
}

/// Iterator returned by [`upto`].
#[derive(Clone, Debug)]
pub struct Upto {
    state: UptoState,
}

#[derive(Clone, Debug)]
enum UptoState {
    Bytes(RangeInclusive<u8>),
    Digits {
        numbers: RangeInclusive<i64>,
        width: usize,
    },
    Succ {
        current: Option<String>,
        upper: String,
        after_upper: String,
        exclusive: bool,
    },
}

impl Iterator for Upto {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match &mut self.state {
            UptoState::Bytes(bytes) => bytes.next().map(|b| char::from(b).to_string()),
            UptoState::Digits { numbers, width } => {
                numbers.next().map(|n| format!("{n:0width$}", width = *width))
            }
            UptoState::Succ {
                current,
                upper,
                after_upper,
                exclusive,
            } => {
                let value = current.take()?;
                if value == *after_upper {
                    return None;
                }
                if !*exclusive && value == *upper {
                    return Some(value);
                }
                let next = succ(&value);
                let stop = (*exclusive && next == *upper)
                    || next.len() > upper.len()
                    || next.is_empty();
                if !stop {
                    *current = Some(next);
                }
                Some(value)
            }
        }
    }
}
