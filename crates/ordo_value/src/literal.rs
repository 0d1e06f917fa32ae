//! Literal syntax for values and intervals.
//!
//! ```text
//! nil  true  false  42  -7  2.5  :sym  'text'  "text"  word
//! lower..upper      lower...upper
//! ```
//!
//! Bare words that are not keywords or numbers read as strings.

use std::fmt;

use ordo_interval::{Interval, IntervalError};

use crate::value::Value;

/// Failure to read a literal.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralError {
    /// The text is empty after trimming.
    Empty,
    /// A quoted string is missing its closing quote.
    Unterminated { text: String },
    /// A symbol with no name.
    EmptySymbol,
    /// No `..` or `...` separator outside quotes.
    MissingDots { text: String },
    /// The bounds were read but do not form an interval.
    Interval(IntervalError),
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralError::Empty => write!(f, "empty literal"),
            LiteralError::Unterminated { text } => write!(f, "unterminated string: {text}"),
            LiteralError::EmptySymbol => write!(f, "symbol needs a name"),
            LiteralError::MissingDots { text } => {
                write!(f, "expected `lower..upper` or `lower...upper`, got {text}")
            }
            LiteralError::Interval(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for LiteralError {}

impl From<IntervalError> for LiteralError {
    fn from(err: IntervalError) -> Self {
        LiteralError::Interval(err)
    }
}

impl Value {
    /// Read a single value literal.
    pub fn parse_literal(text: &str) -> Result<Value, LiteralError> {
        let text = text.trim();
        match text {
            "" => return Err(LiteralError::Empty),
            "nil" => return Ok(Value::nil()),
            "true" => return Ok(Value::bool(true)),
            "false" => return Ok(Value::bool(false)),
            _ => {}
        }
        if let Some(quote @ ('\'' | '"')) = text.chars().next() {
            return text[1..]
                .strip_suffix(quote)
                .map(Value::string)
                .ok_or_else(|| LiteralError::Unterminated {
                    text: text.to_string(),
                });
        }
        if let Some(name) = text.strip_prefix(':') {
            if name.is_empty() {
                return Err(LiteralError::EmptySymbol);
            }
            return Ok(Value::symbol(name));
        }
        if looks_numeric(text) {
            if let Ok(n) = text.parse::<i64>() {
                return Ok(Value::int(n));
            }
            if let Ok(f) = text.parse::<f64>() {
                return Ok(Value::float(f));
            }
        }
        Ok(Value::string(text))
    }
}

/// Read `lower..upper` or `lower...upper`.
///
/// The first run of dots outside quotes separates the bounds; three dots
/// make the interval exclusive.
pub fn parse_interval(text: &str) -> Result<Interval<Value>, LiteralError> {
    let (at, exclusive) = find_dots(text).ok_or_else(|| LiteralError::MissingDots {
        text: text.trim().to_string(),
    })?;
    let width = if exclusive { 3 } else { 2 };
    let lower = Value::parse_literal(&text[..at])?;
    let upper = Value::parse_literal(&text[at + width..])?;
    tracing::debug!(
        lower = %lower.inspect(),
        upper = %upper.inspect(),
        exclusive,
        "parsed interval literal"
    );
    Ok(Interval::new(lower, upper, exclusive)?)
}

/// Byte offset of the separator and whether it is exclusive.
fn find_dots(text: &str) -> Option<(usize, bool)> {
    let bytes = text.as_bytes();
    let mut quote = None;
    let mut i = 0;
    while i < bytes.len() {
        match (quote, bytes[i]) {
            (None, q @ (b'\'' | b'"')) => quote = Some(q),
            (Some(q), b) if b == q => quote = None,
            // A lone dot belongs to a float ("1.5..2").
            (None, b'.') if bytes.get(i + 1) == Some(&b'.') => {
                return Some((i, bytes.get(i + 2) == Some(&b'.')));
            }
            _ => {}
        }
        i += 1;
    }
    None
}

fn looks_numeric(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    digits.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
