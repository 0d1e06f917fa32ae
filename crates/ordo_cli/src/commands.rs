//! Query execution; each command renders its answer as output lines.

use std::fmt;

use ordo_value::{parse_interval, Interval, IntervalError, LiteralError, Value};

use crate::config::{CliConfig, Query};

/// Failure while answering a query.
#[derive(Debug)]
pub enum CommandError {
    Literal(LiteralError),
    Interval(IntervalError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Literal(err) => write!(f, "{err}"),
            CommandError::Interval(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<LiteralError> for CommandError {
    fn from(err: LiteralError) -> Self {
        CommandError::Literal(err)
    }
}

impl From<IntervalError> for CommandError {
    fn from(err: IntervalError) -> Self {
        CommandError::Interval(err)
    }
}

/// Parse the interval and answer the configured query.
pub fn run(config: &CliConfig) -> Result<Vec<String>, CommandError> {
    let interval = parse_interval(&config.interval)?;
    tracing::info!(interval = %interval.inspect(), domain = %interval.domain(), "running query");

    let lines = match &config.query {
        Query::Elements => render(interval.iter()?.take(config.limit)),
        Query::Step(stride) => render(interval.step(*stride)?.take(config.limit)),
        Query::First(count) => render(interval.first_n((*count).min(config.limit))?),
        Query::Last(count) => render(interval.last_n(*count)?.into_iter().take(config.limit)),
        Query::Cover(value) => vec![interval.cover(value).to_string()],
        Query::Member(value) => vec![interval.member(value).to_string()],
        Query::Min => vec![bound_or_nil(interval.min()?)],
        Query::Max => vec![bound_or_nil(interval.max()?)],
        Query::Inspect => vec![describe(&interval)],
        Query::Offsets { len, policy } => vec![match interval.offsets(*len, *policy)? {
            Some(span) => format!("start={} len={}", span.start, span.len),
            None => "nil".to_string(),
        }],
    };
    Ok(lines)
}

fn render(values: impl IntoIterator<Item = Value>) -> Vec<String> {
    values.into_iter().map(|value| value.inspect()).collect()
}

fn bound_or_nil(value: Option<Value>) -> String {
    value.map_or_else(|| "nil".to_string(), |value| value.inspect())
}

fn describe(interval: &Interval<Value>) -> String {
    format!(
        "{} ({} domain, {})",
        interval.inspect(),
        interval.domain(),
        if interval.is_exclusive() {
            "exclusive"
        } else {
            "inclusive"
        }
    )
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
