//! Command-line configuration.

use std::fmt;

use ordo_value::{OffsetPolicy, Stride, Value};

/// What to report about the interval.
#[derive(Clone, Debug, PartialEq)]
pub enum Query {
    /// Print the elements in order.
    Elements,
    /// Print every `n`-th element.
    Step(Stride),
    First(usize),
    Last(usize),
    /// `cover?` for a value literal.
    Cover(Value),
    /// `member?` for a value literal.
    Member(Value),
    Min,
    Max,
    /// Programmer-facing rendering of the interval.
    Inspect,
    /// Span over a sequence of the given length.
    Offsets { len: usize, policy: OffsetPolicy },
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq)]
pub struct CliConfig {
    /// Interval literal, e.g. `1...10` or `'a'..'e'`.
    pub interval: String,
    pub query: Query,
    /// Upper limit on printed elements.
    pub limit: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            interval: String::new(),
            query: Query::Elements,
            limit: 1000,
        }
    }
}

/// Bad command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    MissingInterval,
    UnknownFlag(String),
    BadNumber { flag: &'static str, text: String },
    BadValue { flag: &'static str, reason: String },
    BadPolicy(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingInterval => write!(f, "missing interval literal"),
            ConfigError::UnknownFlag(flag) => write!(f, "unknown option `{flag}`"),
            ConfigError::BadNumber { flag, text } => {
                write!(f, "--{flag} expects a number, got `{text}`")
            }
            ConfigError::BadValue { flag, reason } => write!(f, "--{flag}: {reason}"),
            ConfigError::BadPolicy(text) => write!(
                f,
                "unknown offset policy `{text}` (expected lenient, strict or truncate)"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl CliConfig {
    /// Parse the arguments after the program name.
    ///
    /// The last query flag wins; `--policy` only matters with `--offsets`.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let mut config = CliConfig::default();
        let mut interval = None;
        let mut policy = OffsetPolicy::default();

        for arg in args {
            if let Some(text) = arg.strip_prefix("--step=") {
                config.query = Query::Step(parse_stride(text)?);
            } else if let Some(text) = arg.strip_prefix("--first=") {
                config.query = Query::First(parse_count("first", text)?);
            } else if let Some(text) = arg.strip_prefix("--last=") {
                config.query = Query::Last(parse_count("last", text)?);
            } else if let Some(text) = arg.strip_prefix("--cover=") {
                config.query = Query::Cover(parse_value("cover", text)?);
            } else if let Some(text) = arg.strip_prefix("--member=") {
                config.query = Query::Member(parse_value("member", text)?);
            } else if let Some(text) = arg.strip_prefix("--offsets=") {
                config.query = Query::Offsets {
                    len: parse_count("offsets", text)?,
                    policy,
                };
            } else if let Some(text) = arg.strip_prefix("--policy=") {
                policy = parse_policy(text)?;
            } else if let Some(text) = arg.strip_prefix("--limit=") {
                config.limit = parse_count("limit", text)?;
            } else if arg == "--min" {
                config.query = Query::Min;
            } else if arg == "--max" {
                config.query = Query::Max;
            } else if arg == "--inspect" {
                config.query = Query::Inspect;
            } else if arg.starts_with("--") {
                return Err(ConfigError::UnknownFlag(arg.clone()));
            } else if interval.is_none() {
                interval = Some(arg.clone());
            } else {
                return Err(ConfigError::UnknownFlag(arg.clone()));
            }
        }

        if let Query::Offsets { policy: slot, .. } = &mut config.query {
            *slot = policy;
        }
        config.interval = interval.ok_or(ConfigError::MissingInterval)?;
        Ok(config)
    }
}

fn parse_count(flag: &'static str, text: &str) -> Result<usize, ConfigError> {
    text.parse().map_err(|_| ConfigError::BadNumber {
        flag,
        text: text.to_string(),
    })
}

fn parse_stride(text: &str) -> Result<Stride, ConfigError> {
    if let Ok(n) = text.parse::<i64>() {
        return Ok(Stride::Int(n));
    }
    text.parse::<f64>()
        .map(Stride::Float)
        .map_err(|_| ConfigError::BadNumber {
            flag: "step",
            text: text.to_string(),
        })
}

fn parse_value(flag: &'static str, text: &str) -> Result<Value, ConfigError> {
    Value::parse_literal(text).map_err(|err| ConfigError::BadValue {
        flag,
        reason: err.to_string(),
    })
}

fn parse_policy(text: &str) -> Result<OffsetPolicy, ConfigError> {
    match text {
        "lenient" => Ok(OffsetPolicy::Lenient),
        "strict" => Ok(OffsetPolicy::Strict),
        "truncate" => Ok(OffsetPolicy::Truncate),
        _ => Err(ConfigError::BadPolicy(text.to_string())),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
