use pretty_assertions::assert_eq;

use super::*;

fn parse(args: &[&str]) -> Result<CliConfig, ConfigError> {
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    CliConfig::from_args(&args)
}

#[test]
fn interval_alone_lists_elements() {
    let config = parse(&["1..5"]).unwrap();
    assert_eq!(config.interval, "1..5");
    assert_eq!(config.query, Query::Elements);
    assert_eq!(config.limit, 1000);
}

#[test]
fn flags_may_precede_the_interval() {
    let config = parse(&["--limit=3", "--step=2", "1..20"]).unwrap();
    assert_eq!(config.query, Query::Step(Stride::Int(2)));
    assert_eq!(config.limit, 3);
    assert_eq!(config.interval, "1..20");
}

#[test]
fn float_steps() {
    let config = parse(&["0.0..1.0", "--step=0.25"]).unwrap();
    assert_eq!(config.query, Query::Step(Stride::Float(0.25)));
}

#[test]
fn last_query_flag_wins() {
    let config = parse(&["1..5", "--min", "--max"]).unwrap();
    assert_eq!(config.query, Query::Max);
}

#[test]
fn policy_applies_to_offsets_in_any_order() {
    let config = parse(&["--offsets=10", "-3..-1", "--policy=strict"]).unwrap();
    assert_eq!(
        config.query,
        Query::Offsets {
            len: 10,
            policy: OffsetPolicy::Strict
        }
    );
}

#[test]
fn value_flags_read_literals() {
    let config = parse(&["'a'..'e'", "--member=c"]).unwrap();
    let Query::Member(value) = config.query else {
        panic!("expected member query");
    };
    assert!(value.eql(&Value::string("c")));
}

#[test]
fn errors() {
    assert_eq!(parse(&[]), Err(ConfigError::MissingInterval));
    assert_eq!(
        parse(&["1..2", "--frobnicate"]),
        Err(ConfigError::UnknownFlag("--frobnicate".to_string()))
    );
    assert_eq!(
        parse(&["1..2", "--first=x"]).unwrap_err().to_string(),
        "--first expects a number, got `x`"
    );
    assert_eq!(
        parse(&["1..2", "--member=:"]).unwrap_err().to_string(),
        "--member: symbol needs a name"
    );
    assert!(matches!(
        parse(&["1..2", "--policy=loose"]),
        Err(ConfigError::BadPolicy(_))
    ));
    assert!(matches!(parse(&["1..2", "3..4"]), Err(ConfigError::UnknownFlag(_))));
}
