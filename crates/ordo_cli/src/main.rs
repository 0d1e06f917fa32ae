//! Ordo CLI
//!
//! Evaluate interval queries from the command line:
//!
//! ```text
//! ordo 1...10 --step=3
//! ordo "'a'..'zz'" --last=2
//! ```

mod commands;
mod config;

use std::sync::Once;

use config::CliConfig;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing. Safe to call multiple times.
///
/// Enable with `ORDO_LOG=debug` (falls back to `RUST_LOG`).
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let filter =
            EnvFilter::try_from_env("ORDO_LOG").or_else(|_| EnvFilter::try_from_default_env());
        // Only initialize if a filter is configured
        if let Ok(filter) = filter {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return;
    }

    let config = match CliConfig::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    match commands::run(&config) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: ordo <interval> [options]");
    eprintln!();
    eprintln!("Intervals:");
    eprintln!("  1..10  1...10  0.5..2.5  'a'..'zz'  :a..:e");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --step=<n>          Every n-th element (integer or float)");
    eprintln!("  --first=<n>         First n elements");
    eprintln!("  --last=<n>          Last n elements");
    eprintln!("  --cover=<value>     Whether the value lies between the bounds");
    eprintln!("  --member=<value>    Whether the value is an element");
    eprintln!("  --min, --max        Smallest or largest element");
    eprintln!("  --inspect           Show the interval and its domain");
    eprintln!("  --offsets=<len>     Span over a sequence of <len> elements");
    eprintln!("  --policy=<policy>   lenient (default), strict or truncate");
    eprintln!("  --limit=<n>         Print at most n elements (default: 1000)");
    eprintln!();
    eprintln!("Set ORDO_LOG=debug to trace strategy selection.");
}
