//! Log subscriber for the CLI.
//!
//! Logs go to stderr so they never mix with `dump` output. `RUST_LOG` takes
//! precedence over `-v`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    // A second init (tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .try_init();
}

pub fn default_directives(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,viewbind=debug,viewbind_compiler=debug",
        _ => "warn,viewbind=trace,viewbind_compiler=trace",
    }
}
