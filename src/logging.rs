//! Tracing subscriber setup for the CLI.
//!
//! `RUST_LOG` takes precedence; otherwise `--verbose` enables debug output for
//! this crate and everything else stays at `warn`. Logs go to stderr so command
//! output on stdout stays parseable.

use std::io;

use tracing_subscriber::EnvFilter;

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        concat!(env!("CARGO_CRATE_NAME"), "=debug")
    } else {
        "warn"
    }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let ansi = std::env::var_os("NO_COLOR").is_none();

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .try_init();
}
