//! # maplaser-runner
//!
//! Command-line front end for the map-to-laser rendering service: builds a map
//! request from arguments, submits it and waits for the generated SVG.

pub mod cli;
pub mod commands;
pub mod error;
pub mod settings;

pub use cli::Cli;
pub use commands::run;
pub use error::{RunnerError, RunnerResult};

use tracing_subscriber::EnvFilter;

/// Default log filter for a verbosity count, used when `RUST_LOG` is unset.
pub fn default_log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global tracing subscriber, logging to stderr.
pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
