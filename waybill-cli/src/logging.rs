//! Logger initialisation for the `waybill` binary.
//!
//! Library crates log through the `log` facade; the binary routes records to
//! stderr so stdout carries only JSON.

use std::io;

use env_logger::{Builder, Env, Target, WriteStyle};
use log::LevelFilter;

/// Environment variable holding the log filter, e.g. `debug` or
/// `waybill_solver_greedy=debug`.
pub const LOG_ENV: &str = "WAYBILL_LOG";

/// Install the global logger.
///
/// The level defaults to `warn` and is overridden by [`LOG_ENV`].
///
/// # Errors
/// Fails when a global logger is already installed.
pub fn init() -> io::Result<()> {
    builder().try_init().map_err(io::Error::other)
}

fn builder() -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .parse_env(Env::new().filter(LOG_ENV))
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format_timestamp(None);
    builder
}
