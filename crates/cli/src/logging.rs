//! Terminal logging for the `euler1d` binary.
//!
//! Library crates log through the `log` facade; the binary installs a
//! [`simplelog::TermLogger`] on stderr so stdout stays free for the solution
//! table.

use std::{env, str::FromStr};

use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "EULER1D_LOG";

/// Level used when [`LOG_ENV`] is unset or unrecognized.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Parses a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`),
/// ignoring case and surrounding whitespace.
#[must_use]
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(name.trim()).ok()
}

/// Reads the level from [`LOG_ENV`], falling back to [`DEFAULT_LEVEL`].
#[must_use]
pub fn level_from_env() -> LevelFilter {
    env::var(LOG_ENV)
        .ok()
        .and_then(|value| parse_level(&value))
        .unwrap_or(DEFAULT_LEVEL)
}

/// Installs the global terminal logger at `level`.
///
/// # Errors
///
/// Returns an error if a global logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();
    TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto)
}
