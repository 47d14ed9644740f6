//! Command-line driver for forward-Euler integration of a scalar ODE.
//!
//! The `euler1d` binary reads a TOML configuration (see [`config`]), solves
//! `dy/dt = f(t, y)` with forward Euler, prints a table, and writes the
//! solution to CSV. With the `plot` feature it can also open a plot window.

pub mod app;
pub mod config;
pub mod logging;

pub use app::{RunError, run};
pub use config::{Config, ConfigError, OutputConfig, SolverOptions};

/// Configuration path used when none is given on the command line.
pub const DEFAULT_CONFIG: &str = "config.toml";
