//! Run configuration loaded from TOML.
//!
//! The file has four sections:
//!
//! ```toml
//! [mesh]
//! n = 100
//! domain_start = 0.0
//! domain_end = 5.0
//!
//! [initial_conditions]
//! y_0 = 1.0
//!
//! [ode_function]
//! expression = "-y + cos(t)"
//!
//! [output]            # optional, all keys default
//! csv_file = "solution.csv"
//! plot = false
//! print_table = true
//!
//! [solver]            # optional, all keys default
//! stop_on_non_finite = false
//! log_every = 1
//! ```
//!
//! The mesh section may also be spelled `[mesh_1D]` or `[mesh_1_d]`, the
//! names used by older configuration files.
//!
//! TOML values are dynamically typed, so this is where wrong value types are
//! caught and mapped onto [`InvalidArgument`]. Checks run in the same order
//! as [`ProblemSpec::new`], with the derivative checked first.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use euler1d_core::{InvalidArgument, ProblemSpec};
use euler1d_expr::{ExprError, Expression};
use log::debug;
use serde::Deserialize;
use thiserror::Error;
use toml::{Table, Value};

/// Errors that can occur while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The text is not valid TOML, or an optional section has the wrong shape.
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// A required section or key is absent.
    #[error("missing required key `{key}`")]
    Missing { key: &'static str },

    /// A value does not define a valid problem.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// The derivative expression could not be parsed.
    #[error("invalid ode_function.expression: {0}")]
    Expression(#[from] ExprError),
}

/// Output options from the optional `[output]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Destination of the `t,y(t)` CSV export.
    pub csv_file: PathBuf,

    /// Whether to open a plot window after solving.
    pub plot: bool,

    /// Whether to print the `t = .., y = ..` table to stdout.
    pub print_table: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_file: PathBuf::from("solution.csv"),
            plot: false,
            print_table: true,
        }
    }
}

/// Solver options from the optional `[solver]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverOptions {
    /// Stop at the first NaN or infinite value instead of stepping on.
    pub stop_on_non_finite: bool,

    /// Log every `log_every`-th step at `debug` level.
    pub log_every: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            stop_on_non_finite: false,
            log_every: 1,
        }
    }
}

/// A fully validated run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub problem: ProblemSpec<Expression>,
    pub output: OutputConfig,
    pub solver: SolverOptions,
}

impl Config {
    /// Reads and validates the configuration at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise any
    /// error from [`Config::parse`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        debug!("loaded configuration from {}", path.display());
        Self::parse(&text)
    }

    /// Parses and validates configuration text.
    ///
    /// Checks run in order and the first failure is returned:
    ///
    /// 1. `ode_function.expression` is a string that parses
    /// 2. `mesh.domain_start` and `mesh.domain_end` are finite numbers
    /// 3. `domain_start < domain_end`
    /// 4. `mesh.n` is a positive integer
    /// 5. `initial_conditions.y_0` is a finite number
    ///
    /// Integers are accepted wherever a real number is expected.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Toml`] if the text is not valid TOML, or `[output]`
    ///   or `[solver]` holds unknown keys or wrong types
    /// - [`ConfigError::Missing`] if a required section or key is absent
    /// - [`ConfigError::InvalidArgument`] for values of the wrong type or range
    /// - [`ConfigError::Expression`] if the expression does not parse
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let table: Table = text.parse()?;

        let ode = section(&table, "ode_function")?;
        let expression = match lookup(ode, "expression", "ode_function.expression")? {
            Value::String(source) => Expression::parse(source)?,
            _ => return Err(InvalidArgument::NotCallable.into()),
        };

        let mesh = mesh_section(&table)?;
        let t_start = real(
            lookup(mesh, "domain_start", "mesh.domain_start")?,
            "t_start",
        )?;
        let t_end = real(lookup(mesh, "domain_end", "mesh.domain_end")?, "t_end")?;
        if t_start >= t_end {
            return Err(InvalidArgument::RangeViolation { t_start, t_end }.into());
        }
        let num_steps = step_count(lookup(mesh, "n", "mesh.n")?)?;

        let initial = section(&table, "initial_conditions")?;
        let y_0 = real(lookup(initial, "y_0", "initial_conditions.y_0")?, "y_0")?;

        let output = match table.get("output") {
            Some(value) => value.clone().try_into()?,
            None => OutputConfig::default(),
        };
        let solver = match table.get("solver") {
            Some(value) => value.clone().try_into()?,
            None => SolverOptions::default(),
        };

        let problem = ProblemSpec::new(expression, t_start, t_end, y_0, num_steps)?;
        debug!("configured {problem:?} with f(t, y) = {}", problem.derivative());

        Ok(Self {
            problem,
            output,
            solver,
        })
    }
}

fn section<'a>(table: &'a Table, key: &'static str) -> Result<&'a Table, ConfigError> {
    match table.get(key) {
        Some(Value::Table(section)) => Ok(section),
        _ => Err(ConfigError::Missing { key }),
    }
}

/// Section names accepted for `[mesh]`, in lookup order.
const MESH_SECTIONS: [&str; 3] = ["mesh", "mesh_1D", "mesh_1_d"];

fn mesh_section(table: &Table) -> Result<&Table, ConfigError> {
    MESH_SECTIONS
        .iter()
        .find_map(|name| match table.get(*name) {
            Some(Value::Table(section)) => Some(section),
            _ => None,
        })
        .ok_or(ConfigError::Missing { key: "mesh" })
}

fn lookup<'a>(
    section: &'a Table,
    key: &str,
    qualified: &'static str,
) -> Result<&'a Value, ConfigError> {
    section
        .get(key)
        .ok_or(ConfigError::Missing { key: qualified })
}

/// Accepts finite floats and integers; everything else is not a number.
#[allow(clippy::cast_precision_loss)]
fn real(value: &Value, name: &'static str) -> Result<f64, InvalidArgument> {
    let number = match value {
        Value::Float(x) => *x,
        Value::Integer(i) => *i as f64,
        _ => return Err(InvalidArgument::NotANumber { name }),
    };
    if number.is_finite() {
        Ok(number)
    } else {
        Err(InvalidArgument::NotANumber { name })
    }
}

/// Accepts positive integers only.
fn step_count(value: &Value) -> Result<usize, InvalidArgument> {
    match value {
        Value::Integer(i) if *i > 0 => {
            usize::try_from(*i).map_err(|_| InvalidArgument::InvalidStepCount)
        }
        _ => Err(InvalidArgument::InvalidStepCount),
    }
}
