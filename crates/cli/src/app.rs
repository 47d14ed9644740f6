use std::io;

use euler1d_core::Observer;
use euler1d_observers::{CsvExporter, ExportError, FiniteGuard, LogObserver, print_table};
use euler1d_solvers::transient::euler::{self, Action, Event, Solution, Status};
use log::{info, warn};
use thiserror::Error;

use crate::config::Config;

/// Errors that can occur after a configuration has been loaded.
#[derive(Debug, Error)]
pub enum RunError {
    /// The solution table could not be written to stdout.
    #[error("failed to print solution table: {0}")]
    Table(#[from] io::Error),

    /// The CSV export failed.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// The plot window could not be opened.
    #[cfg(feature = "plot")]
    #[error("failed to open plot window: {0}")]
    Plot(#[from] eframe::Error),
}

/// Solves the configured problem and writes the requested outputs.
///
/// Runs forward Euler with a [`LogObserver`] (and a [`FiniteGuard`] when
/// `stop_on_non_finite` is set), then prints the table, exports the CSV, and
/// plots, in that order.
///
/// # Errors
///
/// Returns a [`RunError`] if any output cannot be written.
pub fn run(config: &Config) -> Result<Solution, RunError> {
    let solution = solve(config);

    if config.output.print_table {
        print_table(&solution)?;
    }

    let csv_file = &config.output.csv_file;
    CsvExporter::new().export(&solution, csv_file)?;
    println!("Solution exported to `{}`", csv_file.display());

    if config.output.plot {
        plot(&solution)?;
    }

    Ok(solution)
}

/// Runs the observed Euler recurrence for the configured problem.
pub fn solve(config: &Config) -> Solution {
    let problem = &config.problem;
    info!(
        "solving dy/dt = {} on [{}, {}] with y_0 = {}, n = {}",
        problem.derivative(),
        problem.t_start(),
        problem.t_end(),
        problem.y_0(),
        problem.num_steps()
    );

    let mut logger = LogObserver::new(problem.num_steps()).every(config.solver.log_every);
    let mut guard = FiniteGuard::new();
    let stop_on_non_finite = config.solver.stop_on_non_finite;

    let result = euler::solve(problem, |event: &Event| {
        let _: Option<Action> = logger.observe(event);
        if stop_on_non_finite {
            guard.observe(event)
        } else {
            None
        }
    });
    let solution = match result {
        Ok(solution) => solution,
        Err(never) => match never {},
    };

    if solution.status == Status::Complete && solution.values.iter().any(|y| !y.is_finite()) {
        warn!("solution contains non-finite values; consider a larger step count");
    }

    solution
}

#[cfg(feature = "plot")]
fn plot(solution: &Solution) -> Result<(), RunError> {
    euler1d_observers::show_solution(solution)?;
    Ok(())
}

#[cfg(not(feature = "plot"))]
#[allow(clippy::unnecessary_wraps)]
fn plot(_solution: &Solution) -> Result<(), RunError> {
    warn!("plot requested, but euler1d was built without the `plot` feature");
    Ok(())
}
