//! Forward Euler solver for scalar initial-value problems.
//!
//! This module steps `dy/dt = f(t, y)` forward on a uniform mesh using
//! explicit Euler:
//!
//! ```text
//! y_{k+1} = y_k + h * f(t_k, y_k)
//! ```
//!
//! Two entry points share the same recurrence:
//!
//! - [`solve`] / [`solve_unobserved`]: a pure function of a [`ProblemSpec`]
//!   that returns a [`Solution`], optionally emitting an [`Event`] per point
//! - [`EulerSolver`]: validates its inputs and computes mesh, step size, and
//!   solution eagerly at construction
//!
//! # Example
//!
//! ```
//! use euler1d_core::ProblemSpec;
//! use euler1d_solvers::transient::euler;
//!
//! let problem = ProblemSpec::new(|_t: f64, y: f64| y, 0.0, 1.0, 1.0, 2).unwrap();
//! let solution = euler::solve_unobserved(&problem).unwrap();
//!
//! assert_eq!(solution.values, vec![1.0, 1.5, 2.25]);
//! ```

mod action;
mod error;
mod event;
mod mesh;
mod solution;
mod solver;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use mesh::{calc_step_size, create_mesh};
pub use solution::{Solution, Status};
pub use solver::EulerSolver;

use euler1d_core::{Derivative, Observer, ProblemSpec};
use log::debug;

/// Integrates a problem using forward Euler.
///
/// # Algorithm
///
/// 1. Build the inclusive uniform mesh and step size `h`.
/// 2. Emit step 0 with the initial value.
/// 3. For each step `k`:
///    - Evaluate `f(t_k, y_k)` at the current mesh time and value.
///    - Step the value forward: `y_{k+1} = y_k + h * f(t_k, y_k)`.
///    - Emit an [`Event`] for `(t_{k+1}, y_{k+1})`.
///    - If the observer returns `StopEarly`, terminate.
/// 4. Return the solution with every computed point.
///
/// The derivative is evaluated exactly once per completed step.
///
/// # Errors
///
/// Returns the derivative's error unchanged if any evaluation fails.
pub fn solve<F, Obs>(problem: &ProblemSpec<F>, observer: Obs) -> Result<Solution, F::Error>
where
    F: Derivative,
    Obs: Observer<Event, Action>,
{
    let mut mesh = create_mesh(problem);
    let step_size = calc_step_size(problem);
    debug!(
        "forward Euler on [{}, {}]: n = {}, h = {}",
        problem.t_start(),
        problem.t_end(),
        problem.num_steps(),
        step_size
    );

    let (status, values) = march(
        problem.derivative(),
        &mesh,
        step_size,
        problem.y_0(),
        observer,
    )?;

    let steps = values.len() - 1;
    if status == Status::StoppedByObserver {
        debug!("forward Euler stopped by observer after {steps} steps");
        mesh.truncate(values.len());
    }

    Ok(Solution {
        status,
        mesh,
        values,
        step_size,
        steps,
    })
}

/// Integrates a problem using forward Euler without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns the derivative's error unchanged if any evaluation fails.
pub fn solve_unobserved<F>(problem: &ProblemSpec<F>) -> Result<Solution, F::Error>
where
    F: Derivative,
{
    solve(problem, ())
}

/// Runs the Euler recurrence over `mesh`, starting from `y_0`.
///
/// Returns the termination status and the values computed so far.
fn march<D, Obs>(
    derivative: &D,
    mesh: &[f64],
    step_size: f64,
    y_0: f64,
    mut observer: Obs,
) -> Result<(Status, Vec<f64>), D::Error>
where
    D: Derivative,
    Obs: Observer<Event, Action>,
{
    let mut values = Vec::with_capacity(mesh.len());
    values.push(y_0);

    let event = Event {
        step: 0,
        t: mesh[0],
        y: y_0,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok((Status::StoppedByObserver, values));
    }

    let mut y = y_0;
    for (k, pair) in mesh.windows(2).enumerate() {
        let slope = derivative.evaluate(pair[0], y)?;
        y += step_size * slope;
        values.push(y);

        let event = Event {
            step: k + 1,
            t: pair[1],
            y,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok((Status::StoppedByObserver, values));
        }
    }

    Ok((Status::Complete, values))
}
