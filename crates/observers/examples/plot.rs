//! Interactive comparison of forward Euler against an exact solution.
//!
//! Integrates `dy/dt = cos(t) - y` with `y(0) = 1` on `[0, 10]` and overlays
//! the exact solution `y(t) = (cos t + sin t + e^-t) / 2`.
//!
//! # Usage
//!
//! ```text
//! cargo run -p euler1d-observers --example plot --features plot
//! cargo run -p euler1d-observers --example plot --features plot -- 8
//! ```
//!
//! The optional argument is the step count (default 20). Fewer steps make the
//! lag of the explicit method easy to see.

use std::error::Error;

use euler1d_core::ProblemSpec;
use euler1d_observers::{PlotObserver, ShowConfig};
use euler1d_solvers::transient::euler;

fn exact(t: f64) -> f64 {
    (t.cos() + t.sin() + (-t).exp()) / 2.0
}

fn main() -> Result<(), Box<dyn Error>> {
    let steps = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<usize>()?,
        None => 20,
    };

    let problem = ProblemSpec::new(|t: f64, y: f64| t.cos() - y, 0.0, 10.0, 1.0, steps)?;

    let mut obs = PlotObserver::<2>::new(["Euler", "Exact"]);
    let solution = euler::solve(&problem, |event: &euler::Event| {
        obs.record(event.t, [Some(event.y), None]);
        None
    })?;

    for i in 0_u32..=500 {
        let t = 10.0 * f64::from(i) / 500.0;
        obs.record(t, [None, Some(exact(t))]);
    }

    let (t_end, y_end) = solution.last().unwrap_or((0.0, 1.0));
    println!(
        "h = {}, y({t_end}) = {y_end:.5} (exact {:.5})",
        solution.step_size,
        exact(t_end)
    );

    obs.show(
        ShowConfig::new()
            .title(format!("Euler vs. exact: cos(t) - y, n = {steps}"))
            .axes("t", "y(t)")
            .legend(),
    )?;

    Ok(())
}
