use euler1d_core::ProblemSpec;

/// Returns the uniform step size `h = (t_end - t_start) / num_steps`.
#[must_use]
pub fn calc_step_size<F>(problem: &ProblemSpec<F>) -> f64 {
    (problem.t_end() - problem.t_start()) / problem.num_steps() as f64
}

/// Builds the inclusive uniform mesh over `[t_start, t_end]`.
///
/// The mesh has `num_steps + 1` points. Point `i` is `t_start + i * h` for
/// every interior index, the first point is exactly `t_start`, and the last
/// point is pinned to exactly `t_end` so rounding in `i * h` never shifts the
/// endpoint.
#[must_use]
pub fn create_mesh<F>(problem: &ProblemSpec<F>) -> Vec<f64> {
    let n = problem.num_steps();
    let t_start = problem.t_start();
    let h = calc_step_size(problem);

    let mut mesh: Vec<f64> = (0..=n).map(|i| t_start + i as f64 * h).collect();
    mesh[n] = problem.t_end();
    mesh
}
