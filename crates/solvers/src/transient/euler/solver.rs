use euler1d_core::{Derivative, ProblemSpec};
use log::debug;

use super::{Error, Solution, Status, calc_step_size, create_mesh, march};

/// A forward Euler solver that computes its result at construction.
///
/// Construction validates and freezes the problem, then computes the mesh,
/// the step size, and the solution, in that order. A constructed solver is
/// immutable: every accessor returns the values computed once in
/// [`EulerSolver::new`].
///
/// # Example
///
/// ```
/// use euler1d_solvers::transient::euler::EulerSolver;
///
/// let solver = EulerSolver::try_new(|t: f64, y: f64| -y + t.cos(), 0.0, 5.0, 1.0, 10).unwrap();
///
/// assert_eq!(solver.mesh().len(), 11);
/// assert_eq!(solver.solution()[0], 1.0);
/// assert_eq!(solver.step_size(), 0.5);
/// ```
pub struct EulerSolver<F> {
    problem: ProblemSpec<F>,
    mesh: Vec<f64>,
    step_size: f64,
    solution: Vec<f64>,
}

impl<F: Derivative> EulerSolver<F> {
    /// Builds a solver for an already-validated problem.
    ///
    /// # Errors
    ///
    /// Returns the derivative's error unchanged if any evaluation fails.
    pub fn new(problem: ProblemSpec<F>) -> Result<Self, F::Error> {
        let mesh = create_mesh(&problem);
        let step_size = calc_step_size(&problem);
        let (_, solution) = march(problem.derivative(), &mesh, step_size, problem.y_0(), ())?;
        debug!(
            "solved {} Euler steps, y({}) = {}",
            problem.num_steps(),
            problem.t_end(),
            solution[problem.num_steps()]
        );

        Ok(Self {
            problem,
            mesh,
            step_size,
            solution,
        })
    }

    /// Validates raw inputs and builds a solver.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if the inputs do not form a valid problem
    ///   (see [`ProblemSpec::new`])
    /// - [`Error::Derivative`] if any derivative evaluation fails
    pub fn try_new(
        derivative: F,
        t_start: f64,
        t_end: f64,
        y_0: f64,
        num_steps: usize,
    ) -> Result<Self, Error<F::Error>> {
        let problem = ProblemSpec::new(derivative, t_start, t_end, y_0, num_steps)?;
        Self::new(problem).map_err(Error::Derivative)
    }

    /// Recomputes the solution over the frozen mesh.
    ///
    /// The result is bit-identical to [`EulerSolver::solution`] for any
    /// deterministic derivative.
    ///
    /// # Errors
    ///
    /// Returns the derivative's error unchanged if any evaluation fails.
    pub fn solve(&self) -> Result<Vec<f64>, F::Error> {
        march(
            self.problem.derivative(),
            &self.mesh,
            self.step_size,
            self.problem.y_0(),
            (),
        )
        .map(|(_, values)| values)
    }
}

impl<F> EulerSolver<F> {
    /// Rebuilds the mesh from the frozen problem.
    #[must_use]
    pub fn create_mesh(&self) -> Vec<f64> {
        create_mesh(&self.problem)
    }

    /// Recomputes the step size from the frozen problem.
    #[must_use]
    pub fn calc_step_size(&self) -> f64 {
        calc_step_size(&self.problem)
    }

    /// Returns the validated problem.
    pub fn problem(&self) -> &ProblemSpec<F> {
        &self.problem
    }

    /// Returns the mesh computed at construction.
    pub fn mesh(&self) -> &[f64] {
        &self.mesh
    }

    /// Returns the step size computed at construction.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the solution computed at construction.
    pub fn solution(&self) -> &[f64] {
        &self.solution
    }

    /// Returns the number of Euler steps.
    #[must_use]
    pub fn num_steps(&self) -> usize {
        self.problem.num_steps()
    }

    /// Returns an owned [`Solution`] for the exporters and plotters.
    #[must_use]
    pub fn to_solution(&self) -> Solution {
        Solution {
            status: Status::Complete,
            mesh: self.mesh.clone(),
            values: self.solution.clone(),
            step_size: self.step_size,
            steps: self.num_steps(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;
    use euler1d_core::{Fallible, InvalidArgument};

    fn forced_decay(t: f64, y: f64) -> f64 {
        -y + t.cos()
    }

    fn solver() -> EulerSolver<fn(f64, f64) -> f64> {
        EulerSolver::try_new(forced_decay as fn(f64, f64) -> f64, 0.0, 5.0, 1.0, 10)
            .expect("valid problem")
    }

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("refused")]
    struct Refused;

    #[test]
    fn create_mesh_matches_stored_mesh() {
        let solver = solver();
        let mesh = solver.create_mesh();

        assert_eq!(mesh.len(), solver.num_steps() + 1);
        assert_eq!(mesh[0], solver.problem().t_start());
        assert_relative_eq!(
            mesh[solver.num_steps()],
            solver.problem().t_start() + solver.calc_step_size() * solver.num_steps() as f64
        );
        assert_eq!(mesh, solver.mesh());
    }

    #[test]
    fn calc_step_size_matches_formula() {
        let solver = solver();
        let expected = (solver.problem().t_end() - solver.problem().t_start())
            / solver.num_steps() as f64;

        assert_eq!(solver.calc_step_size(), expected);
        assert_eq!(solver.step_size(), expected);
    }

    #[test]
    fn solution_has_one_value_per_mesh_point() {
        let solver = solver();

        assert_eq!(solver.solution().len(), solver.num_steps() + 1);
        assert_eq!(solver.solution().len(), solver.mesh().len());
        assert_eq!(solver.solution()[0], solver.problem().y_0());
    }

    #[test]
    fn solve_is_idempotent() {
        let solver = solver();

        let first = solver.solve().unwrap();
        let second = solver.solve().unwrap();

        assert_eq!(first, solver.solution());
        assert_eq!(
            first.iter().map(|y| y.to_bits()).collect::<Vec<_>>(),
            second.iter().map(|y| y.to_bits()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn manual_euler_steps() {
        let solver = EulerSolver::try_new(|_t: f64, y: f64| y, 0.0, 1.0, 1.0, 2).unwrap();
        let expected = [1.0, 1.5, 2.25];

        for (actual, expected) in solver.solve().unwrap().iter().zip(expected) {
            assert_relative_eq!(*actual, expected, max_relative = 1e-4);
        }
    }

    #[test]
    fn derivative_called_once_per_step_at_construction() {
        let calls = Cell::new(0_usize);
        let solver = EulerSolver::try_new(
            |_t: f64, y: f64| {
                calls.set(calls.get() + 1);
                -y
            },
            0.0,
            1.0,
            1.0,
            7,
        )
        .unwrap();

        assert_eq!(calls.get(), 7);
        solver.solve().unwrap();
        assert_eq!(calls.get(), 14);
    }

    #[test]
    fn rejects_reversed_interval() {
        let err = EulerSolver::try_new(forced_decay, 5.0, 0.0, 1.0, 10)
            .err()
            .expect("should fail");

        assert_eq!(
            err.invalid_argument(),
            Some(InvalidArgument::RangeViolation {
                t_start: 5.0,
                t_end: 0.0
            })
        );
    }

    #[test]
    fn rejects_zero_steps() {
        let err = EulerSolver::try_new(forced_decay, 0.0, 5.0, 1.0, 0)
            .err()
            .expect("should fail");

        assert_eq!(err.invalid_argument(), Some(InvalidArgument::InvalidStepCount));
    }

    #[test]
    fn rejects_nan_initial_value() {
        let err = EulerSolver::try_new(forced_decay, 0.0, 5.0, f64::NAN, 10)
            .err()
            .expect("should fail");

        assert_eq!(
            err.invalid_argument(),
            Some(InvalidArgument::NotANumber { name: "y_0" })
        );
    }

    #[test]
    fn derivative_failure_surfaces_at_construction() {
        let f = Fallible(|_t: f64, _y: f64| Err::<f64, _>(Refused));

        let err = EulerSolver::try_new(f, 0.0, 1.0, 1.0, 3).err().expect("should fail");

        assert!(matches!(err, Error::Derivative(Refused)));
    }

    #[test]
    fn to_solution_is_complete() {
        let solver = solver();
        let solution = solver.to_solution();

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 10);
        assert_eq!(solution.mesh, solver.mesh());
        assert_eq!(solution.values, solver.solution());
    }
}
