use euler1d_core::Observer;
use log::warn;

use crate::traits::{CanStopEarly, HasPoint};

/// Stops integration as soon as the solution stops being finite.
///
/// Forward Euler diverges silently when the step size is too large for a
/// stiff derivative; once a value is NaN or infinite every later value is
/// too. The guard logs a warning and returns a stop action at the first such
/// point, so the returned solution ends with it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FiniteGuard {
    tripped_at: Option<usize>,
}

impl FiniteGuard {
    /// Creates a guard that has not tripped.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the step at which a non-finite value was seen, if any.
    #[must_use]
    pub fn tripped_at(&self) -> Option<usize> {
        self.tripped_at
    }
}

impl<E: HasPoint, A: CanStopEarly> Observer<E, A> for FiniteGuard {
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.y().is_finite() {
            return None;
        }
        warn!(
            "solution is not finite at step {} (t = {}, y = {}); stopping",
            event.step(),
            event.t(),
            event.y()
        );
        self.tripped_at = Some(event.step());
        Some(A::stop_early())
    }
}

/// Allows `&mut FiniteGuard` to be passed to solvers that take an observer by
/// value, so [`FiniteGuard::tripped_at`] can be read after the solve.
impl<E: HasPoint, A: CanStopEarly> Observer<E, A> for &mut FiniteGuard {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use euler1d_core::ProblemSpec;
    use euler1d_solvers::transient::euler::{self, Status};

    #[test]
    fn passes_finite_solutions_through() {
        let problem = ProblemSpec::new(|_t: f64, y: f64| -y, 0.0, 1.0, 1.0, 10).unwrap();
        let mut guard = FiniteGuard::new();

        let solution = euler::solve(&problem, &mut guard).unwrap();

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(guard.tripped_at(), None);
    }

    #[test]
    fn stops_at_first_non_finite_value() {
        // A steep quadratic derivative overflows f64 within a few steps.
        let problem =
            ProblemSpec::new(|_t: f64, y: f64| y * y * 1e200, 0.0, 1.0, 1.0, 50).unwrap();
        let mut guard = FiniteGuard::new();

        let solution = euler::solve(&problem, &mut guard).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        let step = guard.tripped_at().expect("guard should trip");
        assert_eq!(solution.steps, step);
        assert!(!solution.values[step].is_finite());
        assert!(solution.values[..step].iter().all(|y| y.is_finite()));
    }
}
