use std::fmt;

use crate::{Derivative, InvalidArgument};

/// A validated scalar initial-value problem `dy/dt = f(t, y)`, `y(t_start) = y_0`.
///
/// The only way to obtain a `ProblemSpec` is [`ProblemSpec::new`], so every
/// instance satisfies:
///
/// - `t_start`, `t_end`, and `y_0` are finite
/// - `t_start < t_end`
/// - `num_steps >= 1`
///
/// The problem is immutable once constructed.
#[derive(Clone)]
pub struct ProblemSpec<F> {
    derivative: F,
    t_start: f64,
    t_end: f64,
    y_0: f64,
    num_steps: usize,
}

impl<F: Derivative> ProblemSpec<F> {
    /// Creates a problem after validating its inputs.
    ///
    /// Checks run in order and the first failure is returned: the bounds are
    /// finite, `t_start < t_end`, `num_steps` is positive, `y_0` is finite.
    ///
    /// # Errors
    ///
    /// - [`InvalidArgument::NotANumber`] if a bound or `y_0` is NaN or infinite
    /// - [`InvalidArgument::RangeViolation`] if `t_start >= t_end`
    /// - [`InvalidArgument::InvalidStepCount`] if `num_steps == 0`
    pub fn new(
        derivative: F,
        t_start: f64,
        t_end: f64,
        y_0: f64,
        num_steps: usize,
    ) -> Result<Self, InvalidArgument> {
        let t_start = finite("t_start", t_start)?;
        let t_end = finite("t_end", t_end)?;
        if t_start >= t_end {
            return Err(InvalidArgument::RangeViolation { t_start, t_end });
        }
        if num_steps == 0 {
            return Err(InvalidArgument::InvalidStepCount);
        }
        let y_0 = finite("y_0", y_0)?;

        Ok(Self {
            derivative,
            t_start,
            t_end,
            y_0,
            num_steps,
        })
    }
}

impl<F> ProblemSpec<F> {
    /// Returns the derivative `f(t, y)`.
    pub fn derivative(&self) -> &F {
        &self.derivative
    }

    /// Returns the start of the time interval.
    #[must_use]
    pub fn t_start(&self) -> f64 {
        self.t_start
    }

    /// Returns the end of the time interval.
    #[must_use]
    pub fn t_end(&self) -> f64 {
        self.t_end
    }

    /// Returns the initial value `y(t_start)`.
    #[must_use]
    pub fn y_0(&self) -> f64 {
        self.y_0
    }

    /// Returns the number of Euler steps.
    #[must_use]
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }
}

impl<F> fmt::Debug for ProblemSpec<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProblemSpec")
            .field("t_start", &self.t_start)
            .field("t_end", &self.t_end)
            .field("y_0", &self.y_0)
            .field("num_steps", &self.num_steps)
            .finish_non_exhaustive()
    }
}

fn finite(name: &'static str, value: f64) -> Result<f64, InvalidArgument> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidArgument::NotANumber { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(t: f64, y: f64) -> f64 {
        -y + t.cos()
    }

    #[test]
    fn accepts_valid_problem() {
        let problem = ProblemSpec::new(f, 0.0, 5.0, 1.0, 10).expect("valid problem");

        assert_eq!(problem.t_start(), 0.0);
        assert_eq!(problem.t_end(), 5.0);
        assert_eq!(problem.y_0(), 1.0);
        assert_eq!(problem.num_steps(), 10);
    }

    #[test]
    fn rejects_reversed_interval() {
        let err = ProblemSpec::new(f, 5.0, 0.0, 1.0, 10).unwrap_err();
        assert_eq!(
            err,
            InvalidArgument::RangeViolation {
                t_start: 5.0,
                t_end: 0.0
            }
        );
    }

    #[test]
    fn rejects_empty_interval() {
        let err = ProblemSpec::new(f, 1.0, 1.0, 1.0, 10).unwrap_err();
        assert!(matches!(err, InvalidArgument::RangeViolation { .. }));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        let err = ProblemSpec::new(f, f64::NAN, 5.0, 1.0, 10).unwrap_err();
        assert_eq!(err, InvalidArgument::NotANumber { name: "t_start" });

        let err = ProblemSpec::new(f, 0.0, f64::INFINITY, 1.0, 10).unwrap_err();
        assert_eq!(err, InvalidArgument::NotANumber { name: "t_end" });
    }

    #[test]
    fn rejects_zero_steps() {
        let err = ProblemSpec::new(f, 0.0, 5.0, 1.0, 0).unwrap_err();
        assert_eq!(err, InvalidArgument::InvalidStepCount);
    }

    #[test]
    fn rejects_non_finite_initial_value() {
        let err = ProblemSpec::new(f, 0.0, 5.0, f64::NAN, 10).unwrap_err();
        assert_eq!(err, InvalidArgument::NotANumber { name: "y_0" });
    }

    #[test]
    fn range_is_checked_before_step_count() {
        let err = ProblemSpec::new(f, 5.0, 0.0, 1.0, 0).unwrap_err();
        assert!(matches!(err, InvalidArgument::RangeViolation { .. }));
    }

    #[test]
    fn debug_omits_derivative() {
        let problem = ProblemSpec::new(f, 0.0, 1.0, 1.0, 2).unwrap();
        let text = format!("{problem:?}");
        assert!(text.starts_with("ProblemSpec { t_start: 0.0"));
        assert!(text.ends_with(".. }"));
    }
}
