use thiserror::Error;

/// Reasons an initial-value problem definition is rejected.
///
/// Raised before any mesh, step size, or solution is computed.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidArgument {
    /// The derivative is not a function of `(t, y)`.
    #[error("f must be a callable function of (t, y)")]
    NotCallable,

    /// A bound or the initial value is not a finite real number.
    #[error("{name} must be a real number")]
    NotANumber { name: &'static str },

    /// The interval is empty or reversed.
    #[error("t_start must be less than t_end (got t_start = {t_start}, t_end = {t_end})")]
    RangeViolation { t_start: f64, t_end: f64 },

    /// The step count is not a positive integer.
    #[error("num_steps must be a positive integer")]
    InvalidStepCount,
}
