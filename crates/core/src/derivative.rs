use std::convert::Infallible;

/// The right-hand side `f(t, y)` of a scalar ODE `dy/dt = f(t, y)`.
///
/// Derivatives must be deterministic, always producing the same result for a
/// given `(t, y)`, so that repeated solves over the same mesh are
/// bit-identical.
///
/// Any closure `Fn(f64, f64) -> f64` is a `Derivative` that never fails.
/// Wrap closures that can fail in [`Fallible`].
pub trait Derivative {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the derivative at time `t` and value `y`.
    ///
    /// # Errors
    ///
    /// Each derivative defines its own `Error` type. Solvers return it to the
    /// caller unchanged.
    fn evaluate(&self, t: f64, y: f64) -> Result<f64, Self::Error>;
}

impl<F> Derivative for F
where
    F: Fn(f64, f64) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, t: f64, y: f64) -> Result<f64, Infallible> {
        Ok(self(t, y))
    }
}

/// Adapts a closure returning `Result<f64, E>` into a [`Derivative`].
///
/// # Example
///
/// ```
/// use euler1d_core::{Derivative, Fallible};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("log of non-positive value")]
/// struct Domain;
///
/// let f = Fallible(|_t: f64, y: f64| if y > 0.0 { Ok(y.ln()) } else { Err(Domain) });
/// assert!(f.evaluate(0.0, 1.0).is_ok());
/// assert!(f.evaluate(0.0, -1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(pub F);

impl<F, E> Derivative for Fallible<F>
where
    F: Fn(f64, f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn evaluate(&self, t: f64, y: f64) -> Result<f64, E> {
        (self.0)(t, y)
    }
}
