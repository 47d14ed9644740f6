use std::error::Error as StdError;

use euler1d_core::InvalidArgument;

/// Errors that can occur while constructing an [`EulerSolver`].
///
/// `E` is the derivative's own error type, carried unchanged.
///
/// [`EulerSolver`]: super::EulerSolver
#[derive(Debug, thiserror::Error)]
pub enum Error<E: StdError + 'static> {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("derivative error: {0}")]
    Derivative(#[source] E),
}

impl<E: StdError + 'static> Error<E> {
    /// Returns the validation failure, if this is one.
    #[must_use]
    pub fn invalid_argument(&self) -> Option<InvalidArgument> {
        match self {
            Self::InvalidArgument(err) => Some(*err),
            Self::Derivative(_) => None,
        }
    }
}
