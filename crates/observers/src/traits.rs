//! Capability traits for reusable observers.
//!
//! These traits abstract over solver-specific event and action types, so
//! observers in this crate do not depend on a concrete solver.
//!
//! # Event traits
//!
//! - [`HasPoint`]: events that carry a `(t, y)` solution point
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use euler1d_core::Observer;
//! use euler1d_observers::traits::{CanStopEarly, HasPoint};
//!
//! /// Stops once the solution exceeds a ceiling.
//! struct Ceiling(f64);
//!
//! impl<E: HasPoint, A: CanStopEarly> Observer<E, A> for Ceiling {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.y() > self.0).then(A::stop_early)
//!     }
//! }
//! ```

use euler1d_solvers::transient::euler;

/// An event that carries a solution point.
pub trait HasPoint {
    /// Returns the step index of this point (0 for the initial value).
    fn step(&self) -> usize;

    /// Returns the mesh time of this point.
    fn t(&self) -> f64;

    /// Returns the solution value at [`t`](HasPoint::t).
    fn y(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasPoint for euler::Event ---

impl HasPoint for euler::Event {
    fn step(&self) -> usize {
        self.step
    }

    fn t(&self) -> f64 {
        self.t
    }

    fn y(&self) -> f64 {
        self.y
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
