//! Core traits and types for scalar forward-Euler integration.
//!
//! This crate defines the shared abstractions that the solver, expression
//! evaluator, and observers build on:
//!
//! - [`Derivative`]: a callable right-hand side `f(t, y)` of `dy/dt = f(t, y)`
//! - [`ProblemSpec`]: a validated, immutable initial-value problem
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`InvalidArgument`]: why a problem definition was rejected

mod derivative;
mod error;
mod observer;
mod problem;

pub use derivative::{Derivative, Fallible};
pub use error::InvalidArgument;
pub use observer::Observer;
pub use problem::ProblemSpec;
