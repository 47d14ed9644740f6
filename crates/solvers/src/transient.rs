//! Solvers that march a [`ProblemSpec`] forward in time.
//!
//! A [`ProblemSpec`] pairs a derivative `f(t, y)` with an interval, an
//! initial value, and a step count. Solvers in this module produce the
//! approximate trajectory on a uniform mesh over that interval.
//!
//! # Solvers
//!
//! - [`euler`]: explicit (forward) Euler, first order, fixed step
//!
//! [`ProblemSpec`]: euler1d_core::ProblemSpec

pub mod euler;
