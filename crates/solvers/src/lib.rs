//! Numerical solvers for scalar initial-value problems.
//!
//! # Modules
//!
//! - [`transient`]: time-stepping solvers ([`transient::euler`])

pub mod transient;
