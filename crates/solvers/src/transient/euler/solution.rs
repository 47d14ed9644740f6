/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an Euler integration.
///
/// `mesh` and `values` always have the same length and are index-aligned:
/// `values[i]` approximates `y(mesh[i])`. When the solver completes, both
/// hold `steps + 1` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Mesh times for each computed point (including the initial time).
    pub mesh: Vec<f64>,

    /// Approximate solution values (including the initial value).
    pub values: Vec<f64>,

    /// Uniform step size `h` used for integration.
    pub step_size: f64,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl Solution {
    /// Iterates over `(t, y)` pairs in mesh order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.mesh.iter().copied().zip(self.values.iter().copied())
    }

    /// Returns the last computed `(t, y)` pair.
    #[must_use]
    pub fn last(&self) -> Option<(f64, f64)> {
        self.points().last()
    }
}
