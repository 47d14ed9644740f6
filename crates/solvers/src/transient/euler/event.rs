/// Event emitted by the Euler solver for each mesh point.
///
/// Step 0 is the initial value before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number (0 for the initial value, 1..N for integration steps).
    pub step: usize,

    /// Mesh time at this step.
    pub t: f64,

    /// Approximate solution value at `t`.
    pub y: f64,
}
