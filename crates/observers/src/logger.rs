use euler1d_core::Observer;
use log::{debug, info};

use crate::traits::HasPoint;

/// Logs solution points through the [`log`] facade.
///
/// Every `stride`-th step is logged at `debug` and the final step at `info`.
/// The observer never returns an action.
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    final_step: usize,
    stride: usize,
    logged: usize,
}

impl LogObserver {
    /// Creates an observer for a solve of `num_steps` steps that logs every
    /// step.
    #[must_use]
    pub fn new(num_steps: usize) -> Self {
        Self {
            final_step: num_steps,
            stride: 1,
            logged: 0,
        }
    }

    /// Only logs every `stride`-th step at `debug`. Zero is treated as one.
    #[must_use]
    pub fn every(mut self, stride: usize) -> Self {
        self.stride = stride.max(1);
        self
    }

    /// Returns how many points have been logged.
    #[must_use]
    pub fn logged(&self) -> usize {
        self.logged
    }
}

impl<E: HasPoint, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        let step = event.step();
        if step == self.final_step {
            info!("step {step}: y({}) = {}", event.t(), event.y());
        } else if step % self.stride == 0 {
            debug!("step {step}: y({}) = {}", event.t(), event.y());
        } else {
            return None;
        }
        self.logged += 1;
        None
    }
}

/// Allows `&mut LogObserver` to be passed to solvers that take an observer by
/// value.
impl<E: HasPoint, A> Observer<E, A> for &mut LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
