/// Receives solver events and optionally returns a control action.
///
/// The event type `E` and action type `A` are defined by each solver.
/// Closures `FnMut(&E) -> Option<A>` are observers, and `()` is a no-op
/// observer that never acts.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_observer_sees_every_event() {
        let mut seen = Vec::new();
        let mut obs = |event: &u32| {
            seen.push(*event);
            (*event == 2).then_some("stop")
        };

        assert_eq!(obs.observe(&1), None);
        assert_eq!(obs.observe(&2), Some("stop"));
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn unit_observer_never_acts() {
        let action: Option<()> = ().observe(&42_u32);
        assert!(action.is_none());
    }
}
