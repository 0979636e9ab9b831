/// Watches the energy search as it runs.
///
/// The search in [`crate::search`] hands each iteration's [`Event`] to its
/// observer before checking for convergence, so an observer sees every trial
/// energy the moment its boundary value is known. This is the only window
/// into a running search: the core never prints, which keeps tests silent
/// and leaves progress reporting to the caller.
///
/// Returning `Some(action)` from [`observe`](Observer::observe) asks the
/// search to act on [`Action::StopEarly`] and halt with the current iterate;
/// `None` lets it continue.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// silent observer that never intervenes.
///
/// [`Event`]: crate::search::Event
/// [`Action::StopEarly`]: crate::search::Action::StopEarly
pub trait Observer<E, A> {
    /// Receives one search event and optionally requests an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// The silent observer: sees nothing, never intervenes.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
