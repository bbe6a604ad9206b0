//! Observable state container.
//!
//! A `Store` owns one reducer's state. Reads go through [`Store::state`],
//! writes only through [`Store::dispatch`], and every dispatch is announced
//! to subscribers before `dispatch` returns.

use super::reducer::Reducer;

/// Handle returned by [`Store::subscribe`], used to unsubscribe later.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SubscriptionId(u64);

type Listener<S> = Box<dyn FnMut(&S) + Send>;

pub struct Store<R: Reducer> {
    state: R::State,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener<R::State>)>,
}

impl<R: Reducer> Store<R> {
    /// Mount a store with its initial state.
    pub fn new(state: R::State) -> Self {
        Self {
            state,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Current state. Reading never notifies and never mutates.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Run `intent` through the reducer, store the result, then notify
    /// every subscriber once, in subscription order.
    pub fn dispatch(&mut self, intent: R::Intent) {
        self.state = R::reduce(std::mem::take(&mut self.state), intent);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }

    /// Register a listener that runs after every dispatch.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&R::State) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        tracing::trace!(subscription = id.0, "store subscriber added");
        id
    }

    /// Remove a listener. Returns `false` if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mvi::{Intent, UiState};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Total(i64);

    impl UiState for Total {}

    enum Op {
        Add(i64),
    }

    impl Intent for Op {}

    struct TotalReducer;

    impl Reducer for TotalReducer {
        type State = Total;
        type Intent = Op;

        fn reduce(state: Total, intent: Op) -> Total {
            match intent {
                Op::Add(n) => Total(state.0 + n),
            }
        }
    }

    #[test]
    fn dispatch_replaces_state() {
        let mut store = Store::<TotalReducer>::default();
        store.dispatch(Op::Add(2));
        store.dispatch(Op::Add(5));
        assert_eq!(store.state(), &Total(7));
    }

    #[test]
    fn listener_sees_new_state() {
        let mut store = Store::<TotalReducer>::default();
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |state: &Total| sink.lock().push(state.0));

        store.dispatch(Op::Add(1));
        store.dispatch(Op::Add(10));

        assert_eq!(*seen.lock(), vec![1, 11]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = Store::<TotalReducer>::default();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let id = store.subscribe(move |_: &Total| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(Op::Add(1));
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(Op::Add(1));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn subscription_ids_are_not_reused() {
        let mut store = Store::<TotalReducer>::default();
        let first = store.subscribe(|_: &Total| {});
        store.unsubscribe(first);
        let second = store.subscribe(|_: &Total| {});
        assert_ne!(first, second);
    }
}
