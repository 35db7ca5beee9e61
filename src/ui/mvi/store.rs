//! State container with an explicit subscribe/notify contract.

use std::fmt;

use super::reducer::Reducer;

/// Handle returned by [`Store::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<S> = Box<dyn FnMut(&S)>;

/// Owns the current state of one MVI feature.
///
/// Every [`dispatch`](Store::dispatch) runs the reducer, stores the result and
/// then calls each subscriber with the new state, in subscription order.
/// Dispatch runs to completion before returning; the store is meant to live
/// on the UI thread.
pub struct Store<R: Reducer> {
    state: R::State,
    revision: u64,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber<R::State>)>,
}

impl<R: Reducer> Store<R> {
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    pub fn with_state(state: R::State) -> Self {
        Self {
            state,
            revision: 0,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Number of intents dispatched so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn dispatch(&mut self, intent: R::Intent) {
        self.state = R::reduce(std::mem::take(&mut self.state), intent);
        self.revision += 1;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.state);
        }
    }

    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&R::State) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false if `id` was never issued or is already unsubscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> fmt::Debug for Store<R>
where
    R::State: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
