//! # Per-event subscriber queue.
//!
//! Ordered list of subscriber handles for one event. Identity is the
//! subscriber's [`name`](crate::Subscriber::name); a queue never holds two
//! handles with the same identity.
//!
//! The queue is only mutated through the [`Registry`](super::registry::Registry)
//! under the publisher lock, and read by the dispatcher through [`SubscriberQueue::snapshot`].

use crate::subscribers::SubscriberRef;

/// Ordered, deduplicated subscribers of one event.
pub(crate) struct SubscriberQueue<T> {
    subscribers: Vec<SubscriberRef<T>>,
}

impl<T> SubscriberQueue<T>
where
    T: Send + Sync + 'static,
{
    pub(crate) fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Returns true if a subscriber with this identity is queued.
    pub(crate) fn contains(&self, name: &str) -> bool {
        self.subscribers.iter().any(|s| s.name() == name)
    }

    /// Appends `sub` unless its identity is already present.
    ///
    /// Returns `true` if the subscriber was added.
    pub(crate) fn push(&mut self, sub: SubscriberRef<T>) -> bool {
        if self.contains(sub.name()) {
            return false;
        }
        self.subscribers.push(sub);
        true
    }

    /// Removes every subscriber with this identity; returns how many were removed.
    pub(crate) fn remove(&mut self, name: &str) -> usize {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.name() != name);
        before - self.subscribers.len()
    }

    /// Clears the queue in place, returning the evicted subscribers.
    pub(crate) fn pop_all(&mut self) -> Vec<SubscriberRef<T>> {
        std::mem::take(&mut self.subscribers)
    }

    /// Clones the current handles for one dispatch.
    pub(crate) fn snapshot(&self) -> Vec<SubscriberRef<T>> {
        self.subscribers.clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
