//! # Event registry - event name to subscriber queue.
//!
//! The registry is plain data; the owning [`Publisher`](crate::Publisher) guards
//! it with a single `RwLock` and does all logging after the lock is released.
//!
//! ## Rules
//! - Creating an existing event evicts its subscribers (queue replaced, not merged)
//! - Subscribing to a missing event creates it
//! - Removing the last subscriber removes the event
//! - Snapshots are detached copies; later mutations never affect them

use std::collections::HashMap;

use crate::core::queue::SubscriberQueue;
use crate::error::PublisherError;
use crate::subscribers::SubscriberRef;

/// Map of event name to its subscriber queue.
pub(crate) struct Registry<T> {
    events: HashMap<String, SubscriberQueue<T>>,
}

impl<T> Registry<T>
where
    T: Send + Sync + 'static,
{
    pub(crate) fn new() -> Self {
        Self {
            events: HashMap::new(),
        }
    }

    /// Installs a fresh empty queue under `name`.
    ///
    /// Returns the number of subscribers evicted from a previous queue.
    pub(crate) fn create(&mut self, name: String) -> usize {
        let evicted = self
            .events
            .get_mut(&name)
            .map(|q| q.pop_all().len())
            .unwrap_or(0);
        self.events.insert(name, SubscriberQueue::new());
        evicted
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.events.contains_key(name)
    }

    /// Number of subscribers of `name`, `0` for unknown events.
    pub(crate) fn count(&self, name: &str) -> usize {
        self.events.get(name).map_or(0, SubscriberQueue::len)
    }

    /// Returns sorted list of event names.
    pub(crate) fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.events.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Adds `sub` to `event`, creating the event if needed.
    ///
    /// Returns `false` when a subscriber with the same identity is already queued.
    pub(crate) fn subscribe(&mut self, event: &str, sub: SubscriberRef<T>) -> bool {
        self.events
            .entry(event.to_string())
            .or_insert_with(SubscriberQueue::new)
            .push(sub)
    }

    /// Removes every subscriber named `subscriber` from `event`.
    ///
    /// Drops the event entirely once its queue is empty.
    pub(crate) fn unsubscribe(&mut self, subscriber: &str, event: &str) -> Result<usize, PublisherError> {
        let queue = self
            .events
            .get_mut(event)
            .ok_or_else(|| PublisherError::EventNotFound {
                event: event.to_string(),
            })?;

        let removed = queue.remove(subscriber);
        if removed == 0 {
            return Err(PublisherError::SubscriberNotFound {
                subscriber: subscriber.to_string(),
                event: event.to_string(),
            });
        }

        if queue.is_empty() {
            self.events.remove(event);
        }
        Ok(removed)
    }

    /// Copies the subscribers of `event` for dispatch.
    pub(crate) fn snapshot(&self, event: &str) -> Result<Vec<SubscriberRef<T>>, PublisherError> {
        let queue = self
            .events
            .get(event)
            .ok_or_else(|| PublisherError::EventNotFound {
                event: event.to_string(),
            })?;

        if queue.is_empty() {
            return Err(PublisherError::NoSubscribers {
                event: event.to_string(),
            });
        }
        Ok(queue.snapshot())
    }
}
