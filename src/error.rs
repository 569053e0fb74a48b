//! Error types returned by the publisher.
//!
//! This module defines [`PublisherError`], the only error the public API
//! returns. Every variant is a reported condition, never a fatal one: the
//! publisher keeps working after returning any of them.
//!
//! Subscriber panics are **not** represented here. They are contained by the
//! dispatch isolation wrapper and surface only through the logger and
//! [`DispatchReport`](crate::DispatchReport).

use thiserror::Error;

/// # Errors produced by publisher operations.
///
/// Returned as explicit `Err` values from
/// [`Publisher::publish`](crate::Publisher::publish),
/// [`Publisher::dispatch`](crate::Publisher::dispatch) and
/// [`Publisher::unsubscribe`](crate::Publisher::unsubscribe).
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PublisherError {
    /// The operation referenced an event name absent from the registry.
    #[error("event {event:?} does not exist")]
    EventNotFound {
        /// Name of the missing event.
        event: String,
    },

    /// Publish targeted an existing event whose subscriber queue is empty.
    #[error("event {event:?} has no subscribers")]
    NoSubscribers {
        /// Name of the event without subscribers.
        event: String,
    },

    /// Unsubscribe referenced a subscriber not registered to the event.
    #[error("subscriber {subscriber:?} is not subscribed to event {event:?}")]
    SubscriberNotFound {
        /// Identity of the subscriber that was not found.
        subscriber: String,
        /// Name of the event that was searched.
        event: String,
    },
}

impl PublisherError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventpub::PublisherError;
    ///
    /// let err = PublisherError::NoSubscribers { event: "order.created".into() };
    /// assert_eq!(err.as_label(), "no_subscribers");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            PublisherError::EventNotFound { .. } => "event_not_found",
            PublisherError::NoSubscribers { .. } => "no_subscribers",
            PublisherError::SubscriberNotFound { .. } => "subscriber_not_found",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            PublisherError::EventNotFound { event } => format!("unknown event: {event}"),
            PublisherError::NoSubscribers { event } => format!("no subscribers: {event}"),
            PublisherError::SubscriberNotFound { subscriber, event } => {
                format!("unknown subscriber: {subscriber} (event: {event})")
            }
        }
    }

    /// Returns the event name the error refers to.
    pub fn event(&self) -> &str {
        match self {
            PublisherError::EventNotFound { event }
            | PublisherError::NoSubscribers { event }
            | PublisherError::SubscriberNotFound { event, .. } => event,
        }
    }
}
