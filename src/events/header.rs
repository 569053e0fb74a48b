//! # Event header stamped onto every published payload.
//!
//! The dispatcher overwrites the [`Header`] of a [`Payload`](crate::Payload)
//! right before delivery. All subscribers of one publish call observe the same
//! header, including the same `event_time`.

use std::time::SystemTime;

/// Metadata describing a single dispatch.
///
/// Fields are read-only for callers; only the dispatcher stamps them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    name: String,
    event_time: SystemTime,
}

impl Header {
    /// Creates a header for `name` stamped with the current wall-clock time.
    pub(crate) fn stamped(name: &str) -> Self {
        Self {
            name: name.to_string(),
            event_time: SystemTime::now(),
        }
    }

    /// Name of the event this payload was published to.
    ///
    /// Empty until the payload has been dispatched.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wall-clock time at which the dispatch snapshot was taken.
    ///
    /// `UNIX_EPOCH` until the payload has been dispatched.
    pub fn event_time(&self) -> SystemTime {
        self.event_time
    }

    /// Returns `true` once the dispatcher has stamped this header.
    pub fn is_stamped(&self) -> bool {
        !self.name.is_empty()
    }
}

impl Default for Header {
    fn default() -> Self {
        Self {
            name: String::new(),
            event_time: SystemTime::UNIX_EPOCH,
        }
    }
}
