//! # Payload delivered to subscribers.
//!
//! [`Payload`] couples caller data with the [`Header`] the dispatcher stamps in.
//! Once stamped, a payload is wrapped in an `Arc` and shared read-only by every
//! subscriber of that publish call. Subscribers that need mutation must bring
//! their own synchronization inside `T`.
//!
//! ## Example
//! ```rust
//! use eventpub::Payload;
//!
//! #[derive(Debug)]
//! struct OrderCreated { order_id: u64 }
//!
//! let p = Payload::new(OrderCreated { order_id: 42 });
//! assert_eq!(p.data.order_id, 42);
//! assert!(!p.header().is_stamped());
//! ```

use std::ops::Deref;

use super::header::Header;

/// Caller data plus dispatch metadata.
#[derive(Debug, Clone, Default)]
pub struct Payload<T> {
    header: Header,
    /// Caller-supplied data.
    pub data: T,
}

impl<T> Payload<T> {
    /// Wraps `data` with an unstamped header.
    pub fn new(data: T) -> Self {
        Self {
            header: Header::default(),
            data,
        }
    }

    /// Returns the dispatch header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Consumes the payload and returns the caller data.
    pub fn into_inner(self) -> T {
        self.data
    }

    pub(crate) fn stamp(&mut self, event: &str) {
        self.header = Header::stamped(event);
    }
}

impl<T> From<T> for Payload<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T> Deref for Payload<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}
