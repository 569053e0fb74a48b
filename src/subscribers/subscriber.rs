//! # Subscriber trait.
//!
//! Provides [`Subscriber`], the fixed callback shape the publisher invokes:
//! one shared payload in, nothing out.
//!
//! Each invocation gets:
//! - **Dedicated tokio task** (spawned by the dispatcher per publish call)
//! - **Panic isolation** (panics are caught and logged at error level)
//!
//! ## Identity
//! [`Subscriber::name`] is the subscriber's identity inside one event queue.
//! It is used for deduplication on subscribe and for lookup on unsubscribe.
//! Two subscribers with the same name are the same subscriber as far as the
//! publisher is concerned.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use eventpub::{Payload, Subscriber};
//!
//! struct Audit;
//!
//! #[async_trait]
//! impl Subscriber<u64> for Audit {
//!     fn name(&self) -> &str { "audit" }
//!
//!     async fn on_event(&self, payload: Arc<Payload<u64>>) {
//!         let _ = (payload.header().name(), payload.data);
//!     }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::events::Payload;

/// Callback registered to one or more events.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Handle errors internally. Panics are contained but only logged.
/// - Do not assume exclusive access to the payload: siblings share it.
#[async_trait]
pub trait Subscriber<T>: Send + Sync + 'static {
    /// Returns the identity of this subscriber.
    ///
    /// Used for deduplication, unsubscription and log messages.
    fn name(&self) -> &str;

    /// Handles one published payload.
    ///
    /// Called from a dedicated task, never in the publisher's context.
    async fn on_event(&self, payload: Arc<Payload<T>>);
}
