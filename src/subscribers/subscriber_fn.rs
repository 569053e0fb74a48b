//! # Function-backed subscriber (`SubscriberFn`)
//!
//! [`SubscriberFn`] wraps a closure `F: Fn(Arc<Payload<T>>) -> Fut` together with an
//! explicit name. A fresh future is produced per invocation, so no state leaks
//! between dispatches; share state explicitly through `Arc<...>` captured by the closure.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use eventpub::{Payload, Subscriber, SubscriberFn, SubscriberRef};
//!
//! let s: SubscriberRef<u64> = SubscriberFn::arc("mailer", |p: Arc<Payload<u64>>| async move {
//!     let _order_id = p.data;
//! });
//!
//! assert_eq!(s.name(), "mailer");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::events::Payload;
use crate::subscribers::subscriber::Subscriber;

/// Shared handle to a subscriber (`Arc<dyn Subscriber<T>>`).
pub type SubscriberRef<T> = Arc<dyn Subscriber<T>>;

/// Function-backed subscriber implementation.
#[derive(Debug)]
pub struct SubscriberFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> SubscriberFn<F> {
    /// Creates a new function-backed subscriber.
    ///
    /// Prefer [`SubscriberFn::arc`] when you immediately need a [`SubscriberRef`].
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the subscriber and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<T, F, Fut> Subscriber<T> for SubscriberFn<F>
where
    T: Send + Sync + 'static,
    F: Fn(Arc<Payload<T>>) -> Fut + Send + Sync + 'static, // Fn, not FnMut
    Fut: Future<Output = ()> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn on_event(&self, payload: Arc<Payload<T>>) {
        (self.f)(payload).await
    }
}
