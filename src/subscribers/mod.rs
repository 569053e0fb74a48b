//! # Subscribers: the callbacks a publisher invokes.
//!
//! - [`Subscriber`] - trait with an explicit identity and one async handler
//! - [`SubscriberFn`] - closure-backed implementation
//! - [`SubscriberRef`] - shared handle (`Arc<dyn Subscriber<T>>`)

mod subscriber;
mod subscriber_fn;

pub use subscriber::Subscriber;
pub use subscriber_fn::{SubscriberFn, SubscriberRef};
