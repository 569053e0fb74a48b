//! Publisher core: registry, subscriber queues and dispatch.
//!
//! The public API from this module is [`Publisher`], its [`PublisherBuilder`]
//! and [`PublisherConfig`], plus the [`Dispatch`] / [`DispatchReport`] pair
//! returned by [`Publisher::dispatch`].
//!
//! Internal modules:
//! - [`queue`]: ordered, deduplicated subscribers of one event;
//! - [`registry`]: event name to queue map, creation/removal rules;
//! - [`dispatch`]: isolated per-subscriber tasks and completion tracking;
//! - [`publisher`]: lock ownership, logging and the public operations.

mod builder;
mod config;
mod dispatch;
mod publisher;
mod queue;
mod registry;

pub use builder::PublisherBuilder;
pub use config::PublisherConfig;
pub use dispatch::{Dispatch, DispatchReport};
pub use publisher::Publisher;
