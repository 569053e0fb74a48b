//! # Publisher: event registry, subscriptions and isolated dispatch.
//!
//! The [`Publisher`] owns its registry (no global state) behind a single
//! `RwLock`, and a logging sink cloned into every dispatch task.
//!
//! ## High-level architecture
//! ```text
//! create_event / subscribe / unsubscribe
//!     └──► registry.write()  ──► mutate map/queue ──► release ──► log info
//!
//! publish(event, payload)
//!     ├──► registry.read()   ──► snapshot queue   ──► release
//!     ├──► stamp Header { name, event_time }      (one timestamp per call)
//!     └──► spawn_isolated() per subscriber        ──► return (no waiting)
//!                 ┌──────────┬──────────┐
//!                 ▼          ▼          ▼
//!              task S1    task S2 ... task SN
//!                 │          │          │
//!          catch_unwind(sub.on_event(Arc<Payload<T>>))
//! ```
//!
//! - Subscriber tasks never run under the registry lock.
//! - A snapshot is unaffected by subscribe/unsubscribe calls made after it.
//! - `publish` reports only whether dispatch started.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use eventpub::{Payload, Publisher, SubscriberFn, SubscriberRef};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let publisher: Publisher<u64> = Publisher::new();
//!     publisher.create_event(["order.created"]).await;
//!
//!     let mailer: SubscriberRef<u64> = SubscriberFn::arc("mailer", |p: Arc<Payload<u64>>| async move {
//!         println!("order {} via {}", p.data, p.header().name());
//!     });
//!     publisher.subscribe("order.created", [mailer]).await;
//!
//!     let report = publisher.dispatch("order.created", 42u64).await?.wait().await;
//!     assert_eq!(report.completed, 1);
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::core::{
    builder::PublisherBuilder,
    config::PublisherConfig,
    dispatch::{self, Dispatch},
    registry::Registry,
};
use crate::error::PublisherError;
use crate::events::Payload;
use crate::logging::{LogSink, Logger};
use crate::subscribers::SubscriberRef;

/// Registry of named events and their subscribers, with isolated fan-out.
///
/// Share it across tasks as `Arc<Publisher<T>>`; every operation takes `&self`.
/// Logger settings take `&mut self` and are meant to be applied before sharing.
pub struct Publisher<T> {
    registry: RwLock<Registry<T>>,
    log: LogSink,
}

impl<T> Publisher<T>
where
    T: Send + Sync + 'static,
{
    /// Creates a publisher with default configuration (logging disabled, no logger).
    pub fn new() -> Self {
        Self::with_config(PublisherConfig::default())
    }

    /// Creates a publisher with the given configuration and no logger.
    pub fn with_config(cfg: PublisherConfig) -> Self {
        Self::new_internal(cfg, None)
    }

    /// Returns a builder to attach a logger at construction time.
    pub fn builder(cfg: PublisherConfig) -> PublisherBuilder<T> {
        PublisherBuilder::new(cfg)
    }

    pub(crate) fn new_internal(cfg: PublisherConfig, logger: Option<Arc<dyn Logger>>) -> Self {
        Self {
            registry: RwLock::new(Registry::new()),
            log: LogSink::new(logger, cfg.logging),
        }
    }

    /// Configures the logger receiving lifecycle messages.
    pub fn set_logger(&mut self, logger: Arc<dyn Logger>) {
        self.log.set_logger(logger);
    }

    /// Enables or disables lifecycle logging.
    pub fn set_logging(&mut self, enabled: bool) {
        self.log.set_enabled(enabled);
    }

    /// Returns `true` if lifecycle logging is enabled.
    pub fn logging_enabled(&self) -> bool {
        self.log.is_enabled()
    }

    /// Creates events, evicting all subscribers of any that already exist.
    ///
    /// Each name gets a fresh, empty queue. Never fails.
    pub async fn create_event<I, S>(&self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let evicted: Vec<(String, usize)> = {
            let mut reg = self.registry.write().await;
            names
                .into_iter()
                .map(|name| {
                    let n = reg.create(name.clone());
                    (name, n)
                })
                .collect()
        };

        for (name, n) in evicted {
            if n > 0 {
                self.log
                    .info(format_args!("Event: {name} recreated, evicted {n} subscriber(s)"));
            }
        }
    }

    /// Returns `true` if `event` is registered.
    pub async fn event_exist(&self, event: &str) -> bool {
        self.registry.read().await.contains(event)
    }

    /// Number of subscribers of `event`, `0` if it does not exist.
    pub async fn subscribers_count(&self, event: &str) -> usize {
        self.registry.read().await.count(event)
    }

    /// Returns sorted list of registered event names.
    pub async fn events(&self) -> Vec<String> {
        self.registry.read().await.names()
    }

    /// Subscribes each subscriber to `event`, creating the event if needed.
    ///
    /// A subscriber whose [`name`](crate::Subscriber::name) is already queued for
    /// this event is skipped.
    pub async fn subscribe<I>(&self, event: &str, subscribers: I)
    where
        I: IntoIterator<Item = SubscriberRef<T>>,
    {
        let subscribers: Vec<SubscriberRef<T>> = subscribers.into_iter().collect();
        let added: Vec<String> = {
            let mut reg = self.registry.write().await;
            subscribers
                .into_iter()
                .filter_map(|s| {
                    let name = s.name().to_string();
                    reg.subscribe(event, s).then_some(name)
                })
                .collect()
        };

        for name in added {
            self.log
                .info(format_args!("Subscriber: {name} subscribed to Event: {event}"));
        }
    }

    /// Unsubscribes every subscriber named `subscriber` from `event`.
    ///
    /// Removes the event once its last subscriber is gone.
    ///
    /// # Errors
    /// - [`PublisherError::EventNotFound`] if `event` does not exist;
    /// - [`PublisherError::SubscriberNotFound`] if no subscriber with that name is queued.
    pub async fn unsubscribe(&self, subscriber: &str, event: &str) -> Result<(), PublisherError> {
        self.registry.write().await.unsubscribe(subscriber, event)?;

        self.log.info(format_args!(
            "Subscriber: {subscriber} unsubscribed from Event: {event}"
        ));
        Ok(())
    }

    /// Publishes `payload` to every current subscriber of `event`.
    ///
    /// Fire-and-forget: returns once the subscriber tasks are spawned. `Ok(())`
    /// means dispatch started, not that subscribers succeeded.
    ///
    /// # Errors
    /// - [`PublisherError::EventNotFound`] if `event` does not exist;
    /// - [`PublisherError::NoSubscribers`] if it has no subscribers.
    ///
    /// # Panics
    /// Outside a tokio runtime (subscriber tasks are spawned with `tokio::spawn`).
    pub async fn publish(
        &self,
        event: &str,
        payload: impl Into<Payload<T>>,
    ) -> Result<(), PublisherError> {
        self.dispatch(event, payload).await.map(drop)
    }

    /// Same as [`publish`](Self::publish), but returns a [`Dispatch`] handle to
    /// await the subscriber tasks.
    ///
    /// # Errors
    /// See [`publish`](Self::publish).
    pub async fn dispatch(
        &self,
        event: &str,
        payload: impl Into<Payload<T>>,
    ) -> Result<Dispatch, PublisherError> {
        let subscribers = self.registry.read().await.snapshot(event)?;

        let mut payload = payload.into();
        payload.stamp(event);
        let payload = Arc::new(payload);
        let event: Arc<str> = Arc::from(event);

        let tasks = subscribers
            .into_iter()
            .map(|sub| {
                let name = sub.name().to_string();
                let handle = dispatch::spawn_isolated(
                    sub,
                    Arc::clone(&payload),
                    Arc::clone(&event),
                    self.log.clone(),
                );
                (name, handle)
            })
            .collect();

        Ok(Dispatch::new(event, tasks))
    }
}

impl<T> Default for Publisher<T>
where
    T: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Publisher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Publisher").field("log", &self.log).finish_non_exhaustive()
    }
}
