//! # Isolated fan-out of one publish call.
//!
//! Every subscriber of the snapshot runs in its own tokio task, wrapped so a
//! panic stays inside that task.
//!
//! ## Architecture
//! ```text
//! publish(event, payload)
//!     │  (snapshot + stamp, lock released)
//!     ├──► task 1 ──► log "Executing" ──► sub1.on_event(payload) ──► log "Done"
//!     │                                         └──────► panic → log error
//!     ├──► task 2 ──► ...
//!     └──► task N ──► ...
//! ```
//!
//! ## Rules
//! - **No cross-subscriber ordering**: tasks complete in any order
//! - **Non-blocking**: publish returns once tasks are spawned
//! - **Isolation**: a panicking subscriber doesn't affect siblings, the publisher or the runtime
//! - **No "done" after a crash**: a panicked subscriber only gets the error entry
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state inconsistent
//! if a subscriber uses `Arc<Mutex<T>>` and panics while holding the lock.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::task::JoinHandle;

use crate::events::Payload;
use crate::logging::LogSink;
use crate::subscribers::SubscriberRef;

/// How a single subscriber invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    Completed,
    Panicked,
}

/// Spawns `sub` on its own task behind the isolation wrapper.
pub(crate) fn spawn_isolated<T>(
    sub: SubscriberRef<T>,
    payload: Arc<Payload<T>>,
    event: Arc<str>,
    log: LogSink,
) -> JoinHandle<Outcome>
where
    T: Send + Sync + 'static,
{
    tokio::spawn(async move {
        let name = sub.name().to_string();
        log.info(format_args!("Executing subscriber: {name}. Event: {event}"));

        let call = AssertUnwindSafe(async move { sub.on_event(payload).await });
        match call.catch_unwind().await {
            Ok(()) => {
                log.info(format_args!("Done executing subscriber {name}. Event: {event}"));
                Outcome::Completed
            }
            Err(panic_err) => {
                let info = panic_message(&*panic_err);
                log.err(format_args!(
                    "Subscriber: {name} processing failed for Event: {event}: {info}"
                ));
                Outcome::Panicked
            }
        }
    })
}

fn panic_message(any: &(dyn Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Handle to the subscriber tasks launched by one publish call.
///
/// Returned by [`Publisher::dispatch`](crate::Publisher::dispatch). Dropping it
/// detaches the tasks: they keep running, which is exactly what
/// [`Publisher::publish`](crate::Publisher::publish) does.
#[must_use = "dropping a Dispatch detaches its tasks; use Publisher::publish for fire-and-forget"]
#[derive(Debug)]
pub struct Dispatch {
    event: Arc<str>,
    tasks: Vec<(String, JoinHandle<Outcome>)>,
}

impl Dispatch {
    pub(crate) fn new(event: Arc<str>, tasks: Vec<(String, JoinHandle<Outcome>)>) -> Self {
        Self { event, tasks }
    }

    /// Name of the dispatched event.
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Number of subscriber tasks launched.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Always `false` for a successful dispatch; kept for API symmetry with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Identities of the subscribers in dispatch order.
    pub fn subscribers(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(|(name, _)| name.as_str())
    }

    /// Waits for every subscriber task to finish and summarizes the outcome.
    pub async fn wait(self) -> DispatchReport {
        let mut report = DispatchReport {
            event: self.event.to_string(),
            completed: 0,
            panicked: Vec::new(),
            aborted: Vec::new(),
        };

        for (name, handle) in self.tasks {
            match handle.await {
                Ok(Outcome::Completed) => report.completed += 1,
                Ok(Outcome::Panicked) => report.panicked.push(name),
                Err(je) if je.is_panic() => report.panicked.push(name),
                // runtime shut down before the task finished
                Err(_) => report.aborted.push(name),
            }
        }
        report
    }
}

/// Summary of one awaited [`Dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// Name of the dispatched event.
    pub event: String,
    /// Number of subscribers that returned normally.
    pub completed: usize,
    /// Subscribers whose invocation panicked.
    pub panicked: Vec<String>,
    /// Subscribers whose task was cancelled by the runtime before finishing.
    pub aborted: Vec<String>,
}

impl DispatchReport {
    /// Returns `true` if every subscriber returned normally.
    pub fn all_completed(&self) -> bool {
        self.panicked.is_empty() && self.aborted.is_empty()
    }
}
