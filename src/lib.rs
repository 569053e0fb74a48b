//! # eventpub
//!
//! **eventpub** is an in-process event publisher for async Rust.
//!
//! Named events accept any number of subscribers. Publishing an event runs
//! every current subscriber concurrently on its own tokio task, with each
//! invocation isolated from the others' panics.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │ Subscriber A │   │ Subscriber B │   │ Subscriber C │
//!     │  ("mailer")  │   │  ("audit")   │   │  ("stock")   │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼ subscribe        ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Publisher<T>                                                     │
//! │  - RwLock<Registry>  (event name → SubscriberQueue)               │
//! │  - LogSink           (optional Logger, enable flag)               │
//! └──────────────────────────────┬────────────────────────────────────┘
//!                                ▼ publish(event, payload)
//!                    snapshot queue, release lock
//!                    stamp Header { name, event_time }
//!                    ┌───────────┼───────────┐
//!                    ▼           ▼           ▼
//!                 task A      task B      task C
//!                    ▼           ▼           ▼
//!          catch_unwind(on_event(Arc<Payload<T>>)) → log done / log panic
//! ```
//!
//! ### Lifecycle
//! ```text
//! create_event("x")   ──► fresh empty queue (evicts existing subscribers)
//! subscribe("x", s)   ──► append unless s.name() already queued (creates "x" if missing)
//! unsubscribe(n, "x") ──► remove all named n; drop "x" when empty
//! publish("x", p)     ──► EventNotFound | NoSubscribers | Ok (dispatch started)
//! ```
//!
//! ## Features
//! | Area            | Description                                              | Key types / traits                      |
//! |-----------------|----------------------------------------------------------|-----------------------------------------|
//! | **Publisher**   | Registry, subscribe/unsubscribe, fire-and-forget publish | [`Publisher`], [`PublisherConfig`]      |
//! | **Subscribers** | Fixed callback shape with explicit identity              | [`Subscriber`], [`SubscriberFn`]        |
//! | **Payloads**    | Caller data plus dispatcher-stamped header               | [`Payload`], [`Header`]                 |
//! | **Completion**  | Opt-in waiting on one dispatch                           | [`Dispatch`], [`DispatchReport`]        |
//! | **Logging**     | Narrow logging capability, disabled by default           | [`Logger`], [`TracingLogger`]           |
//! | **Errors**      | Reported, never fatal                                    | [`PublisherError`]                      |
//!
//! ## Optional features
//! - `logging`: exports a simple stdout/stderr `LogWriter` logger _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use eventpub::{Payload, Publisher, PublisherError, SubscriberFn, SubscriberRef};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), PublisherError> {
//!     let publisher: Publisher<u64> = Publisher::new();
//!     publisher.create_event(["order.created"]).await;
//!
//!     let hits = Arc::new(AtomicUsize::new(0));
//!     let counter = Arc::clone(&hits);
//!     let count: SubscriberRef<u64> = SubscriberFn::arc("count", move |_p: Arc<Payload<u64>>| {
//!         let counter = Arc::clone(&counter);
//!         async move {
//!             counter.fetch_add(1, Ordering::SeqCst);
//!         }
//!     });
//!     publisher.subscribe("order.created", [count]).await;
//!
//!     // Fire-and-forget:
//!     publisher.publish("order.created", 1u64).await?;
//!
//!     // Or wait for this dispatch to finish:
//!     let report = publisher.dispatch("order.created", 2u64).await?.wait().await;
//!     assert!(report.all_completed());
//!
//!     assert_eq!(
//!         publisher.publish("missing", 3u64).await,
//!         Err(PublisherError::EventNotFound { event: "missing".into() })
//!     );
//!     Ok(())
//! }
//! ```
mod core;
mod error;
mod events;
mod logging;
mod subscribers;

// ---- Public re-exports ----

pub use self::core::{Dispatch, DispatchReport, Publisher, PublisherBuilder, PublisherConfig};
pub use error::PublisherError;
pub use events::{Header, Payload};
pub use logging::{Logger, TracingLogger};
pub use subscribers::{Subscriber, SubscriberFn, SubscriberRef};

// Optional: expose a simple built-in stdout logger (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use logging::LogWriter;
