//! [`Logger`] backed by the `tracing` facade.

use crate::logging::Logger;

/// Forwards publisher messages to `tracing` under the `eventpub` target.
///
/// Install any `tracing` subscriber to see the output.
///
/// ```rust
/// use std::sync::Arc;
/// use eventpub::{Publisher, PublisherConfig, TracingLogger};
///
/// let publisher: Publisher<String> = Publisher::builder(PublisherConfig { logging: true })
///     .with_logger(Arc::new(TracingLogger))
///     .build();
/// assert!(publisher.logging_enabled());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log_info(&self, msg: &str) {
        tracing::info!(target: "eventpub", "{msg}");
    }

    fn log_err(&self, msg: &str) {
        tracing::error!(target: "eventpub", "{msg}");
    }
}
