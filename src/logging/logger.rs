//! # Logging capability.
//!
//! [`Logger`] is the narrow interface the publisher calls for subscribe,
//! unsubscribe and dispatch lifecycle messages. The publisher never requires
//! one: with no logger configured, or with logging disabled, every message is
//! silently skipped.

use std::fmt;
use std::sync::Arc;

/// Sink for publisher lifecycle messages.
///
/// Called from the caller's context (subscribe/unsubscribe) and from
/// subscriber tasks (dispatch), possibly concurrently.
pub trait Logger: Send + Sync + 'static {
    /// Records an informational message.
    fn log_info(&self, msg: &str);

    /// Records an error message.
    fn log_err(&self, msg: &str);
}

/// Logger handle plus the enable flag, cloned into every dispatch task.
///
/// Messages are only formatted when they will actually be delivered.
#[derive(Clone, Default)]
pub(crate) struct LogSink {
    logger: Option<Arc<dyn Logger>>,
    enabled: bool,
}

impl LogSink {
    pub(crate) fn new(logger: Option<Arc<dyn Logger>>, enabled: bool) -> Self {
        Self { logger, enabled }
    }

    pub(crate) fn set_logger(&mut self, logger: Arc<dyn Logger>) {
        self.logger = Some(logger);
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn info(&self, args: fmt::Arguments<'_>) {
        if let Some(l) = self.active() {
            l.log_info(&args.to_string());
        }
    }

    pub(crate) fn err(&self, args: fmt::Arguments<'_>) {
        if let Some(l) = self.active() {
            l.log_err(&args.to_string());
        }
    }

    fn active(&self) -> Option<&Arc<dyn Logger>> {
        if self.enabled {
            self.logger.as_ref()
        } else {
            None
        }
    }
}

impl fmt::Debug for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink")
            .field("logger", &self.logger.is_some())
            .field("enabled", &self.enabled)
            .finish()
    }
}
