//! # LogWriter — simple message printer
//!
//! A minimal [`Logger`] that prints publisher messages to stdout (info) and
//! stderr (errors). Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! [info] Subscriber: mailer subscribed to Event: order.created
//! [info] Executing subscriber: mailer. Event: order.created
//! [info] Done executing subscriber mailer. Event: order.created
//! [error] Subscriber: flaky processing failed for Event: order.created: boom
//! ```

use crate::logging::Logger;

/// Stdout/stderr logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Logger for LogWriter {
    fn log_info(&self, msg: &str) {
        println!("[info] {msg}");
    }

    fn log_err(&self, msg: &str) {
        eprintln!("[error] {msg}");
    }
}
