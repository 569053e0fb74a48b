//! # Logging collaborator.
//!
//! - [`Logger`] - capability the publisher calls (`log_info` / `log_err`)
//! - [`TracingLogger`] - forwards to the `tracing` facade
//! - `LogWriter` - prints to stdout/stderr (feature `logging`)

mod logger;
mod trace;
#[cfg(feature = "logging")]
mod writer;

pub(crate) use logger::LogSink;
pub use logger::Logger;
pub use trace::TracingLogger;
#[cfg(feature = "logging")]
pub use writer::LogWriter;
