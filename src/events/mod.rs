//! Published data: payloads and their dispatch headers.
//!
//! ## Contents
//! - [`Payload`] caller data plus header, shared read-only across subscribers
//! - [`Header`] event name and dispatch timestamp, stamped by the dispatcher

mod header;
mod payload;

pub use header::Header;
pub use payload::Payload;
