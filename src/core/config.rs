//! # Publisher configuration.
//!
//! Provides [`PublisherConfig`] construction-time settings for a [`Publisher`](crate::Publisher).

/// Construction-time settings for a publisher.
///
/// ## Field semantics
/// - `logging`: forward lifecycle messages to the configured [`Logger`](crate::Logger).
///   Without a logger this flag has no effect.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PublisherConfig {
    /// Enables lifecycle logging. Disabled by default.
    pub logging: bool,
}

impl PublisherConfig {
    /// Returns a config with logging enabled.
    #[inline]
    pub fn with_logging() -> Self {
        Self { logging: true }
    }
}
