use std::marker::PhantomData;
use std::sync::Arc;

use super::{config::PublisherConfig, publisher::Publisher};
use crate::logging::Logger;

/// Builder for constructing a [`Publisher`] with optional collaborators.
pub struct PublisherBuilder<T> {
    cfg: PublisherConfig,
    logger: Option<Arc<dyn Logger>>,
    _payload: PhantomData<fn() -> T>,
}

impl<T> PublisherBuilder<T>
where
    T: Send + Sync + 'static,
{
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: PublisherConfig) -> Self {
        Self {
            cfg,
            logger: None,
            _payload: PhantomData,
        }
    }

    /// Sets the logger receiving lifecycle messages.
    ///
    /// Messages are only delivered when [`PublisherConfig::logging`] is set.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Builds the publisher with an empty registry.
    pub fn build(self) -> Publisher<T> {
        Publisher::new_internal(self.cfg, self.logger)
    }
}
