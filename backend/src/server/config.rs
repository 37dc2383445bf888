//! HTTP server configuration object and helpers.

use std::sync::Arc;

use storefront::domain::ports::DeliveryNotifier;
use storefront::outbound::notifier::CommandNotifier;
use storefront::outbound::persistence::Database;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) database: Database,
    pub(crate) notifier: Arc<dyn DeliveryNotifier>,
}

impl ServerConfig {
    /// Serve on `bind_addr` with repositories backed by `database`.
    ///
    /// The notifier defaults to running `notify`.
    #[must_use]
    pub fn new(bind_addr: (String, u16), database: Database) -> Self {
        Self {
            bind_addr,
            database,
            notifier: Arc::new(CommandNotifier::default()),
        }
    }

    /// Replace the delivery partner notifier.
    #[must_use]
    pub fn with_notifier(mut self, notifier: impl DeliveryNotifier + 'static) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }
}
