//! Driven port reporting whether the backing store can serve requests.

use async_trait::async_trait;

/// Availability check used by the readiness probe.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageProbe: Send + Sync {
    /// Whether queries can currently be issued.
    async fn is_available(&self) -> bool;
}
