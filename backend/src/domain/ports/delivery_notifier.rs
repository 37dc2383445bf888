//! Driven port for telling a delivery partner about a status change.

use async_trait::async_trait;

/// Errors raised by notifier adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryNotifierError {
    /// The notifier could not be started.
    #[error("failed to start notifier: {message}")]
    Spawn { message: String },
    /// The notifier ran and reported failure.
    #[error("notifier exited with status {status}: {stderr}")]
    Failed { status: String, stderr: String },
}

impl DeliveryNotifierError {
    /// Create a spawn error with the given message.
    pub fn spawn(message: impl Into<String>) -> Self {
        Self::Spawn {
            message: message.into(),
        }
    }

    /// Create a failure carrying the exit status and captured stderr.
    pub fn failed(status: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::Failed {
            status: status.into(),
            stderr: stderr.into(),
        }
    }
}

/// Port notifying a named delivery partner.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeliveryNotifier: Send + Sync {
    /// Notify `partner` and return the notifier's output.
    async fn notify(&self, partner: &str) -> Result<String, DeliveryNotifierError>;
}

/// Notifier that records nothing and reports an empty output.
///
/// Used where no notifier is configured and in tests that do not exercise
/// notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDeliveryNotifier;

#[async_trait]
impl DeliveryNotifier for FixtureDeliveryNotifier {
    async fn notify(&self, _partner: &str) -> Result<String, DeliveryNotifierError> {
        Ok(String::new())
    }
}
