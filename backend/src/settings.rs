//! Service settings loaded via OrthoConfig.
//!
//! Values come from command-line flags, `STOREFRONT_*` environment variables
//! and an optional configuration file, in OrthoConfig's usual precedence.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::notifier::CommandNotifier;
use crate::outbound::persistence::DatabaseConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "data/storefront.db";
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;
const DEFAULT_NOTIFY_COMMAND: &str = "notify";

/// Runtime settings for the storefront service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STOREFRONT")]
pub struct StorefrontSettings {
    /// Interface to listen on.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// SQLite database path, or `:memory:`.
    pub database_url: Option<String>,
    /// Milliseconds SQLite waits on a lock before reporting busy.
    pub busy_timeout_ms: Option<u64>,
    /// Use write-ahead logging for file databases.
    pub enable_wal: Option<bool>,
    /// Enforce foreign key constraints.
    pub foreign_keys: Option<bool>,
    /// Command run to notify delivery partners; the partner is appended.
    pub notify_command: Option<String>,
}

impl StorefrontSettings {
    /// Listen interface, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Listen port, falling back to 3000.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Database location, falling back to `data/storefront.db`.
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Lock wait before a query reports busy.
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms.unwrap_or(DEFAULT_BUSY_TIMEOUT_MS))
    }

    /// Whether file databases use write-ahead logging; on unless disabled.
    pub fn enable_wal(&self) -> bool {
        self.enable_wal.unwrap_or(true)
    }

    /// Whether foreign keys are enforced; on unless disabled.
    pub fn foreign_keys(&self) -> bool {
        self.foreign_keys.unwrap_or(true)
    }

    /// Notifier command line, falling back to `notify`.
    pub fn notify_command(&self) -> &str {
        self.notify_command.as_deref().unwrap_or(DEFAULT_NOTIFY_COMMAND)
    }

    /// Connection settings for [`crate::outbound::persistence::Database`].
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(self.database_url())
            .with_busy_timeout(self.busy_timeout())
            .with_wal(self.enable_wal())
            .with_foreign_keys(self.foreign_keys())
    }

    /// Notifier running the configured command.
    pub fn notifier(&self) -> CommandNotifier {
        CommandNotifier::from_command_line(self.notify_command())
    }
}
