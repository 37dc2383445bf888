//! Shared SQLite connection handle.
//!
//! SQLite serialises writers, so the service keeps exactly one connection and
//! hands it out behind an async mutex. Diesel's synchronous
//! `SqliteConnection` is wrapped in `diesel-async`'s `SyncConnectionWrapper`,
//! which runs each query on Tokio's blocking pool.
//!
//! The handle is opened once at startup and closed after the HTTP server
//! stops. After [`Database::close`] every checkout fails with
//! [`DatabaseClosed`].

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::{Connection, SqliteConnection};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tokio::sync::{MappedMutexGuard, Mutex, MutexGuard};
use tracing::{debug, info};

use crate::domain::ports::StorageProbe;

/// Async connection type used by every repository.
pub type SqliteAsyncConnection = SyncConnectionWrapper<SqliteConnection>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

const IN_MEMORY_URL: &str = ":memory:";

/// Errors raised while opening the database.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatabaseOpenError {
    /// The directory holding the database file could not be created.
    #[error("failed to create database directory {path}: {message}")]
    CreateDirectory { path: String, message: String },

    /// SQLite refused the connection.
    #[error("failed to connect to database: {message}")]
    Connect { message: String },

    /// A connection pragma could not be applied.
    #[error("failed to configure database connection: {message}")]
    Configure { message: String },

    /// Embedded migrations failed.
    #[error("failed to run database migrations: {message}")]
    Migrate { message: String },

    /// The blocking open task did not complete.
    #[error("database open task failed: {message}")]
    Task { message: String },
}

impl DatabaseOpenError {
    /// Create a connect error with the given message.
    pub fn connect(message: impl Into<String>) -> Self {
        Self::Connect {
            message: message.into(),
        }
    }

    /// Create a configure error with the given message.
    pub fn configure(message: impl Into<String>) -> Self {
        Self::Configure {
            message: message.into(),
        }
    }

    /// Create a migrate error with the given message.
    pub fn migrate(message: impl Into<String>) -> Self {
        Self::Migrate {
            message: message.into(),
        }
    }
}

/// Checkout attempted after [`Database::close`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("database connection is closed")]
pub struct DatabaseClosed;

/// Configuration for the shared SQLite connection.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use storefront::outbound::persistence::DatabaseConfig;
///
/// let config = DatabaseConfig::new(":memory:")
///     .with_busy_timeout(Duration::from_millis(250))
///     .with_foreign_keys(true);
/// assert!(config.is_in_memory());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    database_url: String,
    busy_timeout: Duration,
    enable_wal: bool,
    foreign_keys: bool,
}

impl DatabaseConfig {
    /// Create a configuration for `database_url`.
    ///
    /// Defaults: five second busy timeout, write-ahead logging and foreign
    /// key enforcement enabled.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            busy_timeout: Duration::from_secs(5),
            enable_wal: true,
            foreign_keys: true,
        }
    }

    /// Configuration for a private in-memory database.
    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY_URL)
    }

    /// Set how long SQLite waits on a lock before reporting busy.
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Enable or disable write-ahead logging.
    pub fn with_wal(mut self, enable_wal: bool) -> Self {
        self.enable_wal = enable_wal;
        self
    }

    /// Enable or disable foreign key enforcement.
    pub fn with_foreign_keys(mut self, foreign_keys: bool) -> Self {
        self.foreign_keys = foreign_keys;
        self
    }

    /// Get the database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Whether the URL names an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database_url == IN_MEMORY_URL || self.database_url.contains("mode=memory")
    }

    fn pragmas(&self) -> String {
        let mut pragmas = format!(
            "PRAGMA foreign_keys = {}; PRAGMA busy_timeout = {};",
            if self.foreign_keys { "ON" } else { "OFF" },
            self.busy_timeout.as_millis()
        );
        // WAL needs a shared file; in-memory databases keep their default.
        if self.enable_wal && !self.is_in_memory() {
            pragmas.push_str(" PRAGMA journal_mode = WAL;");
        }
        pragmas
    }
}

/// Cloneable handle to the single SQLite connection.
#[derive(Clone)]
pub struct Database {
    inner: Arc<Mutex<Option<SqliteAsyncConnection>>>,
}

impl Database {
    /// Open the database, apply pragmas and run pending migrations.
    ///
    /// The parent directory of a file database is created when missing.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseOpenError`] when any step fails.
    pub async fn open(config: DatabaseConfig) -> Result<Self, DatabaseOpenError> {
        let connection = tokio::task::spawn_blocking(move || establish(&config))
            .await
            .map_err(|err| DatabaseOpenError::Task {
                message: err.to_string(),
            })??;
        Ok(Self {
            inner: Arc::new(Mutex::new(Some(SyncConnectionWrapper::new(connection)))),
        })
    }

    /// Check out the shared connection.
    ///
    /// The returned guard holds the lock; drop it before awaiting unrelated
    /// work.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseClosed`] after [`Database::close`].
    pub async fn connection(
        &self,
    ) -> Result<MappedMutexGuard<'_, SqliteAsyncConnection>, DatabaseClosed> {
        let guard = self.inner.lock().await;
        MutexGuard::try_map(guard, Option::as_mut).map_err(|_| DatabaseClosed)
    }

    /// Whether the handle still owns a connection.
    pub async fn is_open(&self) -> bool {
        self.inner.lock().await.is_some()
    }

    /// Drop the connection. Closing twice is a no-op.
    pub async fn close(&self) {
        if self.inner.lock().await.take().is_some() {
            info!("database connection closed");
        }
    }
}

#[async_trait]
impl StorageProbe for Database {
    async fn is_available(&self) -> bool {
        self.is_open().await
    }
}

fn establish(config: &DatabaseConfig) -> Result<SqliteConnection, DatabaseOpenError> {
    if !config.is_in_memory() {
        create_parent_directory(config.database_url())?;
    }
    let mut connection = SqliteConnection::establish(config.database_url())
        .map_err(|err| DatabaseOpenError::connect(err.to_string()))?;
    connection
        .batch_execute(&config.pragmas())
        .map_err(|err| DatabaseOpenError::configure(err.to_string()))?;
    let applied = connection
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| DatabaseOpenError::migrate(err.to_string()))?;
    debug!(applied = applied.len(), "database migrations applied");
    info!(
        database_url = config.database_url(),
        "database connection established"
    );
    Ok(connection)
}

fn create_parent_directory(database_url: &str) -> Result<(), DatabaseOpenError> {
    let Some(parent) = Path::new(database_url)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    else {
        return Ok(());
    };
    std::fs::create_dir_all(parent).map_err(|err| DatabaseOpenError::CreateDirectory {
        path: parent.display().to_string(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::sql_types::BigInt;
    use diesel_async::RunQueryDsl;
    use rstest::rstest;

    #[derive(diesel::QueryableByName)]
    struct Count {
        #[diesel(sql_type = BigInt)]
        count: i64,
    }

    #[rstest]
    fn config_defaults() {
        let config = DatabaseConfig::new("data/storefront.db");
        assert_eq!(config.database_url(), "data/storefront.db");
        assert_eq!(config.busy_timeout, Duration::from_secs(5));
        assert!(config.enable_wal);
        assert!(config.foreign_keys);
        assert!(!config.is_in_memory());
    }

    #[rstest]
    #[case(DatabaseConfig::new("shop.db"), true)]
    #[case(DatabaseConfig::in_memory(), false)]
    #[case(DatabaseConfig::new("shop.db").with_wal(false), false)]
    fn wal_pragma_only_for_file_databases(#[case] config: DatabaseConfig, #[case] wal: bool) {
        assert_eq!(config.pragmas().contains("journal_mode = WAL"), wal);
    }

    #[rstest]
    fn pragmas_carry_busy_timeout_and_foreign_keys() {
        let pragmas = DatabaseConfig::in_memory()
            .with_busy_timeout(Duration::from_millis(750))
            .with_foreign_keys(false)
            .pragmas();
        assert!(pragmas.contains("busy_timeout = 750"));
        assert!(pragmas.contains("foreign_keys = OFF"));
    }

    #[rstest]
    #[tokio::test]
    async fn open_runs_migrations() {
        let database = Database::open(DatabaseConfig::in_memory())
            .await
            .expect("in-memory database opens");
        let mut conn = database.connection().await.expect("connection open");
        let tables: Vec<Count> = diesel::sql_query(
            "SELECT COUNT(*) AS count FROM sqlite_master WHERE type = 'table' \
             AND name IN ('suppliers', 'products', 'deliveries', 'headquarters')",
        )
        .load(&mut *conn)
        .await
        .expect("query schema");
        assert_eq!(tables.as_slice().first().map(|row| row.count), Some(4));
    }

    #[rstest]
    #[tokio::test]
    async fn open_creates_parent_directory_for_file_databases() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("storefront.db");
        let url = path.to_str().expect("utf-8 path").to_owned();

        let database = Database::open(DatabaseConfig::new(url))
            .await
            .expect("file database opens");

        assert!(path.exists());
        database.close().await;
    }

    #[rstest]
    #[tokio::test]
    async fn closed_handle_refuses_checkout() {
        let database = Database::open(DatabaseConfig::in_memory())
            .await
            .expect("in-memory database opens");
        let clone = database.clone();
        database.close().await;

        assert!(!clone.is_open().await);
        assert!(!clone.is_available().await);
        assert!(matches!(clone.connection().await, Err(DatabaseClosed)));
        clone.close().await;
    }

    #[rstest]
    #[tokio::test]
    async fn open_reports_unreachable_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"not a directory").expect("write blocker");
        let url = blocker.join("storefront.db");

        let result =
            Database::open(DatabaseConfig::new(url.to_str().expect("utf-8 path"))).await;

        assert!(matches!(
            result,
            Err(DatabaseOpenError::CreateDirectory { .. })
        ));
    }
}
