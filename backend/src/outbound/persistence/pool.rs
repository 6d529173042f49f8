//! Async-safe connection pool for Diesel SQLite connections.
//!
//! SQLite connections are synchronous; `diesel-async` drives them through
//! `SyncConnectionWrapper`, which runs each query on the blocking thread pool.
//! `bb8` bounds how many connections exist at once.
//!
//! # Design
//!
//! - Every new connection sets `busy_timeout` so concurrent writers wait for
//!   the file lock instead of failing immediately
//! - Pool checkout respects the configured timeout
//! - All errors are mapped to `PoolError` variants

use std::time::Duration;

use diesel::ConnectionError;
use diesel::sqlite::SqliteConnection;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, ManagerConfig};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_async::{AsyncConnection, SimpleAsyncConnection};
use futures_util::FutureExt;
use futures_util::future::BoxFuture;

/// Async Diesel connection type used by every repository.
pub type DbConnection = SyncConnectionWrapper<SqliteConnection>;

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Configuration for the database connection pool.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use jobboard::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("jobboard.db")
///     .with_max_size(4)
///     .with_busy_timeout(Duration::from_secs(2));
/// assert_eq!(config.database_url(), "jobboard.db");
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    connection_timeout: Duration,
    busy_timeout: Duration,
}

impl PoolConfig {
    /// Create a new configuration for the SQLite file at `database_url`.
    ///
    /// Uses these defaults:
    /// - `max_size`: 8 connections
    /// - `connection_timeout`: 30 seconds
    /// - `busy_timeout`: 5 seconds
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 8,
            connection_timeout: Duration::from_secs(30),
            busy_timeout: Duration::from_secs(5),
        }
    }

    /// Set the maximum number of connections in the pool.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the connection checkout timeout.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Set how long a connection waits on a locked database file.
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Get the database URL.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

fn establish_with_busy_timeout(
    url: &str,
    busy_timeout: Duration,
) -> BoxFuture<'_, Result<DbConnection, ConnectionError>> {
    async move {
        let mut conn = DbConnection::establish(url).await?;
        conn.batch_execute(&format!("PRAGMA busy_timeout = {};", busy_timeout.as_millis()))
            .await
            .map_err(ConnectionError::CouldntSetupConfiguration)?;
        Ok(conn)
    }
    .boxed()
}

/// Async connection pool for SQLite via Diesel.
///
/// # Example
///
/// ```ignore
/// let pool = DbPool::new(PoolConfig::new("jobboard.db")).await?;
/// let mut conn = pool.get().await?;
/// // Use conn for Diesel operations...
/// ```
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<DbConnection>,
}

impl DbPool {
    /// Create a new connection pool with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Build` if the pool cannot be constructed (e.g. the
    /// database file cannot be opened).
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let busy_timeout = config.busy_timeout;
        let mut manager_config = ManagerConfig::<DbConnection>::default();
        manager_config.custom_setup =
            Box::new(move |url| establish_with_busy_timeout(url, busy_timeout));
        let manager = AsyncDieselConnectionManager::<DbConnection>::new_with_config(
            &config.database_url,
            manager_config,
        );

        let pool = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Get a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Checkout` if a connection cannot be obtained within
    /// the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, DbConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_config_default_values() {
        let config = PoolConfig::new("jobboard.db");

        assert_eq!(config.database_url(), "jobboard.db");
        assert_eq!(config.max_size, 8);
        assert_eq!(config.connection_timeout, Duration::from_secs(30));
        assert_eq!(config.busy_timeout, Duration::from_secs(5));
    }

    #[rstest]
    fn pool_config_builder_pattern() {
        let config = PoolConfig::new("jobboard.db")
            .with_max_size(2)
            .with_connection_timeout(Duration::from_secs(1))
            .with_busy_timeout(Duration::from_millis(250));

        assert_eq!(config.max_size, 2);
        assert_eq!(config.connection_timeout, Duration::from_secs(1));
        assert_eq!(config.busy_timeout, Duration::from_millis(250));
    }

    #[rstest]
    fn pool_error_display() {
        let checkout_err = PoolError::checkout("timed out");
        let build_err = PoolError::build("unable to open database file");

        assert!(checkout_err.to_string().contains("timed out"));
        assert!(build_err.to_string().contains("unable to open"));
    }

    #[tokio::test]
    async fn connections_apply_the_busy_timeout() {
        use diesel::sql_types::BigInt;
        use diesel_async::RunQueryDsl;

        #[derive(diesel::QueryableByName)]
        struct Timeout {
            #[diesel(sql_type = BigInt)]
            timeout: i64,
        }

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("pool.db");
        let config = PoolConfig::new(path.to_string_lossy())
            .with_max_size(1)
            .with_busy_timeout(Duration::from_millis(1234));
        let pool = DbPool::new(config).await.expect("pool builds");
        let mut conn = pool.get().await.expect("checkout");

        let row: Timeout = diesel::sql_query("PRAGMA busy_timeout")
            .get_result(&mut *conn)
            .await
            .expect("pragma query");
        assert_eq!(row.timeout, 1234);
    }
}
