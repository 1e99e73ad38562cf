//! Process initialization: logging, the database connection and shutdown.

use std::{fmt::Display, future::Future, time::Duration};

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

/// How many times to try reaching the database before giving up.
const DB_CONNECT_ATTEMPTS: u32 = 5;
/// Pause between database connection attempts.
const DB_RETRY_INTERVAL: Duration = Duration::from_secs(5);
/// Upper bound for a single connection attempt.
const DB_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Readiness policy for the database connection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub attempts: u32,
    pub interval: Duration,
    pub connect_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: DB_CONNECT_ATTEMPTS,
            interval: DB_RETRY_INTERVAL,
            connect_timeout: DB_CONNECT_TIMEOUT,
        }
    }
}

const DEFAULT_LOG_FILTER: &str = "foodgram=info,tower_http=info";

/// Installs the global `tracing` subscriber.
///
/// The filter comes from `RUST_LOG` when set and falls back to info level for
/// this crate and the HTTP trace layer.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// The database container may still be starting when the backend comes up, so
/// the connection is retried a fixed number of times before failing.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Database unreachable after every attempt, or a migration failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};

    let db = connect_with_retry(&config.database_url, RetryPolicy::default()).await?;

    Migrator::up(&db, None).await?;
    tracing::info!("Database migrations applied");

    Ok(db)
}

async fn connect_with_retry(
    database_url: &str,
    policy: RetryPolicy,
) -> Result<DatabaseConnection, DbErr> {
    with_retry(policy, || {
        let mut opt = ConnectOptions::new(database_url);
        opt.connect_timeout(policy.connect_timeout)
            .acquire_timeout(policy.connect_timeout)
            .sqlx_logging(false);

        Database::connect(opt)
    })
    .await
}

/// Runs `op` until it succeeds or `policy.attempts` attempts have failed,
/// sleeping `policy.interval` between attempts. Returns the last error.
async fn with_retry<T, E, F, Fut>(policy: RetryPolicy, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempt = 1;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < policy.attempts => {
                tracing::warn!(
                    "Database not ready (attempt {}/{}): {}",
                    attempt,
                    policy.attempts,
                    err
                );
                attempt += 1;
                tokio::time::sleep(policy.interval).await;
            }
            Err(err) => return Err(err),
        }
    }
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM from the container runtime.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
