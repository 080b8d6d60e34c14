//! Ringside Storage
//!
//! `SQLite` database layer for the Ringside marketplace backend.
//!
//! This crate provides persistent storage for member accounts. Each entity
//! owns its own queries in a vertical slice module; the `LocalStore` context
//! ties the slices together behind the `AccountStore` trait from
//! `ringside-core`.
//!
//! # Example
//!
//! ```rust,no_run
//! use ringside_storage::{create_pool, run_migrations, LocalStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create database connection
//! let pool = create_pool("sqlite://ringside.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = LocalStore::new(pool);
//! let accounts = ringside_storage::accounts::get_all(store.pool()).await?;
//! # Ok(())
//! # }
//! ```

mod context;

// Vertical slices
pub mod accounts;

pub use context::LocalStore;

// Type alias used by server code
pub type Database = LocalStore;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://ringside.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
