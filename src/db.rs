//! Database connection pool and migration management.
//!
//! Each service owns its own database, so each one has its own migration
//! directory under `migrations/`.

use sqlx::{Pool, Postgres};

/// Type alias for PostgreSQL connection pool.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool.
///
/// The pool is shared by all requests handled by one service process.
///
/// # Configuration
///
/// - Maximum connections: 5
/// - Connections are created lazily as needed
///
/// # Errors
///
/// Returns an error if the connection string is invalid, the server cannot be
/// reached or authentication fails.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Run the account service migrations from `migrations/accounts`.
///
/// Migrations are embedded at compile time and tracked in `_sqlx_migrations`,
/// so each one runs only once per database.
pub async fn run_account_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations/accounts").run(pool).await
}

/// Run the customer service migrations from `migrations/customers`.
pub async fn run_customer_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations/customers").run(pool).await
}

/// Run the transaction service migrations from `migrations/transactions`.
pub async fn run_transaction_migrations(
    pool: &DbPool,
) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations/transactions").run(pool).await
}
