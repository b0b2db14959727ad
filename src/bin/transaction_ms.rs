//! Transaction service entry point.
//!
//! Requires `ACCOUNT_SERVICE_URL`; every movement reads and writes balances
//! through the account service.

use anyhow::Context;
use banking_microservices::{
    app, clients::HttpAccountClient, config::Config, db, repositories::PgTransactionRepository,
    server, services::TransactionService,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_tracing();

    let config = Config::from_env()?;
    let account_service_url = config
        .account_service_url
        .as_deref()
        .context("ACCOUNT_SERVICE_URL must be set for transaction-ms")?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    db::run_transaction_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let accounts = HttpAccountClient::new(account_service_url, config.remote_timeout())?;

    let service = TransactionService::new(
        Arc::new(PgTransactionRepository::new(pool.clone())),
        Arc::new(accounts),
    );

    let app = app::transaction_router(service).merge(app::health_router(pool, "transaction-ms"));

    server::serve(app, config.server_port).await
}
