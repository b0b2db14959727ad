//! Account service entry point.
//!
//! Requires `CUSTOMER_SERVICE_URL` in addition to the common settings, since
//! account creation checks that the owning customer exists.

use anyhow::Context;
use banking_microservices::{
    app, clients::HttpCustomerClient, config::Config, db, repositories::PgAccountRepository,
    server, services::AccountService,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_tracing();

    let config = Config::from_env()?;
    let customer_service_url = config
        .customer_service_url
        .as_deref()
        .context("CUSTOMER_SERVICE_URL must be set for account-ms")?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    db::run_account_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let customers = HttpCustomerClient::new(customer_service_url, config.remote_timeout())?;
    tracing::info!("Customer service at {}", customer_service_url);

    let service = AccountService::new(
        Arc::new(PgAccountRepository::new(pool.clone())),
        Arc::new(customers),
    );

    let app = app::account_router(service).merge(app::health_router(pool, "account-ms"));

    server::serve(app, config.server_port).await
}
