//! Customer service entry point.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run the customer migrations
//! 4. Build HTTP router and start serving

use banking_microservices::{
    app, config::Config, db, repositories::PgCustomerRepository, server,
    services::CustomerService,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::init_tracing();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    db::run_customer_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let service = CustomerService::new(Arc::new(PgCustomerRepository::new(pool.clone())));

    let app = app::customer_router(service).merge(app::health_router(pool, "customer-ms"));

    server::serve(app, config.server_port).await
}
