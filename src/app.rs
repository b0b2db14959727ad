//! Router assembly for the three microservices.
//!
//! Each service router carries its own state; the binaries merge one of
//! them with [`health_router`] before serving.

use crate::{
    db::DbPool,
    handlers::{self, health::HealthState},
    services::{AccountService, CustomerService, TransactionService},
};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub fn account_router(service: AccountService) -> Router {
    Router::new()
        .route(
            "/accounts",
            get(handlers::accounts::list_accounts).post(handlers::accounts::create_account),
        )
        .route(
            "/accounts/{id}",
            get(handlers::accounts::get_account).delete(handlers::accounts::delete_account),
        )
        // Balance endpoints are keyed by account number, not id
        .route(
            "/accounts/number/{account_number}/balance",
            get(handlers::accounts::get_balance_and_type).put(handlers::accounts::update_balance),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

pub fn customer_router(service: CustomerService) -> Router {
    Router::new()
        .route(
            "/customers",
            get(handlers::customers::list_customers).post(handlers::customers::create_customer),
        )
        .route(
            "/customers/{id}",
            get(handlers::customers::get_customer)
                .put(handlers::customers::update_customer)
                .delete(handlers::customers::delete_customer),
        )
        .route(
            "/customers/{id}/exists",
            get(handlers::customers::customer_exists),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

pub fn transaction_router(service: TransactionService) -> Router {
    Router::new()
        .route(
            "/transactions",
            get(handlers::transactions::list_transactions),
        )
        .route(
            "/transactions/deposit",
            post(handlers::transactions::create_deposit),
        )
        .route(
            "/transactions/withdrawal",
            post(handlers::transactions::create_withdrawal),
        )
        .route(
            "/transactions/transfer",
            post(handlers::transactions::create_transfer),
        )
        .route(
            "/transactions/{id}",
            get(handlers::transactions::get_transaction),
        )
        .route(
            "/transactions/account/{account_number}",
            get(handlers::transactions::list_account_transactions),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// `GET /health`, probing the service's own database.
pub fn health_router(pool: DbPool, service: &'static str) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .with_state(HealthState { pool, service })
}
