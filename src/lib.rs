//! Banking microservices.
//!
//! Three cooperating HTTP services, each with its own PostgreSQL database:
//!
//! - **customer-ms**: customer registry, unique by DNI
//! - **account-ms**: accounts and balances; asks customer-ms whether an owner exists
//! - **transaction-ms**: deposits, withdrawals and transfers; reads and writes
//!   balances through account-ms and keeps the transaction history
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Inter-service calls**: reqwest behind the traits in [`clients`]
//! - **Format**: JSON requests/responses

pub mod app;
pub mod clients;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
