//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They validate requests, enforce domain rules, and talk to repositories
//! and remote services through traits.

pub mod account_service;
pub mod customer_service;
pub mod money;
pub mod transaction_service;

pub use account_service::AccountService;
pub use customer_service::CustomerService;
pub use transaction_service::TransactionService;
