//! Persistence layer.
//!
//! Services depend on the repository traits; the `Pg*` types are the
//! PostgreSQL implementations wired in by the binaries.

pub mod account_repository;
pub mod customer_repository;
pub mod transaction_repository;

pub use account_repository::{AccountRepository, PgAccountRepository};
pub use customer_repository::{CustomerRepository, PgCustomerRepository};
pub use transaction_repository::{PgTransactionRepository, TransactionRepository};

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
#[cfg(test)]
pub use transaction_repository::MockTransactionRepository;
