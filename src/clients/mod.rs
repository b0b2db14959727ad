//! Clients for calls between services.

pub mod account_client;
pub mod customer_client;

pub use account_client::{AccountGateway, HttpAccountClient};
pub use customer_client::{CustomerExistenceChecker, HttpCustomerClient};

#[cfg(test)]
pub use account_client::MockAccountGateway;
#[cfg(test)]
pub use customer_client::MockCustomerExistenceChecker;
