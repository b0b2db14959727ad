//! Data models representing database entities and API payloads.

/// Account entity, requests, responses and the balance projection
pub mod account;
/// Customer entity, requests and responses
pub mod customer;
/// Transaction entity, requests and responses
pub mod transaction;
