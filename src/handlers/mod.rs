//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params)
//! 2. Delegates to the owning service
//! 3. Returns HTTP response (JSON, status code)

/// Account service endpoints
pub mod accounts;
/// Customer service endpoints
pub mod customers;
pub mod health;
/// Transaction service endpoints
pub mod transactions;
