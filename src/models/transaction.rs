//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `Transaction`: Database entity recording a completed balance movement
//! - Request types for deposit, withdrawal, and transfer operations
//! - `TransactionResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of balance movement. Stored as the Postgres enum `transaction_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "transaction_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Transfer,
}

/// Represents a transaction record from the database.
///
/// # Database Table
///
/// Maps to the `transactions` table. Each transaction references one or two
/// account numbers, depending on its type:
/// - Deposit: destination only
/// - Withdrawal: source only
/// - Transfer: both
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Transaction {
    pub id: Uuid,

    pub transaction_type: TransactionType,

    /// Always positive (enforced by CHECK constraint)
    pub amount: Decimal,

    /// Account the money left
    pub source_account: Option<String>,

    /// Account the money arrived at
    pub destination_account: Option<String>,

    pub created_at: DateTime<Utc>,
}

/// A transaction about to be recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub source_account: Option<String>,
    pub destination_account: Option<String>,
}

impl NewTransaction {
    pub fn deposit(account_number: &str, amount: Decimal) -> Self {
        Self {
            transaction_type: TransactionType::Deposit,
            amount,
            source_account: None,
            destination_account: Some(account_number.to_string()),
        }
    }

    pub fn withdrawal(account_number: &str, amount: Decimal) -> Self {
        Self {
            transaction_type: TransactionType::Withdrawal,
            amount,
            source_account: Some(account_number.to_string()),
            destination_account: None,
        }
    }

    pub fn transfer(source: &str, destination: &str, amount: Decimal) -> Self {
        Self {
            transaction_type: TransactionType::Transfer,
            amount,
            source_account: Some(source.to_string()),
            destination_account: Some(destination.to_string()),
        }
    }
}

/// Request to deposit money into an account.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_number": "1234567890",
///   "amount": 500.0
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DepositRequest {
    pub account_number: String,
    pub amount: Decimal,
}

/// Request to withdraw money from an account.
///
/// # Validation
///
/// - Amount must be positive
/// - Account balance must cover the amount
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WithdrawalRequest {
    pub account_number: String,
    pub amount: Decimal,
}

/// Request to transfer money between two accounts.
///
/// # JSON Example
///
/// ```json
/// {
///   "source_account": "1234567890",
///   "destination_account": "0987654321",
///   "amount": 250.0
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransferRequest {
    pub source_account: String,
    pub destination_account: String,
    pub amount: Decimal,
}

/// Response returned for transaction operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: Uuid,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    pub source_account: Option<String>,
    pub destination_account: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Transaction> for TransactionResponse {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: transaction.id,
            transaction_type: transaction.transaction_type,
            amount: transaction.amount,
            source_account: transaction.source_account,
            destination_account: transaction.destination_account,
            created_at: transaction.created_at,
        }
    }
}
