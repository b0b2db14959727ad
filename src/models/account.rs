//! Account data models and API request/response types.
//!
//! This module defines:
//! - `Account`: Database entity representing an account
//! - `NewAccount`: Values for an account that has not been persisted yet
//! - `CreateAccountRequest` / `UpdateBalanceRequest`: Request bodies
//! - `AccountResponse` / `BalanceAndTypeResponse`: Response bodies

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of account. Stored as the Postgres enum `account_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "account_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Savings,
    Checking,
}

/// Represents an account record from the database.
///
/// # Database Table
///
/// Maps to the `accounts` table. Each account:
/// - Is addressed publicly by `account_number`, not by `id`
/// - Belongs to one customer of the customer service (via `customer_id`)
/// - Never holds a negative balance (enforced by CHECK constraint)
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Account {
    /// Database surrogate key
    pub id: i32,

    /// Ten-digit public identifier, generated on creation
    pub account_number: String,

    pub balance: Decimal,

    pub account_type: AccountType,

    /// Customer id in the customer service's database
    ///
    /// Not a foreign key: the services do not share storage.
    pub customer_id: i32,
}

/// An account about to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub account_number: String,
    pub balance: Decimal,
    pub account_type: AccountType,
    pub customer_id: i32,
}

/// Request body for creating a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "balance": 1000.0,
///   "account_type": "SAVINGS",
///   "customer_id": 1
/// }
/// ```
///
/// # Validation
///
/// - `customer_id`: must exist in the customer service
/// - `balance`: must be greater than 0
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateAccountRequest {
    pub balance: Decimal,
    pub account_type: AccountType,
    pub customer_id: i32,
}

/// Request body for replacing an account's balance.
///
/// # JSON Example
///
/// ```json
/// { "new_balance": 1500.0 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateBalanceRequest {
    pub new_balance: Decimal,
}

/// Response body for account endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "account_number": "1234567890",
///   "balance": 1000.0,
///   "account_type": "SAVINGS",
///   "customer_id": 1
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: i32,
    pub account_number: String,
    pub balance: Decimal,
    pub account_type: AccountType,
    pub customer_id: i32,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            account_number: account.account_number,
            balance: account.balance,
            account_type: account.account_type,
            customer_id: account.customer_id,
        }
    }
}

/// Reduced view of an account: only balance and type.
///
/// Returned to callers (such as the transaction service) that need to
/// reason about a balance without the rest of the account.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceAndTypeResponse {
    pub balance: Decimal,
    pub account_type: AccountType,
}

impl From<&Account> for BalanceAndTypeResponse {
    fn from(account: &Account) -> Self {
        Self {
            balance: account.balance,
            account_type: account.account_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn account_type_uses_upper_case_on_the_wire() {
        let json = serde_json::to_string(&AccountType::Savings).unwrap();
        assert_eq!(json, "\"SAVINGS\"");

        let parsed: AccountType = serde_json::from_str("\"CHECKING\"").unwrap();
        assert_eq!(parsed, AccountType::Checking);
    }

    #[test]
    fn create_request_accepts_numeric_balance() {
        let request: CreateAccountRequest = serde_json::from_str(
            r#"{"balance": 1000.0, "account_type": "SAVINGS", "customer_id": 1}"#,
        )
        .unwrap();

        assert_eq!(request.balance, dec!(1000));
        assert_eq!(request.account_type, AccountType::Savings);
        assert_eq!(request.customer_id, 1);
    }

    #[test]
    fn projection_keeps_only_balance_and_type() {
        let account = Account {
            id: 7,
            account_number: "1234567890".to_string(),
            balance: dec!(250.50),
            account_type: AccountType::Checking,
            customer_id: 3,
        };

        let projection = BalanceAndTypeResponse::from(&account);
        let json = serde_json::to_value(projection).unwrap();

        assert_eq!(json.as_object().unwrap().len(), 2);
        assert_eq!(projection.balance, dec!(250.50));
        assert_eq!(projection.account_type, AccountType::Checking);
    }
}
