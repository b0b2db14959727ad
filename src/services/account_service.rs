//! Account service - business rules for accounts and their balances.
//!
//! This service handles:
//! - Customer existence checks before an account is opened
//! - Initial and updated balance validation
//! - Account number generation
//!
//! # Concurrency
//!
//! Balance updates are a plain read-modify-write on one row without locking.
//! Two updates racing on the same account number both succeed and the last
//! write wins.

use crate::{
    clients::CustomerExistenceChecker,
    error::AppError,
    models::account::{
        Account, AccountResponse, BalanceAndTypeResponse, CreateAccountRequest, NewAccount,
        UpdateBalanceRequest,
    },
    repositories::AccountRepository,
    services::money::ensure_money_scale,
};
use rand::Rng;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Number of digits in a generated account number.
const ACCOUNT_NUMBER_LEN: usize = 10;

/// Fresh account numbers tried before giving up on a collision streak.
const ACCOUNT_NUMBER_ATTEMPTS: usize = 5;

/// Business operations of the account service.
#[derive(Clone)]
pub struct AccountService {
    accounts: Arc<dyn AccountRepository>,
    customers: Arc<dyn CustomerExistenceChecker>,
}

impl AccountService {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        customers: Arc<dyn CustomerExistenceChecker>,
    ) -> Self {
        Self {
            accounts,
            customers,
        }
    }

    /// List every account.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound`: there are no accounts at all
    pub async fn list_all_accounts(&self) -> Result<Vec<AccountResponse>, AppError> {
        let accounts = self.accounts.find_all().await?;

        if accounts.is_empty() {
            return Err(AppError::ResourceNotFound("no accounts found".to_string()));
        }

        Ok(accounts.into_iter().map(Into::into).collect())
    }

    /// Open a new account for an existing customer.
    ///
    /// # Process
    ///
    /// 1. Ask the customer service whether the customer exists
    /// 2. Validate the initial balance
    /// 3. Generate an account number and persist the account, drawing a new
    ///    number if the first one is already taken
    ///
    /// # Errors
    ///
    /// - `BadRequest`: customer does not exist, or balance is not positive
    ///   or has more than two decimal places
    /// - `RemoteService`: customer service could not be asked
    /// - `AccountNumberUnavailable`: every generated number was taken
    pub async fn create_account(
        &self,
        request: CreateAccountRequest,
    ) -> Result<AccountResponse, AppError> {
        if !self.customers.exists(request.customer_id).await? {
            return Err(AppError::BadRequest("customer does not exist".to_string()));
        }

        if request.balance <= Decimal::ZERO {
            return Err(AppError::BadRequest(
                "initial balance must be greater than 0".to_string(),
            ));
        }
        ensure_money_scale(request.balance, "balance")?;

        let account = self.insert_with_fresh_number(request).await?;

        tracing::info!(
            "Account {} opened for customer {}",
            account.account_number,
            account.customer_id
        );

        Ok(account.into())
    }

    /// # Errors
    ///
    /// - `ResourceNotFound`: no account with this id
    pub async fn get_account_by_id(&self, id: i32) -> Result<AccountResponse, AppError> {
        let account = self.find_by_id(id).await?;
        Ok(account.into())
    }

    /// # Errors
    ///
    /// - `ResourceNotFound`: no account with this id
    pub async fn delete_account_by_id(&self, id: i32) -> Result<(), AppError> {
        let account = self.find_by_id(id).await?;
        let account_number = account.account_number.clone();

        self.accounts.delete(account).await?;
        tracing::info!("Account {} deleted", account_number);

        Ok(())
    }

    /// Replace the balance of the account with the given number.
    ///
    /// The stored balance becomes exactly `request.new_balance`.
    ///
    /// # Errors
    ///
    /// - `BadRequest`: the new balance is negative or has more than two
    ///   decimal places
    /// - `ResourceNotFound`: no account with this number
    pub async fn update_account_balance(
        &self,
        account_number: &str,
        request: UpdateBalanceRequest,
    ) -> Result<(), AppError> {
        if request.new_balance < Decimal::ZERO {
            return Err(AppError::BadRequest(
                "balance cannot be negative".to_string(),
            ));
        }
        ensure_money_scale(request.new_balance, "new_balance")?;

        let mut account = self.find_by_account_number(account_number).await?;
        account.balance = request.new_balance;

        self.accounts.save(account).await?;
        tracing::info!(
            "Balance of account {} set to {}",
            account_number,
            request.new_balance
        );

        Ok(())
    }

    /// # Errors
    ///
    /// - `ResourceNotFound`: no account with this number
    pub async fn get_account_balance_and_type(
        &self,
        account_number: &str,
    ) -> Result<BalanceAndTypeResponse, AppError> {
        let account = self.find_by_account_number(account_number).await?;
        Ok(BalanceAndTypeResponse::from(&account))
    }

    async fn insert_with_fresh_number(
        &self,
        request: CreateAccountRequest,
    ) -> Result<Account, AppError> {
        for _ in 0..ACCOUNT_NUMBER_ATTEMPTS {
            let account_number = generate_account_number();
            let inserted = self
                .accounts
                .insert(NewAccount {
                    account_number: account_number.clone(),
                    balance: request.balance,
                    account_type: request.account_type,
                    customer_id: request.customer_id,
                })
                .await?;

            match inserted {
                Some(account) => return Ok(account),
                None => tracing::warn!("Account number {} already taken", account_number),
            }
        }

        Err(AppError::AccountNumberUnavailable)
    }

    async fn find_by_id(&self, id: i32) -> Result<Account, AppError> {
        self.accounts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::ResourceNotFound(format!("account does not exist with ID: {}", id)))
    }

    async fn find_by_account_number(&self, account_number: &str) -> Result<Account, AppError> {
        self.accounts
            .find_by_account_number(account_number)
            .await?
            .ok_or_else(|| AppError::ResourceNotFound("account not found".to_string()))
    }
}

/// Random ten-digit account number.
///
/// Uniqueness is enforced by the `accounts.account_number` constraint; a
/// collision makes the repository insert return `None`.
fn generate_account_number() -> String {
    let mut rng = rand::rng();
    (0..ACCOUNT_NUMBER_LEN)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}
