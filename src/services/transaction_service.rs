//! Transaction service - Core business logic for balance movements.
//!
//! This service handles:
//! - Amount validation
//! - Balance checks against the account service
//! - Balance updates through the account service
//! - Recording each completed movement
//!
//! # Atomicity
//!
//! Balances live in the account service's database, so a movement is a
//! sequence of independent remote calls. A transfer whose credit fails after
//! the debit succeeded is logged and reported as an error; it is not rolled
//! back.

use crate::{
    clients::AccountGateway,
    error::AppError,
    models::{
        account::BalanceAndTypeResponse,
        transaction::{
            DepositRequest, NewTransaction, TransactionResponse, TransferRequest,
            WithdrawalRequest,
        },
    },
    repositories::TransactionRepository,
    services::money::ensure_money_scale,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

/// Business operations of the transaction service.
#[derive(Clone)]
pub struct TransactionService {
    transactions: Arc<dyn TransactionRepository>,
    accounts: Arc<dyn AccountGateway>,
}

impl TransactionService {
    pub fn new(
        transactions: Arc<dyn TransactionRepository>,
        accounts: Arc<dyn AccountGateway>,
    ) -> Self {
        Self {
            transactions,
            accounts,
        }
    }

    /// Deposit money into an account.
    ///
    /// # Process
    ///
    /// 1. Validate amount
    /// 2. Read the current balance from the account service
    /// 3. Write back balance + amount
    /// 4. Record the transaction
    ///
    /// # Errors
    ///
    /// - `BadRequest`: amount is zero, negative, or finer than a cent
    /// - `ResourceNotFound`: account doesn't exist
    /// - `RemoteService`: account service could not be reached
    pub async fn deposit(&self, request: DepositRequest) -> Result<TransactionResponse, AppError> {
        validate_amount(request.amount)?;

        let account = self.load_account(&request.account_number).await?;
        let new_balance = account.balance + request.amount;

        self.accounts
            .update_balance(&request.account_number, new_balance)
            .await?;

        let transaction = self
            .transactions
            .insert(NewTransaction::deposit(&request.account_number, request.amount))
            .await?;

        tracing::info!(
            "Deposited {} into account {}",
            request.amount,
            request.account_number
        );

        Ok(transaction.into())
    }

    /// Withdraw money from an account.
    ///
    /// # Errors
    ///
    /// - `BadRequest`: amount is not a positive number of whole cents, or
    ///   exceeds the balance
    /// - `ResourceNotFound`: account doesn't exist
    pub async fn withdraw(
        &self,
        request: WithdrawalRequest,
    ) -> Result<TransactionResponse, AppError> {
        validate_amount(request.amount)?;

        let account = self.load_account(&request.account_number).await?;
        ensure_sufficient_balance(&account, request.amount)?;

        self.accounts
            .update_balance(&request.account_number, account.balance - request.amount)
            .await?;

        let transaction = self
            .transactions
            .insert(NewTransaction::withdrawal(
                &request.account_number,
                request.amount,
            ))
            .await?;

        tracing::info!(
            "Withdrew {} from account {}",
            request.amount,
            request.account_number
        );

        Ok(transaction.into())
    }

    /// Move money between two accounts.
    ///
    /// # Validation
    ///
    /// - Amount must be positive
    /// - Accounts must be different
    /// - Both accounts must exist
    /// - Source must have sufficient balance
    pub async fn transfer(&self, request: TransferRequest) -> Result<TransactionResponse, AppError> {
        validate_amount(request.amount)?;

        if request.source_account == request.destination_account {
            return Err(AppError::BadRequest(
                "cannot transfer to the same account".to_string(),
            ));
        }

        let source = self.load_account(&request.source_account).await?;
        let destination = self.load_account(&request.destination_account).await?;
        ensure_sufficient_balance(&source, request.amount)?;

        self.accounts
            .update_balance(&request.source_account, source.balance - request.amount)
            .await?;

        if let Err(e) = self
            .accounts
            .update_balance(
                &request.destination_account,
                destination.balance + request.amount,
            )
            .await
        {
            tracing::error!(
                "Transfer of {} debited {} but failed to credit {}: {}",
                request.amount,
                request.source_account,
                request.destination_account,
                e
            );
            return Err(e);
        }

        let transaction = self
            .transactions
            .insert(NewTransaction::transfer(
                &request.source_account,
                &request.destination_account,
                request.amount,
            ))
            .await?;

        tracing::info!(
            "Transferred {} from {} to {}",
            request.amount,
            request.source_account,
            request.destination_account
        );

        Ok(transaction.into())
    }

    /// # Errors
    ///
    /// - `ResourceNotFound`: no transactions have been recorded
    pub async fn list_transactions(&self) -> Result<Vec<TransactionResponse>, AppError> {
        let transactions = self.transactions.find_all().await?;

        if transactions.is_empty() {
            return Err(AppError::ResourceNotFound(
                "no transactions found".to_string(),
            ));
        }

        Ok(transactions.into_iter().map(Into::into).collect())
    }

    pub async fn get_transaction_by_id(&self, id: Uuid) -> Result<TransactionResponse, AppError> {
        let transaction = self
            .transactions
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::ResourceNotFound(format!("transaction not found with ID: {}", id))
            })?;

        Ok(transaction.into())
    }

    /// History of one account, newest first.
    ///
    /// # Errors
    ///
    /// - `ResourceNotFound`: the account has no recorded transactions
    pub async fn list_transactions_by_account(
        &self,
        account_number: &str,
    ) -> Result<Vec<TransactionResponse>, AppError> {
        let transactions = self
            .transactions
            .find_by_account_number(account_number)
            .await?;

        if transactions.is_empty() {
            return Err(AppError::ResourceNotFound(format!(
                "no transactions found for account {}",
                account_number
            )));
        }

        Ok(transactions.into_iter().map(Into::into).collect())
    }

    async fn load_account(&self, account_number: &str) -> Result<BalanceAndTypeResponse, AppError> {
        self.accounts
            .balance_and_type(account_number)
            .await?
            .ok_or_else(|| AppError::ResourceNotFound(format!("account not found: {}", account_number)))
    }
}

fn validate_amount(amount: Decimal) -> Result<(), AppError> {
    if amount <= Decimal::ZERO {
        return Err(AppError::BadRequest(
            "amount must be greater than 0".to_string(),
        ));
    }
    ensure_money_scale(amount, "amount")
}

fn ensure_sufficient_balance(
    account: &BalanceAndTypeResponse,
    amount: Decimal,
) -> Result<(), AppError> {
    if account.balance < amount {
        return Err(AppError::BadRequest("insufficient balance".to_string()));
    }
    Ok(())
}
