//! Transaction history persistence.

use crate::{
    db::DbPool,
    error::AppError,
    models::transaction::{NewTransaction, Transaction},
};
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence operations the transaction service depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// All transactions, oldest first.
    async fn find_all(&self) -> Result<Vec<Transaction>, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Transaction>, AppError>;

    /// Transactions where the account is the source or the destination, newest first.
    async fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> Result<Vec<Transaction>, AppError>;

    async fn insert(&self, transaction: NewTransaction) -> Result<Transaction, AppError>;
}

/// PostgreSQL implementation of [`TransactionRepository`].
#[derive(Debug, Clone)]
pub struct PgTransactionRepository {
    pool: DbPool,
}

impl PgTransactionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for PgTransactionRepository {
    async fn find_all(&self) -> Result<Vec<Transaction>, AppError> {
        let transactions = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, transaction_type, amount, source_account, destination_account, created_at
            FROM transactions
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Transaction>, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, transaction_type, amount, source_account, destination_account, created_at
            FROM transactions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(transaction)
    }

    async fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> Result<Vec<Transaction>, AppError> {
        let transactions = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, transaction_type, amount, source_account, destination_account, created_at
            FROM transactions
            WHERE source_account = $1 OR destination_account = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(account_number)
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    async fn insert(&self, transaction: NewTransaction) -> Result<Transaction, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (
                id,
                transaction_type,
                amount,
                source_account,
                destination_account
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, transaction_type, amount, source_account, destination_account, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(transaction.transaction_type)
        .bind(transaction.amount)
        .bind(transaction.source_account)
        .bind(transaction.destination_account)
        .fetch_one(&self.pool)
        .await?;

        Ok(transaction)
    }
}
