//! Account persistence.

use crate::{
    db::DbPool,
    error::AppError,
    models::account::{Account, NewAccount},
};
use async_trait::async_trait;

/// Persistence operations the account service depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// All accounts, ordered by id.
    async fn find_all(&self) -> Result<Vec<Account>, AppError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Account>, AppError>;

    async fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> Result<Option<Account>, AppError>;

    /// Insert a new account and return the stored row.
    ///
    /// Returns `None` without inserting if the account number is taken.
    async fn insert(&self, account: NewAccount) -> Result<Option<Account>, AppError>;

    /// Persist the mutable fields of an existing account.
    async fn save(&self, account: Account) -> Result<Account, AppError>;

    async fn delete(&self, account: Account) -> Result<(), AppError>;
}

/// PostgreSQL implementation of [`AccountRepository`].
#[derive(Debug, Clone)]
pub struct PgAccountRepository {
    pool: DbPool,
}

impl PgAccountRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn find_all(&self) -> Result<Vec<Account>, AppError> {
        let accounts = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, account_number, balance, account_type, customer_id
            FROM accounts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(accounts)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, account_number, balance, account_type, customer_id
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn find_by_account_number(
        &self,
        account_number: &str,
    ) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, account_number, balance, account_type, customer_id
            FROM accounts
            WHERE account_number = $1
            "#,
        )
        .bind(account_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn insert(&self, account: NewAccount) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (account_number, balance, account_type, customer_id)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (account_number) DO NOTHING
            RETURNING id, account_number, balance, account_type, customer_id
            "#,
        )
        .bind(account.account_number)
        .bind(account.balance)
        .bind(account.account_type)
        .bind(account.customer_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn save(&self, account: Account) -> Result<Account, AppError> {
        // Plain overwrite: concurrent writers to the same row are last-writer-wins.
        let account = sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts
            SET balance = $1,
                account_type = $2,
                customer_id = $3,
                updated_at = NOW()
            WHERE id = $4
            RETURNING id, account_number, balance, account_type, customer_id
            "#,
        )
        .bind(account.balance)
        .bind(account.account_type)
        .bind(account.customer_id)
        .bind(account.id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::ResourceNotFound("account not found".to_string()))?;

        Ok(account)
    }

    async fn delete(&self, account: Account) -> Result<(), AppError> {
        sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(account.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
