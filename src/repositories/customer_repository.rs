//! Customer persistence.

use crate::{
    db::DbPool,
    error::AppError,
    models::customer::{Customer, NewCustomer},
};
use async_trait::async_trait;

/// Persistence operations the customer service depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// All customers, ordered by id.
    async fn find_all(&self) -> Result<Vec<Customer>, AppError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, AppError>;

    async fn exists_by_id(&self, id: i32) -> Result<bool, AppError>;

    async fn exists_by_dni(&self, dni: &str) -> Result<bool, AppError>;

    /// Insert a new customer and return the stored row.
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, AppError>;

    /// Persist every mutable field of an existing customer.
    async fn save(&self, customer: Customer) -> Result<Customer, AppError>;

    async fn delete(&self, customer: Customer) -> Result<(), AppError>;
}

/// PostgreSQL implementation of [`CustomerRepository`].
#[derive(Debug, Clone)]
pub struct PgCustomerRepository {
    pool: DbPool,
}

impl PgCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Report a lost race on the unique `dni` column as a DNI conflict.
fn map_unique_dni(err: sqlx::Error, dni: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::DniAlreadyExists(dni.to_string())
        }
        _ => AppError::Database(err),
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT id, name, surname, dni, email FROM customers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT id, name, surname, dni, email FROM customers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customers WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn exists_by_dni(&self, dni: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customers WHERE dni = $1)")
                .bind(dni)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn insert(&self, customer: NewCustomer) -> Result<Customer, AppError> {
        sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (name, surname, dni, email)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, surname, dni, email
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.surname)
        .bind(&customer.dni)
        .bind(&customer.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_dni(e, &customer.dni))
    }

    async fn save(&self, customer: Customer) -> Result<Customer, AppError> {
        sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET name = $1,
                surname = $2,
                dni = $3,
                email = $4,
                updated_at = NOW()
            WHERE id = $5
            RETURNING id, name, surname, dni, email
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.surname)
        .bind(&customer.dni)
        .bind(&customer.email)
        .bind(customer.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_dni(e, &customer.dni))?
        .ok_or_else(|| {
            AppError::ResourceNotFound(format!("customer not found with ID: {}", customer.id))
        })
    }

    async fn delete(&self, customer: Customer) -> Result<(), AppError> {
        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(customer.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
