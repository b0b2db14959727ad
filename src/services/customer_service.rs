//! Customer service - business rules for customers.
//!
//! Validation runs before the repository is touched: required fields,
//! DNI length and email format first, DNI uniqueness second.

use crate::{
    clients::CustomerExistenceChecker,
    error::AppError,
    models::customer::{Customer, CustomerRequest, CustomerResponse, NewCustomer},
    repositories::CustomerRepository,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Exact length of a DNI.
const DNI_LEN: usize = 8;

/// Business operations of the customer service.
#[derive(Clone)]
pub struct CustomerService {
    customers: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self { customers }
    }

    /// # Errors
    ///
    /// - `ResourceNotFound`: there are no customers at all
    pub async fn list_all_customers(&self) -> Result<Vec<CustomerResponse>, AppError> {
        let customers = self.customers.find_all().await?;

        if customers.is_empty() {
            return Err(AppError::ResourceNotFound("no customers found".to_string()));
        }

        Ok(customers.into_iter().map(Into::into).collect())
    }

    /// Register a new customer.
    ///
    /// # Errors
    ///
    /// - `BadRequest`: a required field is empty, the DNI is not 8 characters
    ///   long, or the email is malformed
    /// - `DniAlreadyExists`: another customer already has this DNI
    pub async fn create_customer(
        &self,
        request: CustomerRequest,
    ) -> Result<CustomerResponse, AppError> {
        validate_customer_request(&request)?;

        if self.customers.exists_by_dni(&request.dni).await? {
            return Err(AppError::DniAlreadyExists(request.dni));
        }

        let customer = self.customers.insert(NewCustomer::from(request)).await?;
        tracing::info!("Customer {} created", customer.id);

        Ok(customer.into())
    }

    /// # Errors
    ///
    /// - `ResourceNotFound`: no customer with this id
    pub async fn get_customer_by_id(&self, id: i32) -> Result<CustomerResponse, AppError> {
        let customer = self.find_by_id(id).await?;
        Ok(customer.into())
    }

    /// # Errors
    ///
    /// - `ResourceNotFound`: no customer with this id
    pub async fn delete_customer_by_id(&self, id: i32) -> Result<(), AppError> {
        let customer = self.find_by_id(id).await?;

        self.customers.delete(customer).await?;
        tracing::info!("Customer {} deleted", id);

        Ok(())
    }

    /// Replace every mutable field of an existing customer.
    ///
    /// # Errors
    ///
    /// - `BadRequest`: same validation as [`Self::create_customer`]
    /// - `ResourceNotFound`: no customer with this id
    /// - `DniAlreadyExists`: the DNI changes to one that is already registered
    pub async fn update_customer_by_id(
        &self,
        id: i32,
        request: CustomerRequest,
    ) -> Result<(), AppError> {
        validate_customer_request(&request)?;

        let mut customer = self.find_by_id(id).await?;

        if customer.dni != request.dni && self.customers.exists_by_dni(&request.dni).await? {
            return Err(AppError::DniAlreadyExists(request.dni));
        }

        customer.apply(request);
        self.customers.save(customer).await?;
        tracing::info!("Customer {} updated", id);

        Ok(())
    }

    /// Whether a customer with this id exists. Absence is `Ok(false)`.
    pub async fn check_if_customer_exists(&self, id: i32) -> Result<bool, AppError> {
        self.customers.exists_by_id(id).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Customer, AppError> {
        self.customers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::ResourceNotFound(format!("customer not found with ID: {}", id)))
    }
}

/// Lets the account service check customers in-process instead of over HTTP.
#[async_trait]
impl CustomerExistenceChecker for CustomerService {
    async fn exists(&self, customer_id: i32) -> Result<bool, AppError> {
        self.check_if_customer_exists(customer_id).await
    }
}

fn validate_customer_request(request: &CustomerRequest) -> Result<(), AppError> {
    let required = [
        ("name", &request.name),
        ("surname", &request.surname),
        ("dni", &request.dni),
        ("email", &request.email),
    ];

    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(AppError::BadRequest(format!(
            "field '{}' is required and cannot be empty",
            field
        )));
    }

    if request.dni.chars().count() != DNI_LEN {
        return Err(AppError::BadRequest(format!(
            "DNI must be exactly {} characters",
            DNI_LEN
        )));
    }

    if !validator::validate_email(request.email.as_str()) {
        return Err(AppError::BadRequest("invalid email format".to_string()));
    }

    Ok(())
}
