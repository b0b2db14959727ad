//! Customer management HTTP handlers.
//!
//! - GET /customers - List all customers
//! - POST /customers - Register a customer
//! - GET /customers/{id} - Get customer by ID
//! - PUT /customers/{id} - Replace customer fields
//! - DELETE /customers/{id} - Delete customer
//! - GET /customers/{id}/exists - Existence probe used by the account service

use crate::{
    error::AppError,
    models::customer::{CustomerRequest, CustomerResponse},
    services::CustomerService,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

pub async fn list_customers(
    State(service): State<CustomerService>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let customers = service.list_all_customers().await?;
    Ok(Json(customers))
}

/// Register a new customer.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ana",
///   "surname": "Perez",
///   "dni": "12345678",
///   "email": "ana@example.com"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: The stored customer
/// - **Error (400)**: Missing field, DNI not 8 characters, invalid email
/// - **Error (409)**: DNI already registered
pub async fn create_customer(
    State(service): State<CustomerService>,
    Json(request): Json<CustomerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let customer = service.create_customer(request).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

pub async fn get_customer(
    State(service): State<CustomerService>,
    Path(id): Path<i32>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = service.get_customer_by_id(id).await?;
    Ok(Json(customer))
}

/// Replace every mutable field of a customer.
///
/// # Response
///
/// - **Success (200 OK)**: Empty body
/// - **Error (400)**: Validation failure
/// - **Error (404)**: Customer not found
/// - **Error (409)**: New DNI belongs to another customer
pub async fn update_customer(
    State(service): State<CustomerService>,
    Path(id): Path<i32>,
    Json(request): Json<CustomerRequest>,
) -> Result<StatusCode, AppError> {
    service.update_customer_by_id(id, request).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_customer(
    State(service): State<CustomerService>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    service.delete_customer_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Whether a customer exists.
///
/// Always 200 with a JSON boolean; a missing customer is `false`, not 404.
pub async fn customer_exists(
    State(service): State<CustomerService>,
    Path(id): Path<i32>,
) -> Result<Json<bool>, AppError> {
    let exists = service.check_if_customer_exists(id).await?;
    Ok(Json(exists))
}
