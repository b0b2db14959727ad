//! Error types and HTTP error response handling.
//!
//! The three domain kinds (`ResourceNotFound`, `BadRequest`,
//! `DniAlreadyExists`) are shared by all services. Callers branch on the
//! variant; the message is for display only.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Domain Errors**: missing entities, validation failures, DNI conflicts
/// - **Database Errors**: any sqlx::Error from repository operations
/// - **Remote Errors**: transport or unexpected status from another service
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Requested entity does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("{0}")]
    ResourceNotFound(String),

    /// Request data failed validation.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("{0}")]
    BadRequest(String),

    /// A customer with the given DNI is already registered.
    ///
    /// Returns HTTP 409 Conflict. Carries the offending DNI.
    #[error("customer with DNI {0} already exists")]
    DniAlreadyExists(String),

    /// Every generated account number collided with an existing one.
    ///
    /// Returns HTTP 503 Service Unavailable; the request can be retried.
    #[error("could not allocate a free account number")]
    AccountNumberUnavailable,

    /// Database operation failed.
    ///
    /// Returns HTTP 500 and hides the details from the client.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A call to another service failed or returned an unexpected status.
    ///
    /// Returns HTTP 502 Bad Gateway.
    #[error("Remote service error: {0}")]
    RemoteService(#[from] reqwest::Error),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "error": {
///     "code": "resource_not_found",
///     "message": "account not found"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `ResourceNotFound` → 404 Not Found
/// - `BadRequest` → 400 Bad Request
/// - `DniAlreadyExists` → 409 Conflict
/// - `AccountNumberUnavailable` → 503 Service Unavailable
/// - `Database` → 500 Internal Server Error
/// - `RemoteService` → 502 Bad Gateway
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::ResourceNotFound(ref msg) => {
                (StatusCode::NOT_FOUND, "resource_not_found", msg.clone())
            }
            AppError::BadRequest(ref msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            AppError::DniAlreadyExists(_) => {
                (StatusCode::CONFLICT, "dni_already_exists", self.to_string())
            }
            AppError::AccountNumberUnavailable => {
                tracing::warn!("Account number generation exhausted its attempts");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "account_number_unavailable",
                    self.to_string(),
                )
            }
            AppError::Database(ref err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::RemoteService(ref err) => {
                tracing::error!("Remote service error: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    "remote_service_error",
                    "A dependent service could not be reached".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_fixed_status_codes() {
        let cases = [
            (
                AppError::ResourceNotFound("account not found".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::BadRequest("customer does not exist".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::DniAlreadyExists("12345678".into()),
                StatusCode::CONFLICT,
            ),
            (
                AppError::AccountNumberUnavailable,
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::Database(sqlx::Error::RowNotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn dni_conflict_message_names_the_dni() {
        let error = AppError::DniAlreadyExists("12345678".into());
        assert_eq!(error.to_string(), "customer with DNI 12345678 already exists");
    }
}
