//! Account management HTTP handlers.
//!
//! This module implements the account service API:
//! - GET /accounts - List all accounts
//! - POST /accounts - Create new account
//! - GET /accounts/{id} - Get account by ID
//! - DELETE /accounts/{id} - Delete account by ID
//! - PUT /accounts/number/{account_number}/balance - Replace balance
//! - GET /accounts/number/{account_number}/balance - Balance and type

use crate::{
    error::AppError,
    models::account::{
        AccountResponse, BalanceAndTypeResponse, CreateAccountRequest, UpdateBalanceRequest,
    },
    services::AccountService,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// List every account.
///
/// # Response
///
/// - **Success (200 OK)**: Array of accounts
/// - **Error (404)**: No accounts exist
pub async fn list_accounts(
    State(service): State<AccountService>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    let accounts = service.list_all_accounts().await?;
    Ok(Json(accounts))
}

/// Create a new account for an existing customer.
///
/// # Endpoint
///
/// `POST /accounts`
///
/// # Request Body
///
/// ```json
/// {
///   "balance": 1000.0,
///   "account_type": "SAVINGS",
///   "customer_id": 1
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: The created account with its generated number
/// - **Error (400)**: Customer does not exist, or balance is not a positive
///   amount of whole cents
/// - **Error (502)**: Customer service unreachable
/// - **Error (503)**: No free account number could be drawn
pub async fn create_account(
    State(service): State<AccountService>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<impl IntoResponse, AppError> {
    let account = service.create_account(request).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

pub async fn get_account(
    State(service): State<AccountService>,
    Path(id): Path<i32>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = service.get_account_by_id(id).await?;
    Ok(Json(account))
}

/// Delete an account.
///
/// # Response
///
/// - **Success (204 No Content)**
/// - **Error (404)**: Account not found
pub async fn delete_account(
    State(service): State<AccountService>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    service.delete_account_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Replace the balance of an account, addressed by account number.
///
/// Called by the transaction service after it has computed the new balance.
///
/// # Request Body
///
/// ```json
/// { "new_balance": 1500.0 }
/// ```
///
/// # Response
///
/// - **Success (204 No Content)**
/// - **Error (400)**: Negative balance, or more than two decimal places
/// - **Error (404)**: Account not found
pub async fn update_balance(
    State(service): State<AccountService>,
    Path(account_number): Path<String>,
    Json(request): Json<UpdateBalanceRequest>,
) -> Result<StatusCode, AppError> {
    service
        .update_account_balance(&account_number, request)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_balance_and_type(
    State(service): State<AccountService>,
    Path(account_number): Path<String>,
) -> Result<Json<BalanceAndTypeResponse>, AppError> {
    let projection = service.get_account_balance_and_type(&account_number).await?;
    Ok(Json(projection))
}

#[cfg(test)]
mod tests {
    use crate::{
        app,
        clients::MockCustomerExistenceChecker,
        models::account::{Account, AccountType, NewAccount},
        repositories::MockAccountRepository,
        services::AccountService,
    };
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use mockall::predicate::eq;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router(accounts: MockAccountRepository, customers: MockCustomerExistenceChecker) -> Router {
        app::account_router(AccountService::new(Arc::new(accounts), Arc::new(customers)))
    }

    fn account() -> Account {
        Account {
            id: 7,
            account_number: "1234567890".to_string(),
            balance: dec!(250),
            account_type: AccountType::Checking,
            customer_id: 1,
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_account_returns_created() {
        let mut customers = MockCustomerExistenceChecker::new();
        customers.expect_exists().with(eq(1)).returning(|_| Ok(true));

        let mut accounts = MockAccountRepository::new();
        accounts.expect_insert().times(1).returning(|new: NewAccount| {
            Ok(Some(Account {
                id: 1,
                account_number: new.account_number,
                balance: new.balance,
                account_type: new.account_type,
                customer_id: new.customer_id,
            }))
        });

        let response = router(accounts, customers)
            .oneshot(
                Request::post("/accounts")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"balance": 1000.0, "account_type": "SAVINGS", "customer_id": 1}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["account_type"], "SAVINGS");
        assert_eq!(json["account_number"].as_str().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn create_account_for_unknown_customer_is_bad_request() {
        let mut customers = MockCustomerExistenceChecker::new();
        customers.expect_exists().returning(|_| Ok(false));

        let response = router(MockAccountRepository::new(), customers)
            .oneshot(
                Request::post("/accounts")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"balance": 10, "account_type": "CHECKING", "customer_id": 99}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "bad_request");
    }

    #[tokio::test]
    async fn get_missing_account_is_not_found() {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_find_by_id()
            .with(eq(42))
            .returning(|_| Ok(None));

        let response = router(accounts, MockCustomerExistenceChecker::new())
            .oneshot(Request::get("/accounts/42").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "account does not exist with ID: 42");
    }

    #[tokio::test]
    async fn delete_account_returns_no_content() {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_find_by_id()
            .with(eq(7))
            .returning(|_| Ok(Some(account())));
        accounts.expect_delete().times(1).returning(|_| Ok(()));

        let response = router(accounts, MockCustomerExistenceChecker::new())
            .oneshot(Request::delete("/accounts/7").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn balance_projection_by_account_number() {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_find_by_account_number()
            .with(eq("1234567890"))
            .returning(|_| Ok(Some(account())));

        let response = router(accounts, MockCustomerExistenceChecker::new())
            .oneshot(
                Request::get("/accounts/number/1234567890/balance")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["balance"], 250.0);
        assert_eq!(json["account_type"], "CHECKING");
    }

    #[tokio::test]
    async fn update_balance_returns_no_content() {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_find_by_account_number()
            .returning(|_| Ok(Some(account())));
        accounts
            .expect_save()
            .withf(|a: &Account| a.balance == dec!(75.5))
            .times(1)
            .returning(Ok);

        let response = router(accounts, MockCustomerExistenceChecker::new())
            .oneshot(
                Request::put("/accounts/number/1234567890/balance")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"new_balance": 75.5}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn update_balance_with_fraction_of_a_cent_is_bad_request() {
        let mut accounts = MockAccountRepository::new();
        accounts.expect_save().never();

        let response = router(accounts, MockCustomerExistenceChecker::new())
            .oneshot(
                Request::put("/accounts/number/1234567890/balance")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"new_balance": 1500.005}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
