//! Transaction HTTP handlers.
//!
//! This module implements the transaction service API:
//! - POST /transactions/deposit - Add money to an account
//! - POST /transactions/withdrawal - Remove money from an account
//! - POST /transactions/transfer - Move money between accounts
//! - GET /transactions - List every transaction
//! - GET /transactions/{id} - Get transaction details
//! - GET /transactions/account/{account_number} - History of one account

use crate::{
    error::AppError,
    models::transaction::{
        DepositRequest, TransactionResponse, TransferRequest, WithdrawalRequest,
    },
    services::TransactionService,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

/// Deposit into an account.
///
/// # Request Body
///
/// ```json
/// {
///   "account_number": "1234567890",
///   "amount": 500.0
/// }
/// ```
///
/// # Response (201)
///
/// ```json
/// {
///   "id": "770e8400-...",
///   "transaction_type": "DEPOSIT",
///   "amount": 500.0,
///   "source_account": null,
///   "destination_account": "1234567890",
///   "created_at": "2025-12-21T16:00:00Z"
/// }
/// ```
pub async fn create_deposit(
    State(service): State<TransactionService>,
    Json(request): Json<DepositRequest>,
) -> Result<impl IntoResponse, AppError> {
    let transaction = service.deposit(request).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Withdraw from an account.
///
/// # Errors
///
/// - **400**: Amount not positive, or insufficient balance
/// - **404**: Account not found
pub async fn create_withdrawal(
    State(service): State<TransactionService>,
    Json(request): Json<WithdrawalRequest>,
) -> Result<impl IntoResponse, AppError> {
    let transaction = service.withdraw(request).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Transfer between two accounts.
///
/// # Errors
///
/// - **400**: Amount not positive, same account, insufficient balance
/// - **404**: Either account not found
/// - **502**: Account service unreachable
pub async fn create_transfer(
    State(service): State<TransactionService>,
    Json(request): Json<TransferRequest>,
) -> Result<impl IntoResponse, AppError> {
    let transaction = service.transfer(request).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

pub async fn list_transactions(
    State(service): State<TransactionService>,
) -> Result<Json<Vec<TransactionResponse>>, AppError> {
    let transactions = service.list_transactions().await?;
    Ok(Json(transactions))
}

pub async fn get_transaction(
    State(service): State<TransactionService>,
    Path(id): Path<Uuid>,
) -> Result<Json<TransactionResponse>, AppError> {
    let transaction = service.get_transaction_by_id(id).await?;
    Ok(Json(transaction))
}

/// Transactions touching an account, newest first.
pub async fn list_account_transactions(
    State(service): State<TransactionService>,
    Path(account_number): Path<String>,
) -> Result<Json<Vec<TransactionResponse>>, AppError> {
    let transactions = service
        .list_transactions_by_account(&account_number)
        .await?;
    Ok(Json(transactions))
}

#[cfg(test)]
mod tests {
    use crate::{
        app,
        clients::MockAccountGateway,
        models::{
            account::{AccountType, BalanceAndTypeResponse},
            transaction::{NewTransaction, Transaction},
        },
        repositories::MockTransactionRepository,
        services::TransactionService,
    };
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use tower::ServiceExt;
    use uuid::Uuid;

    fn router(repo: MockTransactionRepository, gateway: MockAccountGateway) -> Router {
        app::transaction_router(TransactionService::new(Arc::new(repo), Arc::new(gateway)))
    }

    fn post(uri: &str, body: &'static str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn stored(new: NewTransaction) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            transaction_type: new.transaction_type,
            amount: new.amount,
            source_account: new.source_account,
            destination_account: new.destination_account,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn deposit_returns_created() {
        let mut gateway = MockAccountGateway::new();
        gateway.expect_balance_and_type().returning(|_| {
            Ok(Some(BalanceAndTypeResponse {
                balance: dec!(10),
                account_type: AccountType::Savings,
            }))
        });
        gateway.expect_update_balance().returning(|_, _| Ok(()));
        let mut repo = MockTransactionRepository::new();
        repo.expect_insert().returning(|t| Ok(stored(t)));

        let response = router(repo, gateway)
            .oneshot(post(
                "/transactions/deposit",
                r#"{"account_number": "1234567890", "amount": 5}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["transaction_type"], "DEPOSIT");
        assert_eq!(json["destination_account"], "1234567890");
        assert!(json["source_account"].is_null());
    }

    #[tokio::test]
    async fn withdrawal_from_unknown_account_is_not_found() {
        let mut gateway = MockAccountGateway::new();
        gateway.expect_balance_and_type().returning(|_| Ok(None));

        let response = router(MockTransactionRepository::new(), gateway)
            .oneshot(post(
                "/transactions/withdrawal",
                r#"{"account_number": "0000000000", "amount": 5}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "account not found: 0000000000");
    }

    #[tokio::test]
    async fn transfer_to_same_account_is_bad_request() {
        let response = router(MockTransactionRepository::new(), MockAccountGateway::new())
            .oneshot(post(
                "/transactions/transfer",
                r#"{"source_account": "1111111111", "destination_account": "1111111111", "amount": 1}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_account_history_is_not_found() {
        let mut repo = MockTransactionRepository::new();
        repo.expect_find_by_account_number()
            .returning(|_| Ok(vec![]));

        let response = router(repo, MockAccountGateway::new())
            .oneshot(
                Request::get("/transactions/account/1234567890")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn get_transaction_by_id_returns_it() {
        let mut repo = MockTransactionRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(Some(stored(NewTransaction::withdrawal("1234567890", dec!(3))))));

        let response = router(repo, MockAccountGateway::new())
            .oneshot(
                Request::get(format!("/transactions/{}", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["transaction_type"], "WITHDRAWAL");
        assert_eq!(json["amount"], 3.0);
    }
}
