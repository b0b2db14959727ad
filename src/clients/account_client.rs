//! Balance reads and writes against the account service, used by the
//! transaction service.

use crate::{
    error::AppError,
    models::account::{BalanceAndTypeResponse, UpdateBalanceRequest},
};
use async_trait::async_trait;
use reqwest::StatusCode;
use rust_decimal::Decimal;
use std::time::Duration;
use url::Url;

/// Capability to read and replace account balances.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountGateway: Send + Sync {
    /// Balance and type of the account, or `None` if it does not exist.
    async fn balance_and_type(
        &self,
        account_number: &str,
    ) -> Result<Option<BalanceAndTypeResponse>, AppError>;

    /// Set the account's balance to exactly `new_balance`.
    async fn update_balance(
        &self,
        account_number: &str,
        new_balance: Decimal,
    ) -> Result<(), AppError>;
}

/// Account gateway that calls the account service over HTTP.
///
/// # Remote Contract
///
/// - `GET {base_url}/accounts/number/{account_number}/balance` → projection, 404 if absent
/// - `PUT {base_url}/accounts/number/{account_number}/balance` → 204
///
/// The account number is always sent as one escaped path segment.
#[derive(Debug, Clone)]
pub struct HttpAccountClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpAccountClient {
    /// Build a client for the account service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL or the
    /// HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("account service URL cannot carry a path: {}", base_url);
        }
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    fn balance_url(&self, account_number: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["accounts", "number", account_number, "balance"]);
        }
        url
    }
}

#[async_trait]
impl AccountGateway for HttpAccountClient {
    async fn balance_and_type(
        &self,
        account_number: &str,
    ) -> Result<Option<BalanceAndTypeResponse>, AppError> {
        let response = self
            .client
            .get(self.balance_url(account_number))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let projection = response
            .error_for_status()?
            .json::<BalanceAndTypeResponse>()
            .await?;

        Ok(Some(projection))
    }

    async fn update_balance(
        &self,
        account_number: &str,
        new_balance: Decimal,
    ) -> Result<(), AppError> {
        let response = self
            .client
            .put(self.balance_url(account_number))
            .json(&UpdateBalanceRequest { new_balance })
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(AppError::ResourceNotFound(format!(
                "account not found: {}",
                account_number
            ))),
            StatusCode::BAD_REQUEST => Err(AppError::BadRequest(format!(
                "account service rejected balance {} for account {}",
                new_balance, account_number
            ))),
            _ => {
                response.error_for_status()?;
                Ok(())
            }
        }
    }
}
