//! Customer existence checks used by the account service.

use crate::error::AppError;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

/// Capability to confirm that a customer exists.
///
/// Implementations must answer `Ok(false)` for an unknown id; errors are
/// reserved for failures to get an answer at all.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerExistenceChecker: Send + Sync {
    async fn exists(&self, customer_id: i32) -> Result<bool, AppError>;
}

/// Existence checker that calls the customer service over HTTP.
///
/// # Remote Contract
///
/// `GET {base_url}/customers/{id}/exists` returning a JSON boolean.
/// A 404 response is read as "does not exist".
#[derive(Debug, Clone)]
pub struct HttpCustomerClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpCustomerClient {
    /// Build a client for the customer service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL or the
    /// HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("customer service URL cannot carry a path: {}", base_url);
        }
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    fn exists_url(&self, customer_id: i32) -> Url {
        let id = customer_id.to_string();
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["customers", id.as_str(), "exists"]);
        }
        url
    }
}

#[async_trait]
impl CustomerExistenceChecker for HttpCustomerClient {
    async fn exists(&self, customer_id: i32) -> Result<bool, AppError> {
        let response = self.client.get(self.exists_url(customer_id)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("Customer service reported customer {} as not found", customer_id);
            return Ok(false);
        }

        let exists = response.error_for_status()?.json::<bool>().await?;
        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_exists_url_without_double_slash() {
        let client =
            HttpCustomerClient::new("http://customer-ms:8082/", Duration::from_secs(5)).unwrap();

        assert_eq!(
            client.exists_url(42).as_str(),
            "http://customer-ms:8082/customers/42/exists"
        );
    }

    #[test]
    fn rejects_relative_base_url() {
        assert!(HttpCustomerClient::new("customer-ms", Duration::from_secs(5)).is_err());
    }
}
