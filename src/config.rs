//! Service configuration management.
//!
//! Every binary loads the same `Config` from environment variables using the
//! `envy` crate. Settings a given service does not need are optional here and
//! checked by the binary that requires them.

use serde::Deserialize;
use std::time::Duration;

/// Configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string for the service's own database
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `CUSTOMER_SERVICE_URL` (account-ms only): base URL of the customer service
/// - `ACCOUNT_SERVICE_URL` (transaction-ms only): base URL of the account service
/// - `REMOTE_TIMEOUT_SECS` (optional): timeout for inter-service calls, defaults to 5
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default)]
    pub customer_service_url: Option<String>,

    #[serde(default)]
    pub account_service_url: Option<String>,

    #[serde(default = "default_remote_timeout_secs")]
    pub remote_timeout_secs: u64,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_remote_timeout_secs() -> u64 {
    5
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is loaded first if present.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., DATABASE_URL)
    /// - Environment variable values cannot be parsed into expected types
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        // Field names are converted automatically: database_url -> DATABASE_URL
        envy::from_env::<Config>()
    }

    /// Timeout applied to every inter-service HTTP request.
    pub fn remote_timeout(&self) -> Duration {
        Duration::from_secs(self.remote_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_apply_when_optional_vars_are_missing() {
        let config: Config =
            envy::from_iter(vars(&[("DATABASE_URL", "postgres://localhost/accounts")])).unwrap();

        assert_eq!(config.server_port, 3000);
        assert_eq!(config.remote_timeout(), Duration::from_secs(5));
        assert!(config.customer_service_url.is_none());
        assert!(config.account_service_url.is_none());
    }

    #[test]
    fn reads_remote_service_urls() {
        let config: Config = envy::from_iter(vars(&[
            ("DATABASE_URL", "postgres://localhost/accounts"),
            ("SERVER_PORT", "8081"),
            ("CUSTOMER_SERVICE_URL", "http://customer-ms:8082"),
            ("REMOTE_TIMEOUT_SECS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.server_port, 8081);
        assert_eq!(
            config.customer_service_url.as_deref(),
            Some("http://customer-ms:8082")
        );
        assert_eq!(config.remote_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let result = envy::from_iter::<_, Config>(vars(&[("SERVER_PORT", "8081")]));
        assert!(result.is_err());
    }
}
