//! Secrets-manager `GetSecretValue` client.
//!
//! Responsibilities:
//! - Build an HTTP client for a region's secrets-manager endpoint (or an
//!   explicit endpoint override for tests and non-standard deployments).
//! - Perform the `GetSecretValue` call and parse the embedded-JSON
//!   `SecretString` payload into a `SecretRecord`.
//!
//! Does NOT handle:
//! - Request signing or credential acquisition; the deployment environment
//!   owns transport authentication.
//! - Retries, caching, or timeouts beyond the single request timeout.
//!
//! Invariants:
//! - One `fetch` performs exactly one HTTP request.
//! - Non-2xx responses map to `SecretsError::Api` with the service's error
//!   code when the body carries one.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use codecompose_config::{ResolverError, SecretRecord, SecretResolver};

use crate::error::{Result, SecretsError};

const GET_SECRET_VALUE_TARGET: &str = "secretsmanager.GetSecretValue";
const AMZ_JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builder for creating a new SecretsManagerClient.
pub struct SecretsManagerClientBuilder {
    region: Option<String>,
    secret_id: Option<String>,
    endpoint: Option<String>,
    timeout: Duration,
}

impl Default for SecretsManagerClientBuilder {
    fn default() -> Self {
        Self {
            region: None,
            secret_id: None,
            endpoint: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SecretsManagerClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the region whose secrets-manager endpoint is used.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the secret reference (ARN or name) to fetch.
    pub fn secret_id(mut self, secret_id: impl Into<String>) -> Self {
        self.secret_id = Some(secret_id.into());
        self
    }

    /// Override the service endpoint. Takes precedence over the
    /// region-derived endpoint; used by tests and non-standard deployments.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Normalize an endpoint by removing trailing slashes.
    fn normalize_endpoint(endpoint: String) -> String {
        endpoint.trim_end_matches('/').to_string()
    }

    /// Build the client.
    pub fn build(self) -> Result<SecretsManagerClient> {
        let secret_id = self.secret_id.ok_or_else(|| {
            SecretsError::InvalidConfiguration("secret_id is required".to_string())
        })?;

        let endpoint = match (self.endpoint, self.region) {
            (Some(endpoint), _) => endpoint,
            (None, Some(region)) => format!("https://secretsmanager.{region}.amazonaws.com"),
            (None, None) => {
                return Err(SecretsError::InvalidConfiguration(
                    "either region or endpoint is required".to_string(),
                ));
            }
        };
        let endpoint = Self::normalize_endpoint(endpoint);

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        Ok(SecretsManagerClient {
            http,
            endpoint,
            secret_id,
        })
    }
}

/// Client for one secrets-manager secret.
///
/// The secret reference is fixed at construction, so the lookup itself is
/// parameterless, matching the `SecretResolver` contract.
#[derive(Debug, Clone)]
pub struct SecretsManagerClient {
    http: reqwest::Client,
    endpoint: String,
    secret_id: String,
}

#[derive(Serialize)]
struct GetSecretValueRequest<'a> {
    #[serde(rename = "SecretId")]
    secret_id: &'a str,
}

#[derive(Deserialize)]
struct GetSecretValueResponse {
    #[serde(rename = "SecretString")]
    secret_string: String,
}

#[derive(Deserialize, Default)]
struct ApiErrorBody {
    #[serde(rename = "__type")]
    code: Option<String>,
    #[serde(rename = "message", alias = "Message")]
    message: Option<String>,
}

impl SecretsManagerClient {
    /// Create a new client builder.
    pub fn builder() -> SecretsManagerClientBuilder {
        SecretsManagerClientBuilder::new()
    }

    /// Fetch the secret value and parse it into a credential record.
    ///
    /// The service returns the secret as a JSON string embedded in the
    /// `SecretString` field; that inner document carries the username and
    /// password keys.
    pub async fn get_secret_value(&self) -> Result<SecretRecord> {
        debug!(endpoint = %self.endpoint, "fetching database credentials secret");

        let response = self
            .http
            .post(&self.endpoint)
            .header("X-Amz-Target", GET_SECRET_VALUE_TARGET)
            .header(reqwest::header::CONTENT_TYPE, AMZ_JSON_CONTENT_TYPE)
            .json(&GetSecretValueRequest {
                secret_id: &self.secret_id,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: ApiErrorBody = response.json().await.unwrap_or_default();
            return Err(SecretsError::Api {
                status: status.as_u16(),
                code: body.code.unwrap_or_else(|| "UnknownError".to_string()),
                message: body
                    .message
                    .unwrap_or_else(|| "no error message in response".to_string()),
            });
        }

        let body: GetSecretValueResponse = response.json().await?;
        let record: SecretRecord = serde_json::from_str(&body.secret_string)
            .map_err(|e| SecretsError::InvalidPayload(e.to_string()))?;
        Ok(record)
    }
}

impl SecretResolver for SecretsManagerClient {
    async fn fetch(&self) -> std::result::Result<SecretRecord, ResolverError> {
        self.get_secret_value().await.map_err(Into::into)
    }
}
