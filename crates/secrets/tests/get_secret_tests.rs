//! `GetSecretValue` endpoint tests.
//!
//! These tests exercise the secrets client against a mock server:
//! - Successful fetch with the credential pair embedded as JSON in
//!   `SecretString`
//! - API error bodies mapped to `SecretsError::Api`
//! - Malformed secret payloads rejected
//! - End-to-end assembly through the `SecretResolver` contract
//!
//! # What this does NOT handle
//! - Request signing (owned by the deployment environment)
//! - Retry behavior (none exists at this layer)

use secrecy::ExposeSecret;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use codecompose_config::SettingsLoader;
use codecompose_secrets::{SecretsError, SecretsManagerClient};

fn client_for(server: &MockServer) -> SecretsManagerClient {
    SecretsManagerClient::builder()
        .endpoint(server.uri())
        .secret_id("arn:aws:secretsmanager:us-east-1:123456789012:secret:db-credentials")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_secret_value_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("X-Amz-Target", "secretsmanager.GetSecretValue"))
        .and(header("Content-Type", "application/x-amz-json-1.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ARN": "arn:aws:secretsmanager:us-east-1:123456789012:secret:db-credentials",
            "Name": "db-credentials",
            "SecretString": "{\"username\":\"svc\",\"password\":\"pw\"}"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let record = client.get_secret_value().await.unwrap();

    assert_eq!(record.username, "svc");
    assert_eq!(record.password.expose_secret(), "pw");
}

#[tokio::test]
async fn test_api_error_maps_to_secrets_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "__type": "ResourceNotFoundException",
            "message": "Secrets Manager can't find the specified secret."
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_secret_value().await.unwrap_err();

    match err {
        SecretsError::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 400);
            assert_eq!(code, "ResourceNotFoundException");
            assert!(message.contains("can't find"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_secret_payload_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "SecretString": "not a credential document"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get_secret_value().await.unwrap_err();
    assert!(matches!(err, SecretsError::InvalidPayload(_)));
}

/// Full assembly path: loader overrides stand in for the environment, the
/// client stands in for the remote resolver, and one fetch completes the
/// credentials.
#[tokio::test]
async fn test_loader_resolves_credentials_through_client() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "SecretString": "{\"username\":\"svc\",\"password\":\"pw\"}"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let resolver = client_for(&mock_server);
    let settings = SettingsLoader::new()
        .with_regions("us-east-1", "us-west-2")
        .with_secret_arn("arn:aws:secretsmanager:us-east-1:123456789012:secret:db-credentials")
        .with_column_key_alias("alias/column-key")
        .with_database_name("db1")
        .with_hostname("db.internal")
        .with_port("5432")
        .resolve_credentials(&resolver)
        .await
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(settings.database.username, "svc");
    assert_eq!(settings.database.password.expose_secret(), "pw");
}

#[tokio::test]
async fn test_resolver_failure_propagates_as_fatal_config_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "__type": "InternalServiceError",
            "message": "internal failure"
        })))
        .mount(&mock_server)
        .await;

    let resolver = client_for(&mock_server);
    let result = SettingsLoader::new()
        .with_regions("us-east-1", "us-west-2")
        .with_secret_arn("arn:aws:secretsmanager:us-east-1:123456789012:secret:db-credentials")
        .with_column_key_alias("alias/column-key")
        .with_database_name("db1")
        .with_hostname("db.internal")
        .with_port("5432")
        .resolve_credentials(&resolver)
        .await;

    let err = result.err().expect("secret lookup failure must be fatal");
    assert!(err.to_string().contains("Secret lookup failed"));
}
