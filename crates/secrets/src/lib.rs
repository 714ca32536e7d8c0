//! Secrets-manager client for the codecompose configuration assembler.
//!
//! This crate implements the `SecretResolver` contract: one `GetSecretValue`
//! call against a secrets-manager endpoint returns the database credential
//! pair. No retries and no caching live here; a failed lookup is a fatal
//! startup error for the caller.

mod client;
mod error;

pub use client::{SecretsManagerClient, SecretsManagerClientBuilder};
pub use error::{Result, SecretsError};
