//! The secret lookup contract consumed by the loader.
//!
//! Responsibilities:
//! - Define `SecretRecord`, the credential pair a resolver returns.
//! - Define the `SecretResolver` trait the loader calls when environment
//!   credentials are incomplete.
//!
//! Does NOT handle:
//! - Talking to any actual secrets service (see the secrets crate).
//!
//! Invariants:
//! - The loader performs at most one `fetch` per assembly; records are not
//!   cached here, so resolver-side caching governs repeated startups.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Error type resolvers report; the loader treats any failure as fatal.
pub type ResolverError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Credentials returned by one secret lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct SecretRecord {
    pub username: String,
    pub password: SecretString,
}

/// Identifies the secret holding the database credentials.
#[derive(Debug, Clone, Serialize)]
pub struct SecretReference {
    /// ARN-like reference to the secret.
    pub arn: String,
    /// Region the secret lives in.
    pub region: String,
}

/// A source of database credentials.
///
/// Implementations own the secret reference and region; from the loader's
/// point of view the lookup is parameterless. One call returns both the
/// username and the password.
pub trait SecretResolver {
    fn fetch(&self) -> impl Future<Output = Result<SecretRecord, ResolverError>> + Send;
}
