//! Database connection configuration.
//!
//! Responsibilities:
//! - Define the connection parameters handed to the external runtime.
//! - Serialize the password as a redaction marker, never the secret itself.
//!
//! Does NOT handle:
//! - Opening connections or validating that the port parses as a number; a
//!   malformed port is the downstream runtime's startup failure.
//!
//! Invariants:
//! - `password` is a `secrecy::SecretString`: Debug output and serialization
//!   never contain the secret.
//! - `port` is carried as the raw string read from the environment.

use secrecy::SecretString;
use serde::Serialize;

use crate::constants::DEFAULT_INIT_COMMAND;

/// Serializes a `SecretString` as a fixed redaction marker. `Settings` is a
/// display surface (CLI `show`), never a persistence format, so the secret
/// itself must not round-trip through it.
mod redacted_secret {
    use secrecy::SecretString;
    use serde::{Serialize, Serializer};

    pub fn serialize<S>(_secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        "[redacted]".serialize(serializer)
    }
}

/// Connection parameters for the default database.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseConfig {
    /// Engine identifier (e.g. "postgresql").
    pub engine: String,
    /// Name of the database.
    pub name: String,
    /// Username used to authenticate.
    pub username: String,
    /// Password used to authenticate.
    #[serde(with = "redacted_secret")]
    pub password: SecretString,
    /// Hostname of the database server.
    pub host: String,
    /// Port of the database server, passed through unparsed.
    pub port: String,
    /// Engine-specific connection options.
    pub options: DatabaseOptions,
}

/// Engine-specific connection options.
#[derive(Debug, Clone, Serialize)]
pub struct DatabaseOptions {
    /// Command executed when a connection is established.
    pub init_command: String,
}

impl Default for DatabaseOptions {
    fn default() -> Self {
        Self {
            init_command: DEFAULT_INIT_COMMAND.to_string(),
        }
    }
}
