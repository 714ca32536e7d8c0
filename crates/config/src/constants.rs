//! Centralized constants for the codecompose workspace.
//!
//! Environment variable names and fixed default values live here so the
//! loader, the CLI, and the tests all agree on them.

// =============================================================================
// Environment Variables (required)
// =============================================================================

/// Primary region hosting the database and its secret.
pub const ENV_PRIMARY_REGION: &str = "AWS_PRIMARY_REGION";

/// Secondary (failover) region.
pub const ENV_SECONDARY_REGION: &str = "AWS_SECONDARY_REGION";

/// ARN-like reference to the database credentials secret.
pub const ENV_DATABASE_SECRET_ARN: &str = "DATABASE_SECRETSMANAGER_ARN";

/// Key alias used by the downstream column-encryption context.
pub const ENV_COLUMN_ENCRYPTION_KEY_ALIAS: &str = "COLUMN_ENCRYPTION_KEY_ALIAS";

/// Name of the database to connect to.
pub const ENV_DATABASE_NAME: &str = "DATABASE_NAME";

/// Hostname of the database server.
pub const ENV_DATABASE_HOSTNAME: &str = "DATABASE_HOSTNAME";

/// Port of the database server. Passed through as-is; validation belongs to
/// the runtime that opens the connection.
pub const ENV_DATABASE_PORT: &str = "DATABASE_PORT";

/// Every variable that must be present for startup to proceed.
pub const REQUIRED_ENV_VARS: [&str; 7] = [
    ENV_PRIMARY_REGION,
    ENV_SECONDARY_REGION,
    ENV_DATABASE_SECRET_ARN,
    ENV_COLUMN_ENCRYPTION_KEY_ALIAS,
    ENV_DATABASE_NAME,
    ENV_DATABASE_HOSTNAME,
    ENV_DATABASE_PORT,
];

// =============================================================================
// Environment Variables (optional)
// =============================================================================

/// Database engine identifier override.
pub const ENV_DATABASE_ENGINE: &str = "DATABASE_ENGINE";

/// Explicit database username; suppresses the secret lookup when paired with
/// an explicit password.
pub const ENV_DATABASE_USERNAME: &str = "DATABASE_USERNAME";

/// Explicit database password.
pub const ENV_DATABASE_PASSWORD: &str = "DATABASE_PASSWORD";

/// Runtime logger severity override.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

// =============================================================================
// Defaults
// =============================================================================

/// Engine used when `DATABASE_ENGINE` is unset.
pub const DEFAULT_DATABASE_ENGINE: &str = "postgresql";

/// Connection init command enforcing strict SQL semantics.
pub const DEFAULT_INIT_COMMAND: &str =
    "SET sql_mode='STRICT_TRANS_TABLES', innodb_strict_mode=1";

/// URL prefix for static assets.
pub const DEFAULT_STATIC_URL: &str = "/static/";

/// Name of the application logger whose level is fixed at INFO.
pub const APP_LOGGER_NAME: &str = "codecompose";

/// Name of the runtime logger whose level follows `LOG_LEVEL`.
pub const RUNTIME_LOGGER_NAME: &str = "runtime";
