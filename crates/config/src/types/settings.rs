//! The assembled, process-wide settings structure.
//!
//! Constructed once by `SettingsLoader::build` at startup and handed to the
//! external runtime; read-only for the remainder of the process lifetime.

use serde::Serialize;

use crate::types::database::DatabaseConfig;
use crate::types::logging::LoggingConfig;
use crate::types::runtime::{I18nConfig, MiddlewareStage, PasswordValidator, TemplateConfig};
use crate::types::secret::SecretReference;

/// Regions the deployment spans.
#[derive(Debug, Clone, Serialize)]
pub struct RegionConfig {
    pub primary: String,
    pub secondary: String,
}

/// Column-encryption settings for the downstream encryption context.
#[derive(Debug, Clone, Serialize)]
pub struct EncryptionConfig {
    /// Alias of the key used for column encryption.
    pub column_key_alias: String,
}

/// The full application configuration.
///
/// Immutable after assembly; consumers receive it by reference.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    /// Debug mode is never enabled by environment input.
    pub debug: bool,
    pub allowed_hosts: Vec<String>,
    pub regions: RegionConfig,
    pub encryption: EncryptionConfig,
    /// Where the database credentials secret lives.
    pub secret_ref: SecretReference,
    pub installed_apps: Vec<String>,
    pub middleware: Vec<MiddlewareStage>,
    pub templates: TemplateConfig,
    pub database: DatabaseConfig,
    pub password_validators: Vec<PasswordValidator>,
    pub i18n: I18nConfig,
    pub static_url: String,
    pub logging: LoggingConfig,
}
