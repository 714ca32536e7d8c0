//! Settings loader for environment variables and the secret fallback.
//!
//! Responsibilities:
//! - Read the fixed set of required environment variables, failing fast and
//!   naming the missing variable.
//! - Apply the credential precedence rule: explicit `DATABASE_USERNAME` /
//!   `DATABASE_PASSWORD` win; otherwise one `SecretResolver` fetch fills
//!   whichever field is missing.
//! - Assemble the immutable `Settings` structure.
//!
//! Does NOT handle:
//! - Fetching secrets over the network (injected via `SecretResolver`).
//! - Validating the database port or engine identifier; both pass through to
//!   the runtime unparsed.
//!
//! Invariants / Assumptions:
//! - Empty or whitespace-only environment values are treated as unset.
//! - The resolver is invoked at most once per assembly, and never when both
//!   credentials came from the environment.
//! - No retries: any failure here aborts startup.

use secrecy::SecretString;
use thiserror::Error;
use tracing::debug;

use crate::constants::{
    DEFAULT_DATABASE_ENGINE, DEFAULT_STATIC_URL, ENV_COLUMN_ENCRYPTION_KEY_ALIAS,
    ENV_DATABASE_ENGINE, ENV_DATABASE_HOSTNAME, ENV_DATABASE_NAME, ENV_DATABASE_PASSWORD,
    ENV_DATABASE_PORT, ENV_DATABASE_SECRET_ARN, ENV_DATABASE_USERNAME, ENV_LOG_LEVEL,
    ENV_PRIMARY_REGION, ENV_SECONDARY_REGION,
};
use crate::types::{
    DatabaseConfig, DatabaseOptions, EncryptionConfig, I18nConfig, LogLevel, LoggingConfig,
    MIDDLEWARE_ORDER, RegionConfig, ResolverError, SecretReference, SecretResolver, Settings,
    TemplateConfig, installed_apps, password_validator_chain,
};

/// Errors that can occur during settings assembly.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error(
        "Database credentials are required (set DATABASE_USERNAME/DATABASE_PASSWORD or resolve them from the secrets manager)"
    )]
    MissingCredentials,

    #[error("Secret lookup failed: {0}")]
    SecretLookup(#[source] ResolverError),
}

/// Builder that assembles `Settings` from environment variables, overrides,
/// and an optional secret lookup.
#[derive(Default)]
pub struct SettingsLoader {
    primary_region: Option<String>,
    secondary_region: Option<String>,
    secret_arn: Option<String>,
    column_key_alias: Option<String>,
    engine: Option<String>,
    database_name: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    host: Option<String>,
    port: Option<String>,
    log_level: Option<LogLevel>,
}

impl SettingsLoader {
    /// Create a new settings loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If the `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the `.env` file will not be loaded (useful for testing).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if std::env::var("DOTENV_DISABLED").ok().as_deref() != Some("true")
            && std::env::var("DOTENV_DISABLED").ok().as_deref() != Some("1")
        {
            dotenvy::dotenv().ok();
        }
        Ok(self)
    }

    /// Read an environment variable, returning None if unset, empty, or whitespace-only.
    pub fn env_var_or_none(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.trim().is_empty())
    }

    /// Read a required environment variable, failing fast with its name.
    fn require_env(key: &str) -> Result<String, ConfigError> {
        Self::env_var_or_none(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
    }

    /// Read the full variable set from the environment.
    ///
    /// Required variables abort immediately when absent; optional credentials
    /// and overrides are recorded when present.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        self.primary_region = Some(Self::require_env(ENV_PRIMARY_REGION)?);
        self.secondary_region = Some(Self::require_env(ENV_SECONDARY_REGION)?);
        self.secret_arn = Some(Self::require_env(ENV_DATABASE_SECRET_ARN)?);
        self.column_key_alias = Some(Self::require_env(ENV_COLUMN_ENCRYPTION_KEY_ALIAS)?);
        self.database_name = Some(Self::require_env(ENV_DATABASE_NAME)?);
        self.host = Some(Self::require_env(ENV_DATABASE_HOSTNAME)?);
        self.port = Some(Self::require_env(ENV_DATABASE_PORT)?);

        if let Some(engine) = Self::env_var_or_none(ENV_DATABASE_ENGINE) {
            self.engine = Some(engine);
        }
        if let Some(username) = Self::env_var_or_none(ENV_DATABASE_USERNAME) {
            self.username = Some(username);
        }
        if let Some(password) = Self::env_var_or_none(ENV_DATABASE_PASSWORD) {
            self.password = Some(SecretString::new(password.into()));
        }
        if let Some(level) = Self::env_var_or_none(ENV_LOG_LEVEL) {
            self.log_level =
                Some(
                    level
                        .parse()
                        .map_err(|source: crate::types::InvalidLogLevel| {
                            ConfigError::InvalidValue {
                                var: ENV_LOG_LEVEL.to_string(),
                                message: source.to_string(),
                            }
                        })?,
                );
        }
        Ok(self)
    }

    /// Set the primary and secondary regions.
    pub fn with_regions(mut self, primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        self.primary_region = Some(primary.into());
        self.secondary_region = Some(secondary.into());
        self
    }

    /// Set the secret reference ARN.
    pub fn with_secret_arn(mut self, arn: impl Into<String>) -> Self {
        self.secret_arn = Some(arn.into());
        self
    }

    /// Set the column-encryption key alias.
    pub fn with_column_key_alias(mut self, alias: impl Into<String>) -> Self {
        self.column_key_alias = Some(alias.into());
        self
    }

    /// Set the database engine identifier.
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    /// Set the database name.
    pub fn with_database_name(mut self, name: impl Into<String>) -> Self {
        self.database_name = Some(name.into());
        self
    }

    /// Set the database username.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the database password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(SecretString::new(password.into().into()));
        self
    }

    /// Set the database hostname.
    pub fn with_hostname(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the database port (carried as a string, unvalidated).
    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    /// Set the runtime logger level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Whether a secret lookup is needed to complete the credentials.
    pub fn needs_secret_lookup(&self) -> bool {
        self.username.is_none() || self.password.is_none()
    }

    /// Reference to the credentials secret, once regions and ARN are loaded.
    pub fn secret_reference(&self) -> Option<SecretReference> {
        Some(SecretReference {
            arn: self.secret_arn.clone()?,
            region: self.primary_region.clone()?,
        })
    }

    /// Fill missing credentials from the resolver.
    ///
    /// No-op when both username and password are already set. Otherwise the
    /// resolver is fetched exactly once and its record fills whichever
    /// field(s) are missing; a lookup failure is fatal.
    pub async fn resolve_credentials<R>(mut self, resolver: &R) -> Result<Self, ConfigError>
    where
        R: SecretResolver,
    {
        if !self.needs_secret_lookup() {
            return Ok(self);
        }

        debug!("database credentials incomplete, fetching secret record");
        let record = resolver.fetch().await.map_err(ConfigError::SecretLookup)?;

        if self.username.is_none() {
            self.username = Some(record.username);
        }
        if self.password.is_none() {
            self.password = Some(record.password);
        }
        Ok(self)
    }

    /// Build the final settings.
    ///
    /// Fails if any required value is still absent. Missing credentials at
    /// this point mean no resolver ran; that is a startup error, not a
    /// recoverable state.
    pub fn build(self) -> Result<Settings, ConfigError> {
        let missing = |key: &str| ConfigError::MissingEnvVar(key.to_string());

        let primary_region = self.primary_region.ok_or_else(|| missing(ENV_PRIMARY_REGION))?;
        let secondary_region = self
            .secondary_region
            .ok_or_else(|| missing(ENV_SECONDARY_REGION))?;
        let secret_arn = self.secret_arn.ok_or_else(|| missing(ENV_DATABASE_SECRET_ARN))?;
        let column_key_alias = self
            .column_key_alias
            .ok_or_else(|| missing(ENV_COLUMN_ENCRYPTION_KEY_ALIAS))?;
        let database_name = self.database_name.ok_or_else(|| missing(ENV_DATABASE_NAME))?;
        let host = self.host.ok_or_else(|| missing(ENV_DATABASE_HOSTNAME))?;
        let port = self.port.ok_or_else(|| missing(ENV_DATABASE_PORT))?;

        let (Some(username), Some(password)) = (self.username, self.password) else {
            return Err(ConfigError::MissingCredentials);
        };

        Ok(Settings {
            debug: false,
            allowed_hosts: vec!["*".to_string()],
            regions: RegionConfig {
                primary: primary_region.clone(),
                secondary: secondary_region,
            },
            encryption: EncryptionConfig { column_key_alias },
            secret_ref: SecretReference {
                arn: secret_arn,
                region: primary_region,
            },
            installed_apps: installed_apps(),
            middleware: MIDDLEWARE_ORDER.to_vec(),
            templates: TemplateConfig::default(),
            database: DatabaseConfig {
                engine: self
                    .engine
                    .unwrap_or_else(|| DEFAULT_DATABASE_ENGINE.to_string()),
                name: database_name,
                username,
                password,
                host,
                port,
                options: DatabaseOptions::default(),
            },
            password_validators: password_validator_chain(),
            i18n: I18nConfig::default(),
            static_url: DEFAULT_STATIC_URL.to_string(),
            logging: LoggingConfig::console_tree(self.log_level.unwrap_or_default()),
        })
    }
}
