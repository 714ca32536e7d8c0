//! Configuration assembly for the codecompose runtime.
//!
//! This crate provides the types and loader that build the process-wide
//! application settings from environment variables at startup, falling back
//! to a secrets-manager lookup for database credentials when they are not
//! supplied via the environment.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, SettingsLoader};
pub use types::{
    DatabaseConfig, DatabaseOptions, EncryptionConfig, I18nConfig, LogLevel, LoggerConfig,
    LoggingConfig, MiddlewareStage, PasswordValidator, RegionConfig, ResolverError, SecretRecord,
    SecretReference, SecretResolver, Settings, TemplateConfig,
};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
