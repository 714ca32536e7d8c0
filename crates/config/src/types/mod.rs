//! Settings type definitions for the codecompose runtime.
//!
//! Responsibilities:
//! - Define the assembled `Settings` structure and its components (database,
//!   regions, encryption, middleware, templates, logging).
//! - Define the `SecretResolver` contract the loader calls for credentials.
//! - Keep secret material behind `secrecy::SecretString`.
//!
//! Does NOT handle:
//! - Reading environment variables or `.env` files (see `loader` module).
//! - Fetching secrets over the network (see the secrets crate).
//!
//! Invariants:
//! - `Settings` is constructed once by `SettingsLoader::build` and never
//!   mutated afterwards.
//! - Serializing any of these types must not emit the database password.

mod database;
mod logging;
mod runtime;
mod secret;
mod settings;

pub use database::{DatabaseConfig, DatabaseOptions};
pub use logging::{InvalidLogLevel, LogLevel, LoggerConfig, LoggingConfig};
pub use runtime::{
    I18nConfig, MIDDLEWARE_ORDER, MiddlewareStage, PasswordValidator, TemplateConfig,
    installed_apps, password_validator_chain,
};
pub use secret::{ResolverError, SecretRecord, SecretReference, SecretResolver};
pub use settings::{EncryptionConfig, RegionConfig, Settings};
