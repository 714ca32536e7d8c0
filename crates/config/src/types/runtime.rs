//! Fixed runtime tables: enabled apps, middleware order, template engine
//! settings, password-policy validators, and internationalization flags.
//!
//! These values are declarative and independent of the environment; the
//! loader copies them into `Settings` unchanged.

use serde::Serialize;

/// A stage in the request-processing middleware chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MiddlewareStage {
    Security,
    Session,
    Common,
    Csrf,
    Authentication,
    Messaging,
    Clickjacking,
}

/// The fixed middleware sequence. Order is load-bearing: security headers
/// first, clickjacking protection last.
pub const MIDDLEWARE_ORDER: [MiddlewareStage; 7] = [
    MiddlewareStage::Security,
    MiddlewareStage::Session,
    MiddlewareStage::Common,
    MiddlewareStage::Csrf,
    MiddlewareStage::Authentication,
    MiddlewareStage::Messaging,
    MiddlewareStage::Clickjacking,
];

/// Applications enabled in the runtime, in registration order.
pub fn installed_apps() -> Vec<String> {
    [
        "admin",
        "auth",
        "contenttypes",
        "sessions",
        "messages",
        "staticfiles",
        "encryptioncontext",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// Template engine settings.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateConfig {
    /// Backend identifier.
    pub backend: String,
    /// Extra template directories searched before app directories.
    pub dirs: Vec<String>,
    /// Whether templates bundled inside enabled apps are discovered.
    pub app_dirs: bool,
    /// Context processors applied to every render.
    pub context_processors: Vec<String>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            backend: "default".to_string(),
            dirs: Vec::new(),
            app_dirs: true,
            context_processors: ["debug", "request", "auth", "messages"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

/// A password-policy validator applied when users set passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordValidator {
    UserAttributeSimilarity,
    MinimumLength,
    CommonPassword,
    NumericPassword,
}

/// The validator chain, applied in order.
pub fn password_validator_chain() -> Vec<PasswordValidator> {
    vec![
        PasswordValidator::UserAttributeSimilarity,
        PasswordValidator::MinimumLength,
        PasswordValidator::CommonPassword,
        PasswordValidator::NumericPassword,
    ]
}

/// Internationalization flags.
#[derive(Debug, Clone, Serialize)]
pub struct I18nConfig {
    pub language_code: String,
    pub time_zone: String,
    pub use_i18n: bool,
    pub use_l10n: bool,
    pub use_tz: bool,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language_code: "en-us".to_string(),
            time_zone: "UTC".to_string(),
            use_i18n: true,
            use_l10n: true,
            use_tz: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middleware_order_is_fixed() {
        assert_eq!(
            MIDDLEWARE_ORDER,
            [
                MiddlewareStage::Security,
                MiddlewareStage::Session,
                MiddlewareStage::Common,
                MiddlewareStage::Csrf,
                MiddlewareStage::Authentication,
                MiddlewareStage::Messaging,
                MiddlewareStage::Clickjacking,
            ]
        );
    }

    #[test]
    fn test_installed_apps_include_encryption_context() {
        let apps = installed_apps();
        assert_eq!(apps.len(), 7);
        assert_eq!(apps.last().map(String::as_str), Some("encryptioncontext"));
    }

    #[test]
    fn test_template_defaults_use_app_dirs() {
        let templates = TemplateConfig::default();
        assert!(templates.app_dirs);
        assert!(templates.dirs.is_empty());
        assert_eq!(templates.context_processors.len(), 4);
    }

    #[test]
    fn test_password_validator_chain_order() {
        let chain = password_validator_chain();
        assert_eq!(
            chain,
            vec![
                PasswordValidator::UserAttributeSimilarity,
                PasswordValidator::MinimumLength,
                PasswordValidator::CommonPassword,
                PasswordValidator::NumericPassword,
            ]
        );
    }

    #[test]
    fn test_i18n_defaults() {
        let i18n = I18nConfig::default();
        assert_eq!(i18n.language_code, "en-us");
        assert_eq!(i18n.time_zone, "UTC");
        assert!(i18n.use_i18n && i18n.use_l10n && i18n.use_tz);
    }
}
