//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that deploy scripts can use to distinguish
//!   failure modes.
//! - Map `ConfigError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use codecompose_config::ConfigError;

/// Structured exit codes for the codecompose binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - configuration assembled.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// A required environment variable is unset.
    ///
    /// Scripts should fix the deployment environment; retrying is pointless.
    MissingEnvVar = 2,

    /// An environment variable carries an unparseable value.
    InvalidValue = 3,

    /// The secret lookup failed.
    ///
    /// Scripts may retry once the secrets service is reachable again.
    SecretLookupFailed = 4,

    /// Credentials were still absent when the settings were built.
    ///
    /// The binary always resolves credentials before building, so this code
    /// only surfaces for embedders that call `build` directly.
    MissingCredentials = 5,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Maps errors surfacing at the CLI boundary to exit codes.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        match self.downcast_ref::<ConfigError>() {
            Some(ConfigError::MissingEnvVar(_)) => ExitCode::MissingEnvVar,
            Some(ConfigError::InvalidValue { .. }) => ExitCode::InvalidValue,
            Some(ConfigError::SecretLookup(_)) => ExitCode::SecretLookupFailed,
            Some(ConfigError::MissingCredentials) => ExitCode::MissingCredentials,
            None => ExitCode::GeneralError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_var_maps_to_exit_code_2() {
        let err = anyhow::Error::new(ConfigError::MissingEnvVar("DATABASE_NAME".to_string()));
        assert_eq!(err.exit_code(), ExitCode::MissingEnvVar);
        assert_eq!(err.exit_code().as_i32(), 2);
    }

    #[test]
    fn test_unknown_error_maps_to_general_error() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }

    #[test]
    fn test_secret_lookup_maps_to_exit_code_4() {
        let err = anyhow::Error::new(ConfigError::SecretLookup("unreachable".into()));
        assert_eq!(err.exit_code().as_i32(), 4);
    }

    #[test]
    fn test_missing_credentials_maps_to_exit_code_5() {
        let err = anyhow::Error::new(ConfigError::MissingCredentials);
        assert_eq!(err.exit_code(), ExitCode::MissingCredentials);
        assert_eq!(err.exit_code().as_i32(), 5);
    }
}
