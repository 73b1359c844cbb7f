//! Configuration Validation Layer
//!
//! Two ordered phases run at strategy construction time:
//!
//! 1. required keys must be present and non-empty;
//! 2. the username/password/apikey credentials must not conflict or carry
//!    placeholder wrapping.
//!
//! The first failure wins. Nothing here performs I/O or mutates the
//! configuration.

use tracing::debug;

use super::detect::{CREDENTIAL_KEYS, CredentialRules, RequiredKeys};
use super::{Configuration, ValidationError};

/// Finds required keys that are missing from a configuration.
pub trait MissingParamsDetector {
    /// Missing keys, or `None` when every required key is usable.
    fn missing_params(&self, config: &Configuration, required: &[&str]) -> Option<Vec<String>>;
}

/// Finds conflicting or malformed credential values.
pub trait CredentialChecker {
    /// A human-readable description of the problem, or `None`.
    fn check_credentials(&self, config: &Configuration, keys: &[&str]) -> Option<String>;
}

impl<F> MissingParamsDetector for F
where
    F: Fn(&Configuration, &[&str]) -> Option<Vec<String>>,
{
    fn missing_params(&self, config: &Configuration, required: &[&str]) -> Option<Vec<String>> {
        self(config, required)
    }
}

impl<F> CredentialChecker for F
where
    F: Fn(&Configuration, &[&str]) -> Option<String>,
{
    fn check_credentials(&self, config: &Configuration, keys: &[&str]) -> Option<String> {
        self(config, keys)
    }
}

/// Pre-flight validator over a pair of detectors.
#[derive(Debug, Clone, Default)]
pub struct Validator<M = RequiredKeys, C = CredentialRules> {
    missing: M,
    credentials: C,
}

impl Validator {
    /// Validator using the built-in detectors.
    pub const fn standard() -> Self {
        Self {
            missing: RequiredKeys,
            credentials: CredentialRules,
        }
    }
}

impl<M, C> Validator<M, C>
where
    M: MissingParamsDetector,
    C: CredentialChecker,
{
    pub fn new(missing: M, credentials: C) -> Self {
        Self {
            missing,
            credentials,
        }
    }

    pub fn validate(
        &self,
        config: &Configuration,
        required: &[&str],
    ) -> Result<(), ValidationError> {
        if let Some(keys) = self.missing.missing_params(config, required)
            && !keys.is_empty()
        {
            debug!(missing = ?keys, "configuration is missing required parameters");
            return Err(ValidationError::MissingParams { keys });
        }

        if let Some(message) = self.credentials.check_credentials(config, &CREDENTIAL_KEYS) {
            debug!("configuration has credential problems");
            return Err(ValidationError::CredentialProblem(message));
        }

        debug!(required = required.len(), "configuration validated");
        Ok(())
    }
}

/// Validate a strategy configuration with the built-in detectors.
///
/// Concrete strategies call this from their constructors and propagate the
/// error, so a strategy with unusable configuration is never built.
pub fn validate(config: &Configuration, required: &[&str]) -> Result<(), ValidationError> {
    Validator::standard().validate(config, required)
}
