//! Strategy configuration and pre-flight validation.
//!
//! ```rust
//! use request_auth::config::{Configuration, ValidationError, validate};
//!
//! let config = Configuration::new().with("apikey", "my-key");
//! assert!(validate(&config, &["apikey"]).is_ok());
//!
//! let empty = Configuration::new();
//! assert!(matches!(
//!     validate(&empty, &["apikey"]),
//!     Err(ValidationError::MissingParams { .. })
//! ));
//! ```

mod configuration;
mod detect;
mod validator;

pub use configuration::Configuration;
pub use detect::{CREDENTIAL_KEYS, CredentialRules, RequiredKeys};
pub use validator::{CredentialChecker, MissingParamsDetector, Validator, validate};

use thiserror::Error;

/// Configuration rejected before any authentication attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required keys are absent or empty.
    #[error("Missing required parameters: {}", keys.join(", "))]
    MissingParams {
        /// Missing keys, in the order they were required.
        keys: Vec<String>,
    },

    /// Conflicting or malformed credential values.
    #[error("{0}")]
    CredentialProblem(String),
}

impl ValidationError {
    pub fn missing(keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        ValidationError::MissingParams {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Keys reported missing, empty for credential problems.
    pub fn missing_keys(&self) -> &[String] {
        match self {
            ValidationError::MissingParams { keys } => keys,
            ValidationError::CredentialProblem(_) => &[],
        }
    }
}
