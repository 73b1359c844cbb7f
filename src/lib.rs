//! # request-auth
//!
//! Pluggable authentication for HTTP client SDKs.
//!
//! A client is handed some [`Authenticator`] and asks it, per outgoing request,
//! for the headers that authenticate that request. Concrete strategies (API key,
//! basic auth, bearer token, IAM, ...) live outside this crate; they call
//! [`validate`] from their constructors so that bad configuration is rejected
//! before any request is attempted.
//!
//! ```rust,no_run
//! use async_trait::async_trait;
//! use request_auth::auth::{AuthType, AuthenticateOptions, Authenticator, AuthenticatorExt, header};
//! use request_auth::{Configuration, Error, Result, validate};
//! use secrecy::SecretString;
//!
//! #[derive(Debug)]
//! struct BasicAuthenticator {
//!     username: String,
//!     password: SecretString,
//! }
//!
//! impl BasicAuthenticator {
//!     fn new(config: Configuration) -> Result<Self> {
//!         validate(&config, &["username", "password"])?;
//!         Ok(Self {
//!             username: config.get_str("username").unwrap_or_default().to_string(),
//!             password: config
//!                 .secret("password")
//!                 .ok_or_else(|| Error::Config("password must be a string".into()))?,
//!         })
//!     }
//! }
//!
//! #[async_trait]
//! impl Authenticator for BasicAuthenticator {
//!     fn auth_type(&self) -> AuthType {
//!         AuthType::Basic
//!     }
//!
//!     async fn authenticate(&self, options: &mut AuthenticateOptions) -> Result<()> {
//!         let value = header::basic_auth(&self.username, &self.password)?;
//!         options.set_header(reqwest::header::AUTHORIZATION, value);
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let config = Configuration::new()
//!     .with("username", "admin")
//!     .with("password", "hunter2");
//! let authenticator = BasicAuthenticator::new(config)?;
//! let request = reqwest::Client::new().get("https://api.example.com/v1/things");
//! let request = authenticator.authorize(request).await?;
//! # let _ = request;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod auth;
pub mod config;

pub use auth::{
    AuthType, AuthenticateOptions, Authenticator, AuthenticatorExt, spawn_authenticate,
};
pub use config::{
    CREDENTIAL_KEYS, Configuration, CredentialChecker, CredentialRules, MissingParamsDetector,
    RequiredKeys, ValidationError, Validator, validate,
};

/// Error type for request-auth operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The strategy never overrode [`Authenticator::authenticate`].
    #[error("authenticate should be implemented by the {auth_type} authenticator")]
    NotImplemented { auth_type: AuthType },

    /// Configuration rejected before the strategy was constructed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A strategy could not authenticate a request.
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    /// Header name or value cannot be sent over HTTP.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Configuration bag is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No async runtime to run the authentication on.
    #[error("Runtime unavailable: {0}")]
    Runtime(String),
}

/// Error category for unified error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A strategy is broken; never recoverable at runtime.
    Programming,
    /// Configuration rejected at construction time.
    Configuration,
    /// A single request could not be authenticated.
    Authentication,
    /// The environment the crate runs in is unusable.
    Internal,
}

impl Error {
    pub fn auth(message: impl Into<String>) -> Self {
        Error::Auth {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::NotImplemented { .. } => ErrorCategory::Programming,
            Error::Validation(_) | Error::Config(_) | Error::InvalidHeader(_) => {
                ErrorCategory::Configuration
            }
            Error::Auth { .. } => ErrorCategory::Authentication,
            Error::Runtime(_) => ErrorCategory::Internal,
        }
    }

    pub fn is_not_implemented(&self) -> bool {
        self.category() == ErrorCategory::Programming
    }

    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    pub fn is_authentication_failure(&self) -> bool {
        self.category() == ErrorCategory::Authentication
    }

    /// The underlying validation failure, if any.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::header::InvalidHeaderValue> for Error {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Error::InvalidHeader(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderName> for Error {
    fn from(err: reqwest::header::InvalidHeaderName) -> Self {
        Error::InvalidHeader(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
