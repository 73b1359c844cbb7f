//! Helpers for building `Authorization` header values.
//!
//! Every value produced here is marked sensitive, so it is redacted from the
//! `Debug` output of the header map and from HTTP/2 header compression.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

use crate::Result;

/// `Basic <base64(username:password)>`.
pub fn basic_auth(username: &str, password: &SecretString) -> Result<HeaderValue> {
    let encoded = STANDARD.encode(format!("{}:{}", username, password.expose_secret()));
    sensitive_value(&format!("Basic {}", encoded))
}

/// `Bearer <token>`.
pub fn bearer(token: &SecretString) -> Result<HeaderValue> {
    sensitive_value(&format!("Bearer {}", token.expose_secret()))
}

/// Header value marked sensitive.
pub fn sensitive_value(raw: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(raw)?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth() {
        let value = basic_auth("admin", &SecretString::from("hunter2")).unwrap();
        assert_eq!(value, "Basic YWRtaW46aHVudGVyMg==");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_bearer() {
        let value = bearer(&SecretString::from("eyJhbGciOi")).unwrap();
        assert_eq!(value, "Bearer eyJhbGciOi");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_sensitive_value_hidden_from_debug() {
        let value = sensitive_value("secret-value").unwrap();
        assert!(!format!("{:?}", value).contains("secret-value"));
    }

    #[test]
    fn test_rejects_control_characters() {
        assert!(bearer(&SecretString::from("tok\r\nen")).is_err());
    }
}
