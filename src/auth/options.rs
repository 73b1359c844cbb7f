//! Request-scoped destination for authentication headers.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::Result;

/// Headers an [`Authenticator`](super::Authenticator) writes for one request.
#[derive(Debug, Clone, Default)]
pub struct AuthenticateOptions {
    headers: HeaderMap,
}

impl AuthenticateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a header, replacing any previous value for the same name.
    pub fn set_header(&mut self, name: HeaderName, value: HeaderValue) -> &mut Self {
        self.headers.insert(name, value);
        self
    }

    /// Set a header from raw strings. The value is marked sensitive.
    pub fn try_set_header(&mut self, name: &str, value: &str) -> Result<&mut Self> {
        let name = HeaderName::try_from(name)?;
        let value = super::header::sensitive_value(value)?;
        Ok(self.set_header(name, value))
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn into_headers(self) -> HeaderMap {
        self.headers
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

impl From<HeaderMap> for AuthenticateOptions {
    fn from(headers: HeaderMap) -> Self {
        Self { headers }
    }
}
