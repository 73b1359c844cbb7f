//! Key/value configuration a strategy is constructed with.
//!
//! Values are JSON so that strategy-specific fields (URLs, flags, scopes) can
//! sit next to the credentials. The bag is built up front and then handed to a
//! strategy, which owns it for its lifetime; there are no in-place mutators.

use std::fmt;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::auth::AuthType;
use crate::{Error, Result};

const AUTH_TYPE_KEY: &str = "authtype";
const SENSITIVE_MARKERS: [&str; 5] = ["apikey", "api_key", "password", "secret", "token"];

/// Open key/value bag supplied by the caller constructing a strategy.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    values: Map<String, Value>,
}

impl Configuration {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self { values: Map::new() }
    }

    /// Add a value during construction (builder pattern).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Parse a configuration from a JSON object literal.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("Invalid configuration JSON: {}", e)))?;
        Self::try_from(value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String value for `key`; `None` when absent or not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).and_then(Value::as_bool)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Present, non-null and, for strings, not blank.
    pub fn is_present(&self, key: &str) -> bool {
        match self.values.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        }
    }

    /// String value wrapped so it never shows up in logs.
    pub fn secret(&self, key: &str) -> Option<SecretString> {
        self.get_str(key).map(SecretString::from)
    }

    /// The `authtype` entry, if one was supplied.
    pub fn auth_type(&self) -> Result<Option<AuthType>> {
        self.get_str(AUTH_TYPE_KEY).map(str::parse).transpose()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn is_sensitive(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    SENSITIVE_MARKERS.iter().any(|marker| key.contains(marker))
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in &self.values {
            if is_sensitive(key) {
                map.entry(key, &"[redacted]");
            } else {
                map.entry(key, value);
            }
        }
        map.finish()
    }
}

impl TryFrom<Value> for Configuration {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(Error::Config(format!(
                "expected a JSON object, got {}",
                value_type_name(&other)
            ))),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Configuration
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
