//! Known authentication strategy families.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Strategy family an [`Authenticator`](super::Authenticator) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "String")]
#[non_exhaustive]
pub enum AuthType {
    /// Username and password.
    Basic,
    /// Caller-managed bearer token.
    BearerToken,
    /// API key exchanged for IAM access tokens.
    Iam,
    /// Compute resource token exchanged for IAM access tokens.
    Container,
    /// VPC instance metadata identity.
    Vpc,
    /// Cloud Pak for Data.
    Cp4d,
    /// Multi-cloud SaaS platform.
    Mcsp,
    /// Requests are sent unauthenticated.
    NoAuth,
    /// Anything defined outside this crate.
    Custom,
}

impl AuthType {
    pub const ALL: [AuthType; 9] = [
        AuthType::Basic,
        AuthType::BearerToken,
        AuthType::Iam,
        AuthType::Container,
        AuthType::Vpc,
        AuthType::Cp4d,
        AuthType::Mcsp,
        AuthType::NoAuth,
        AuthType::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthType::Basic => "basic",
            AuthType::BearerToken => "bearerToken",
            AuthType::Iam => "iam",
            AuthType::Container => "container",
            AuthType::Vpc => "vpc",
            AuthType::Cp4d => "cp4d",
            AuthType::Mcsp => "mcsp",
            AuthType::NoAuth => "noAuth",
            AuthType::Custom => "custom",
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::Config(format!("Unknown authentication type: {}", s)))
    }
}

impl TryFrom<String> for AuthType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
