//! Authenticator contract for outgoing requests.
//!
//! Concrete strategies (API key, basic auth, bearer token, IAM, container or
//! VPC identity, ...) implement [`Authenticator`]. Request-sending code only
//! ever sees the trait:
//!
//! - [`AuthenticatorExt::authenticate_headers`] yields the headers for one request
//! - [`AuthenticatorExt::authorize`] merges them into a `reqwest` request
//! - [`spawn_authenticate`] reports the outcome through a callback

mod auth_type;
mod callback;
pub mod header;
mod options;
mod traits;

pub use auth_type::AuthType;
pub use callback::spawn_authenticate;
pub use options::AuthenticateOptions;
pub use traits::{Authenticator, AuthenticatorExt};

pub use crate::config::validate;
