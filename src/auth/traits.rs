//! Authenticator trait.

use std::fmt::Debug;
use std::future::Future;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use reqwest::header::HeaderMap;
use tracing::{debug, warn};

use super::{AuthType, AuthenticateOptions};
use crate::{Error, Result};

/// Authentication strategy interface.
///
/// A strategy validates its configuration when it is constructed (see
/// [`validate`](crate::validate)) and is then asked, once per outgoing
/// request, to write the headers that authenticate that request. A failed
/// call only affects that request; the strategy stays usable.
#[async_trait]
pub trait Authenticator: Send + Sync + Debug {
    /// Strategy family, for logging and error messages.
    fn auth_type(&self) -> AuthType;

    /// Populate `options` with the headers needed to authenticate a request.
    ///
    /// Every strategy must override this. The provided body fails with
    /// [`Error::NotImplemented`] on every call and leaves `options` untouched.
    async fn authenticate(&self, _options: &mut AuthenticateOptions) -> Result<()> {
        let auth_type = self.auth_type();
        warn!(%auth_type, "authenticate called on a strategy that does not implement it");
        Err(Error::NotImplemented { auth_type })
    }
}

/// Convenience methods for every [`Authenticator`].
pub trait AuthenticatorExt: Authenticator {
    /// Authenticate against fresh options.
    ///
    /// Yields the headers on success. On failure anything the strategy wrote
    /// before failing is dropped, so callers see an error or headers, never both.
    fn authenticate_headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send {
        async move {
            let auth_type = self.auth_type();
            let mut options = AuthenticateOptions::new();
            match self.authenticate(&mut options).await {
                Ok(()) => {
                    debug!(%auth_type, headers = options.len(), "request authenticated");
                    Ok(options.into_headers())
                }
                Err(e) => {
                    debug!(%auth_type, error = %e, "request authentication failed");
                    Err(e)
                }
            }
        }
    }

    /// Merge the authentication headers into an outgoing request.
    fn authorize(
        &self,
        request: RequestBuilder,
    ) -> impl Future<Output = Result<RequestBuilder>> + Send {
        async move {
            let headers = self.authenticate_headers().await?;
            Ok(request.headers(headers))
        }
    }
}

impl<A: Authenticator + ?Sized> AuthenticatorExt for A {}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{AUTHORIZATION, HeaderValue};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct Unfinished;

    impl Authenticator for Unfinished {
        fn auth_type(&self) -> AuthType {
            AuthType::Custom
        }
    }

    #[derive(Debug, Default)]
    struct Flaky {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Authenticator for Flaky {
        fn auth_type(&self) -> AuthType {
            AuthType::BearerToken
        }

        async fn authenticate(&self, options: &mut AuthenticateOptions) -> Result<()> {
            options.set_header(AUTHORIZATION, HeaderValue::from_static("Bearer partial"));
            if self.calls.fetch_add(1, Ordering::SeqCst) % 2 == 0 {
                Err(Error::auth("token endpoint unavailable"))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn test_default_authenticate_is_not_implemented() {
        let mut options = AuthenticateOptions::new();
        let err = Unfinished.authenticate(&mut options).await.unwrap_err();
        assert!(matches!(
            err,
            Error::NotImplemented {
                auth_type: AuthType::Custom
            }
        ));
        assert!(options.is_empty());
    }

    #[tokio::test]
    async fn test_not_implemented_regardless_of_options() {
        let mut options = AuthenticateOptions::new();
        options.set_header(AUTHORIZATION, HeaderValue::from_static("Basic preset"));
        let err = Unfinished.authenticate(&mut options).await.unwrap_err();
        assert!(err.is_not_implemented());
        assert_eq!(options.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_call_discards_partial_headers() {
        // The strategy writes a header before failing.
        let mut options = AuthenticateOptions::new();
        let direct = Flaky::default().authenticate(&mut options).await;
        assert!(direct.is_err());
        assert_eq!(options.headers()[AUTHORIZATION], "Bearer partial");

        // The same failure through fresh options surfaces as the error alone.
        let flaky = Flaky::default();
        let outcome = flaky.authenticate_headers().await;
        assert!(matches!(outcome, Err(ref e) if e.is_authentication_failure()));
        assert_eq!(flaky.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_strategy_reusable_after_failure() {
        let flaky = Flaky::default();
        assert!(flaky.authenticate_headers().await.is_err());

        let headers = flaky.authenticate_headers().await.unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer partial");
        assert_eq!(flaky.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_ext_through_trait_object() {
        let auth: Arc<dyn Authenticator> = Arc::new(Unfinished);
        let err = auth.authenticate_headers().await.unwrap_err();
        assert!(err.is_not_implemented());
    }

    #[tokio::test]
    async fn test_authorize_propagates_failure() {
        let request = reqwest::Client::new().get("http://localhost/never-sent");
        assert!(Unfinished.authorize(request).await.is_err());
    }
}
