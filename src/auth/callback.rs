//! Callback-style completion for callers that are not written as async code.

use std::sync::Arc;

use reqwest::header::HeaderMap;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::warn;

use super::{Authenticator, AuthenticatorExt};
use crate::{Error, Result};

/// Authenticate on the current tokio runtime and report through `callback`.
///
/// The callback runs exactly once, with either the headers or the error.
/// Outside a tokio runtime nothing is spawned: the callback receives
/// [`Error::Runtime`] before this returns `None`.
pub fn spawn_authenticate<F>(
    authenticator: Arc<dyn Authenticator>,
    callback: F,
) -> Option<JoinHandle<()>>
where
    F: FnOnce(Result<HeaderMap>) + Send + 'static,
{
    match Handle::try_current() {
        Ok(handle) => Some(handle.spawn(async move {
            let outcome = authenticator.authenticate_headers().await;
            callback(outcome);
        })),
        Err(e) => {
            warn!(
                auth_type = %authenticator.auth_type(),
                error = %e,
                "no tokio runtime to authenticate on"
            );
            callback(Err(Error::Runtime(e.to_string())));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthType, AuthenticateOptions};
    use async_trait::async_trait;
    use reqwest::header::{AUTHORIZATION, HeaderValue};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::oneshot;

    #[derive(Debug)]
    struct Static;

    #[async_trait]
    impl Authenticator for Static {
        fn auth_type(&self) -> AuthType {
            AuthType::BearerToken
        }

        async fn authenticate(&self, options: &mut AuthenticateOptions) -> Result<()> {
            options.set_header(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Failing;

    #[async_trait]
    impl Authenticator for Failing {
        fn auth_type(&self) -> AuthType {
            AuthType::Iam
        }

        async fn authenticate(&self, _options: &mut AuthenticateOptions) -> Result<()> {
            Err(Error::auth("iam token request rejected"))
        }
    }

    #[tokio::test]
    async fn test_callback_receives_headers() {
        let (tx, rx) = oneshot::channel();
        spawn_authenticate(Arc::new(Static), move |outcome| {
            let _ = tx.send(outcome);
        })
        .unwrap()
        .await
        .unwrap();

        let headers = rx.await.unwrap().unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer abc");
    }

    #[tokio::test]
    async fn test_callback_receives_error() {
        let (tx, rx) = oneshot::channel();
        spawn_authenticate(Arc::new(Failing), move |outcome| {
            let _ = tx.send(outcome);
        })
        .unwrap()
        .await
        .unwrap();

        let err = rx.await.unwrap().unwrap_err();
        assert!(err.to_string().contains("iam token request rejected"));
    }

    #[test]
    fn test_without_runtime_reports_error_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let outcome = Arc::new(Mutex::new(None));

        let handle = {
            let calls = Arc::clone(&calls);
            let outcome = Arc::clone(&outcome);
            spawn_authenticate(Arc::new(Static), move |result| {
                calls.fetch_add(1, Ordering::SeqCst);
                *outcome.lock().unwrap() = Some(result);
            })
        };

        assert!(handle.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let err = outcome.lock().unwrap().take().unwrap().unwrap_err();
        assert!(matches!(err, Error::Runtime(_)));
        assert_eq!(err.category(), crate::ErrorCategory::Internal);
    }
}
