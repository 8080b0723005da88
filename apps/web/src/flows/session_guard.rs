use tracing::{debug, info, warn};

use crate::backend::{ApiError, ScreenerApi, SessionContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Authenticated,
    RedirectToLogin,
}

/// Probes a protected resource before any protected data is requested.
///
/// Fails closed: 401, transport failures and unexpected statuses all send the
/// visitor to the login page. A 405 means the backend does not route HEAD for
/// the probe; the loader's own GET requests then carry the auth check.
pub async fn guard_session(api: &dyn ScreenerApi, session: &SessionContext) -> GuardOutcome {
    match api.probe_session(session).await {
        Ok(()) => GuardOutcome::Authenticated,
        Err(ApiError::Status { status: 405, .. }) => {
            debug!("Session probe not routed by backend (405); deferring to data load");
            GuardOutcome::Authenticated
        }
        Err(e) if e.is_unauthorized() => {
            info!("Session probe rejected; redirecting to login");
            GuardOutcome::RedirectToLogin
        }
        Err(e) => {
            warn!("Session probe failed ({e}); redirecting to login");
            GuardOutcome::RedirectToLogin
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::{Call, FakeApi, Fail};

    #[tokio::test]
    async fn test_successful_probe_authenticates() {
        let api = FakeApi::new();
        let outcome = guard_session(&api, &SessionContext::with_cookie("s=1")).await;
        assert_eq!(outcome, GuardOutcome::Authenticated);
        assert_eq!(api.calls(), vec![Call::Probe]);
    }

    #[tokio::test]
    async fn test_unauthorized_probe_redirects() {
        let api = FakeApi::new().with_probe(Err(Fail::Unauthorized(None)));
        let outcome = guard_session(&api, &SessionContext::default()).await;
        assert_eq!(outcome, GuardOutcome::RedirectToLogin);
    }

    #[tokio::test]
    async fn test_transport_failure_fails_closed() {
        let api = FakeApi::new().with_probe(Err(Fail::Transport));
        let outcome = guard_session(&api, &SessionContext::with_cookie("s=1")).await;
        assert_eq!(outcome, GuardOutcome::RedirectToLogin);
    }

    #[tokio::test]
    async fn test_server_error_fails_closed() {
        let api = FakeApi::new().with_probe(Err(Fail::Status(500, None)));
        let outcome = guard_session(&api, &SessionContext::with_cookie("s=1")).await;
        assert_eq!(outcome, GuardOutcome::RedirectToLogin);
    }

    #[tokio::test]
    async fn test_method_not_allowed_defers_to_loader() {
        let api = FakeApi::new().with_probe(Err(Fail::Status(405, None)));
        let outcome = guard_session(&api, &SessionContext::with_cookie("s=1")).await;
        assert_eq!(outcome, GuardOutcome::Authenticated);
    }
}
