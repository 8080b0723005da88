use tracing::{info, warn};

use crate::backend::{ApiError, ScreenerApi, SessionContext, SessionGrant};

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Please enter your username and password";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const CONNECTION_FAILED_MESSAGE: &str =
    "Connection failed. Please check if the backend is running.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials accepted; relay the grant and go to the dashboard.
    LoggedIn(SessionGrant),
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    password: String,
    error: Option<String>,
    submitting: bool,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub async fn submit(&mut self, api: &dyn ScreenerApi) -> LoginOutcome {
        self.error = None;

        if self.username.trim().is_empty() || self.password.is_empty() {
            self.error = Some(MISSING_CREDENTIALS_MESSAGE.to_string());
            return LoginOutcome::Failed;
        }

        self.submitting = true;
        let reply = api.login(self.username.trim(), &self.password).await;
        self.submitting = false;

        let message = match reply {
            Ok(reply) if reply.response.success => {
                info!("Login succeeded for {}", self.username.trim());
                return LoginOutcome::LoggedIn(reply.grant);
            }
            Ok(reply) => reply
                .response
                .detail
                .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string()),
            Err(ApiError::Unauthorized { detail }) | Err(ApiError::Status { detail, .. }) => {
                detail.unwrap_or_else(|| INVALID_CREDENTIALS_MESSAGE.to_string())
            }
            Err(e) => {
                warn!("Login request failed: {e}");
                CONNECTION_FAILED_MESSAGE.to_string()
            }
        };

        info!("Login rejected for {}", self.username.trim());
        self.error = Some(message);
        self.password.clear();
        LoginOutcome::Failed
    }
}

/// Ends the backend session. The caller navigates to login whatever happens.
pub async fn logout(api: &dyn ScreenerApi, session: &SessionContext) -> SessionGrant {
    match api.logout(session).await {
        Ok(grant) => {
            info!("Logged out");
            grant
        }
        Err(e) => {
            warn!("Logout failed: {e}");
            SessionGrant::default()
        }
    }
}
