//! Backend client. The only place the front end talks to the screening API.
//!
//! Flows depend on the `ScreenerApi` trait; `HttpScreenerApi` is the reqwest
//! implementation wired in at startup. Nothing here retries.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::models::{AnalysisResult, AuthStatus, LoginResponse, ScreeningRecord, StatsSummary};

pub mod endpoints;
pub mod http;
pub mod session;
#[cfg(test)]
pub mod testing;

pub use endpoints::Endpoints;
pub use http::HttpScreenerApi;
pub use session::{SessionContext, SessionGrant};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 401.
    #[error("not authenticated")]
    Unauthorized { detail: Option<String> },

    #[error("backend returned status {status}")]
    Status { status: u16, detail: Option<String> },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// The `detail` string of the backend's error body, when it sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { detail } | ApiError::Status { detail, .. } => {
                detail.as_deref()
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// A resume file chosen through the picker or dropped on the upload target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl ResumeFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes: bytes.into(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.file_name.trim().is_empty() || self.bytes.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct LoginReply {
    pub response: LoginResponse,
    pub grant: SessionGrant,
}

/// Typed surface of the screening backend.
///
/// Carried in `AppState` as `Arc<dyn ScreenerApi>`. Every call that touches a
/// protected resource takes the caller's `SessionContext` explicitly.
#[async_trait]
pub trait ScreenerApi: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<LoginReply, ApiError>;

    async fn logout(&self, session: &SessionContext) -> Result<SessionGrant, ApiError>;

    async fn auth_status(&self, session: &SessionContext) -> Result<AuthStatus, ApiError>;

    /// Lightweight existence check against the stats resource; no body is read.
    async fn probe_session(&self, session: &SessionContext) -> Result<(), ApiError>;

    async fn fetch_stats(&self, session: &SessionContext) -> Result<StatsSummary, ApiError>;

    async fn fetch_screenings(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<ScreeningRecord>, ApiError>;

    async fn analyze_resume(
        &self,
        session: &SessionContext,
        file: &ResumeFile,
        job_description: &str,
    ) -> Result<AnalysisResult, ApiError>;

    async fn delete_candidate(&self, session: &SessionContext, id: i64) -> Result<(), ApiError>;
}
