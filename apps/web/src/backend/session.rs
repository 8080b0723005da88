use std::fmt;

use axum::http::{header, HeaderMap};

/// The caller's backend session, passed explicitly to every backend call.
///
/// Holds the raw `Cookie` header the browser sent us. The value is opaque:
/// it is forwarded to the backend as-is and never parsed or logged.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    cookie: Option<String>,
}

impl SessionContext {
    pub fn with_cookie(cookie: impl Into<String>) -> Self {
        let cookie = cookie.into();
        Self {
            cookie: (!cookie.trim().is_empty()).then_some(cookie),
        }
    }

    /// Joins every `Cookie` header of an incoming request.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let joined = headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect::<Vec<_>>()
            .join("; ");
        Self::with_cookie(joined)
    }

    pub fn cookie_header(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    pub fn has_cookie(&self) -> bool {
        self.cookie.is_some()
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("cookie", &self.cookie.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// `Set-Cookie` values issued by the backend, relayed verbatim to the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionGrant {
    pub set_cookies: Vec<String>,
}
