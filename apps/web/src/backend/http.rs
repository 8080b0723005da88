use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header,
    multipart::{Form, Part},
    Client, RequestBuilder, Response, StatusCode,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::backend::{
    ApiError, Endpoints, LoginReply, ResumeFile, ScreenerApi, SessionContext, SessionGrant,
};
use crate::models::{
    AnalysisResult, AuthStatus, LoginResponse, ScreeningRecord, ScreeningsPage, StatsSummary,
};

/// reqwest-backed `ScreenerApi`.
///
/// One attempt per call: a failure is returned to the flow as-is.
#[derive(Clone)]
pub struct HttpScreenerApi {
    client: Client,
    endpoints: Endpoints,
}

impl HttpScreenerApi {
    pub fn new(endpoints: Endpoints, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoints,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    fn with_session(request: RequestBuilder, session: &SessionContext) -> RequestBuilder {
        match session.cookie_header() {
            Some(cookie) => request.header(header::COOKIE, cookie),
            None => request,
        }
    }

    /// Sends the request and sorts the response into success, 401 or another failure.
    async fn send(&self, request: RequestBuilder, operation: &str) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            warn!("{operation}: backend unreachable: {e}");
            ApiError::from(e)
        })?;

        let status = response.status();
        debug!("{operation}: backend answered {status}");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body);

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized { detail });
        }

        warn!("{operation}: backend returned {status}");
        Err(ApiError::Status {
            status: status.as_u16(),
            detail,
        })
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Best-effort `detail` string from an error body. Anything else yields `None`.
fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .map(str::to_string)
}

fn session_grant(response: &Response) -> SessionGrant {
    SessionGrant {
        set_cookies: response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect(),
    }
}

#[async_trait]
impl ScreenerApi for HttpScreenerApi {
    async fn login(&self, username: &str, password: &str) -> Result<LoginReply, ApiError> {
        let request = self
            .client
            .post(self.endpoints.login())
            .form(&[("username", username), ("password", password)]);

        let response = self.send(request, "login").await?;
        let grant = session_grant(&response);
        let response: LoginResponse = Self::read_json(response).await?;

        Ok(LoginReply { response, grant })
    }

    async fn logout(&self, session: &SessionContext) -> Result<SessionGrant, ApiError> {
        let request = Self::with_session(self.client.post(self.endpoints.logout()), session);
        let response = self.send(request, "logout").await?;
        Ok(session_grant(&response))
    }

    async fn auth_status(&self, session: &SessionContext) -> Result<AuthStatus, ApiError> {
        let request = Self::with_session(self.client.get(self.endpoints.auth_check()), session);
        let response = self.send(request, "auth_check").await?;
        Self::read_json(response).await
    }

    async fn probe_session(&self, session: &SessionContext) -> Result<(), ApiError> {
        let request = Self::with_session(self.client.head(self.endpoints.stats()), session);
        self.send(request, "probe_session").await?;
        Ok(())
    }

    async fn fetch_stats(&self, session: &SessionContext) -> Result<StatsSummary, ApiError> {
        let request = Self::with_session(self.client.get(self.endpoints.stats()), session);
        let response = self.send(request, "fetch_stats").await?;
        Self::read_json(response).await
    }

    async fn fetch_screenings(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<ScreeningRecord>, ApiError> {
        let request = Self::with_session(self.client.get(self.endpoints.screenings()), session);
        let response = self.send(request, "fetch_screenings").await?;
        let page: ScreeningsPage = Self::read_json(response).await?;
        Ok(page.screenings)
    }

    async fn analyze_resume(
        &self,
        session: &SessionContext,
        file: &ResumeFile,
        job_description: &str,
    ) -> Result<AnalysisResult, ApiError> {
        let mut part = Part::bytes(file.bytes.to_vec()).file_name(file.file_name.clone());
        if let Some(content_type) = &file.content_type {
            part = part.mime_str(content_type)?;
        }
        let form = Form::new()
            .part("file", part)
            .text("job_description", job_description.to_string());

        let request = Self::with_session(
            self.client.post(self.endpoints.analyze()).multipart(form),
            session,
        );
        let response = self.send(request, "analyze_resume").await?;
        Self::read_json(response).await
    }

    async fn delete_candidate(&self, session: &SessionContext, id: i64) -> Result<(), ApiError> {
        let request = Self::with_session(self.client.delete(self.endpoints.candidate(id)), session);
        self.send(request, "delete_candidate").await?;
        Ok(())
    }
}
