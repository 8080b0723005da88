use askama::Template;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::backend::SessionContext;
use crate::errors::AppError;
use crate::flows::{self, LoginForm, LoginOutcome, DASHBOARD_PATH, LOGIN_PATH};
use crate::render::{LoginPage, Nav};
use crate::routes::redirect_with_grant;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginFields {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// GET /login
pub async fn handle_login_page() -> Result<Html<String>, AppError> {
    let form = LoginForm::default();
    Ok(Html(LoginPage::new(&form, &Nav::default()).render()?))
}

/// POST /login
pub async fn handle_login(
    State(state): State<AppState>,
    Form(fields): Form<LoginFields>,
) -> Result<Response, AppError> {
    let mut form = LoginForm::new(fields.username, fields.password);

    match form.submit(state.api.as_ref()).await {
        LoginOutcome::LoggedIn(grant) => redirect_with_grant(DASHBOARD_PATH, &grant),
        LoginOutcome::Failed => {
            let page = LoginPage::new(&form, &Nav::default()).render()?;
            Ok(Html(page).into_response())
        }
    }
}

/// POST /logout
pub async fn handle_logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let session = SessionContext::from_headers(&headers);
    let grant = flows::logout(state.api.as_ref(), &session).await;
    redirect_with_grant(LOGIN_PATH, &grant)
}
