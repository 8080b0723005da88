pub mod auth;
pub mod dashboard;
pub mod health;
pub mod home;

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};

use crate::backend::SessionGrant;
use crate::errors::AppError;
use crate::state::AppState;

/// Matches the backend's own upload cap plus room for the job description.
const MAX_UPLOAD_BYTES: usize = 11 * 1024 * 1024;

/// 303 redirect that also relays the backend's `Set-Cookie` headers.
pub fn redirect_with_grant(to: &str, grant: &SessionGrant) -> Result<Response, AppError> {
    let mut response = Redirect::to(to).into_response();
    for cookie in &grant.set_cookies {
        let value = HeaderValue::from_str(cookie)
            .context("backend issued a Set-Cookie value that is not a valid header")?;
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    Ok(response)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(home::handle_home))
        .route(
            "/analyze",
            post(home::handle_analyze).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route(
            "/login",
            get(auth::handle_login_page).post(auth::handle_login),
        )
        .route("/logout", post(auth::handle_logout))
        .route("/dashboard", get(dashboard::handle_dashboard))
        .route(
            "/dashboard/candidates/:id/delete",
            get(dashboard::handle_confirm_delete).post(dashboard::handle_delete),
        )
        .with_state(state)
}
