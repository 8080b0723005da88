use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Html,
    Form,
};
use serde::{Deserialize, Deserializer};

use crate::backend::SessionContext;
use crate::errors::AppError;
use crate::flows::{
    delete_candidate, guard_session, DashboardView, DeletionOutcome, DeletionTarget,
    GuardOutcome, LoadOutcome, ViewFilter,
};
use crate::render::{ConfirmDeletePage, DashboardPage, Nav};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct DashboardQuery {
    #[serde(default, deserialize_with = "lenient_filter")]
    pub filter: ViewFilter,
}

#[derive(Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_filter")]
    pub filter: ViewFilter,
}

#[derive(Deserialize)]
pub struct DeleteFields {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_filter")]
    pub filter: ViewFilter,
    /// `yes` when the user acknowledged the confirmation page.
    pub confirm: Option<String>,
}

fn lenient_filter<'de, D>(deserializer: D) -> Result<ViewFilter, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(|value| ViewFilter::from_param(&value))
        .unwrap_or_default())
}

fn signed_in_nav() -> Nav {
    Nav {
        authenticated: true,
        username: None,
    }
}

fn render_dashboard(view: &DashboardView) -> Result<Html<String>, AppError> {
    let nav = signed_in_nav();
    Ok(Html(DashboardPage::new(view, &nav).render()?))
}

/// GET /dashboard
///
/// Session guard, then the concurrent stats + screenings load.
pub async fn handle_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, AppError> {
    let session = SessionContext::from_headers(&headers);
    let mut view = DashboardView::new();
    view.set_filter(query.filter);

    match view.activate(state.api.as_ref(), &session).await {
        LoadOutcome::Unauthorized => Err(AppError::Unauthorized),
        LoadOutcome::Ready | LoadOutcome::Failed => render_dashboard(&view),
    }
}

/// GET /dashboard/candidates/:id/delete
///
/// The confirmation step. Nothing is deleted here.
pub async fn handle_confirm_delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Query(query): Query<DeleteQuery>,
) -> Result<Html<String>, AppError> {
    let session = SessionContext::from_headers(&headers);
    if guard_session(state.api.as_ref(), &session).await == GuardOutcome::RedirectToLogin {
        return Err(AppError::Unauthorized);
    }

    let target = DeletionTarget {
        id,
        name: query.name,
    };
    let nav = signed_in_nav();
    let page = ConfirmDeletePage::new(&target, query.filter, &nav).render()?;
    Ok(Html(page))
}

/// POST /dashboard/candidates/:id/delete
///
/// Runs the deletion flow; `confirm=yes` is the user's acknowledgment.
pub async fn handle_delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Form(fields): Form<DeleteFields>,
) -> Result<Html<String>, AppError> {
    let session = SessionContext::from_headers(&headers);
    let api = state.api.as_ref();
    let target = DeletionTarget {
        id,
        name: fields.name,
    };
    let confirmed = fields.confirm.as_deref() == Some("yes");
    let acknowledge = move |_: &str| confirmed;
    let mut view = DashboardView::new().with_filter(fields.filter);

    match delete_candidate(api, &session, &mut view, &target, &acknowledge).await {
        DeletionOutcome::Unauthorized | DeletionOutcome::Deleted(LoadOutcome::Unauthorized) => {
            Err(AppError::Unauthorized)
        }
        DeletionOutcome::Deleted(_) => render_dashboard(&view),
        DeletionOutcome::Cancelled | DeletionOutcome::Failed => {
            match view.load(api, &session).await {
                LoadOutcome::Unauthorized => Err(AppError::Unauthorized),
                LoadOutcome::Ready | LoadOutcome::Failed => render_dashboard(&view),
            }
        }
    }
}
