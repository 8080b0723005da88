use askama::Template;
use axum::{
    extract::{Multipart, State},
    http::HeaderMap,
    response::Html,
};
use tracing::debug;
use uuid::Uuid;

use crate::backend::{ResumeFile, ScreenerApi, SessionContext};
use crate::errors::AppError;
use crate::flows::UploadForm;
use crate::render::{HomePage, Nav};
use crate::state::AppState;

/// Header links for public pages. Any failure counts as signed out.
pub async fn nav_for(api: &dyn ScreenerApi, session: &SessionContext) -> Nav {
    if !session.has_cookie() {
        return Nav::default();
    }
    match api.auth_status(session).await {
        Ok(status) if status.authenticated => Nav {
            authenticated: true,
            username: status.username,
        },
        Ok(_) => Nav::default(),
        Err(e) => {
            debug!("Auth check failed ({e}); rendering signed-out navigation");
            Nav::default()
        }
    }
}

/// GET /
pub async fn handle_home(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Html<String>, AppError> {
    let session = SessionContext::from_headers(&headers);
    let nav = nav_for(state.api.as_ref(), &session).await;
    let form = UploadForm::new();
    Ok(Html(HomePage::new(&form, &nav).render()?))
}

/// POST /analyze
///
/// Multipart body with `file` and `job_description`, plus `dropped=1` when
/// the file came in through the drop zone. After a failed screening the page
/// carries `retained_file`, a token for the resume kept server-side, so a
/// retry without a new file reuses it. Validation and the backend call
/// happen in `UploadForm::submit`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let session = SessionContext::from_headers(&headers);
    let mut form = UploadForm::new();
    let mut files = Vec::new();
    let mut dropped = false;
    let mut retained_token = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.body_text()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?;

                let mut file = ResumeFile::new(file_name, bytes);
                if let Some(content_type) = content_type {
                    file = file.with_content_type(content_type);
                }
                // Browsers send an empty part when no file was chosen.
                if !file.is_empty() {
                    files.push(file);
                }
            }
            Some("dropped") => {
                dropped = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?
                    == "1";
            }
            Some("retained_file") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?;
                retained_token = Uuid::parse_str(text.trim()).ok();
            }
            Some("job_description") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(e.body_text()))?;
                form.set_job_description(text);
            }
            _ => {}
        }
    }

    // A fresh upload wins; the kept copy is dropped either way.
    if let Some(kept) = retained_token.and_then(|token| state.retained.take(&token)) {
        if files.is_empty() {
            debug!("Reusing retained resume {}", kept.file_name);
            form.select_files([kept]);
        }
    }
    if dropped {
        form.drop_files(files);
    } else {
        form.select_files(files);
    }

    form.submit(state.api.as_ref(), &session).await;
    // Success clears the selection; anything still selected must survive
    // into the re-rendered form.
    let retained = form.file().cloned().map(|file| state.retained.keep(file));

    let nav = nav_for(state.api.as_ref(), &session).await;
    let mut page = HomePage::new(&form, &nav);
    if let Some(token) = retained {
        page = page.with_retained_file(token);
    }
    Ok(Html(page.render()?))
}
