use std::sync::Arc;

use crate::backend::ScreenerApi;
use crate::retained::RetainedUploads;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Backend client. `HttpScreenerApi` in production; swapped for a fake in tests.
    pub api: Arc<dyn ScreenerApi>,
    /// Resumes from failed screenings, so a retry does not need a new upload.
    pub retained: Arc<RetainedUploads>,
}

impl AppState {
    pub fn new(api: Arc<dyn ScreenerApi>) -> Self {
        Self {
            api,
            retained: Arc::new(RetainedUploads::default()),
        }
    }
}
