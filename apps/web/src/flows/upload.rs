//! Resume upload form state.
//!
//! Holds the chosen file, the job description, the in-flight flag and the
//! last result or error. Drag hover highlighting runs in the page's
//! drop-zone script; a dropped file is selected exactly like a picked one.

use tracing::{debug, info, warn};

use crate::backend::{ApiError, ResumeFile, ScreenerApi, SessionContext};
use crate::models::AnalysisResult;

pub const MISSING_INPUT_MESSAGE: &str = "Please upload a resume and provide a job description";
pub const SCREENING_FAILED_MESSAGE: &str = "Screening failed";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An error occurred during screening";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Failed local validation; no request was sent.
    Rejected,
    /// A submission is already in flight.
    Busy,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    file: Option<ResumeFile>,
    job_description: String,
    submitting: bool,
    result: Option<AnalysisResult>,
    error: Option<String>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&ResumeFile> {
        self.file.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// File-picker selection. Only the first file counts; an empty
    /// selection keeps the current file.
    pub fn select_files(&mut self, files: impl IntoIterator<Item = ResumeFile>) {
        if let Some(file) = files.into_iter().next() {
            self.file = Some(file);
        }
    }

    /// Files released over the drop zone; same rules as the picker.
    pub fn drop_files(&mut self, files: impl IntoIterator<Item = ResumeFile>) {
        debug!("Resume dropped onto the upload zone");
        self.select_files(files);
    }

    fn is_ready(&self) -> bool {
        self.file.as_ref().is_some_and(|f| !f.is_empty()) && !self.job_description.trim().is_empty()
    }

    /// Validates, then sends one multipart request with the file and text.
    ///
    /// Success clears the file selection so the same resume is not sent twice.
    /// Failure keeps both inputs for a retry.
    pub async fn submit(
        &mut self,
        api: &dyn ScreenerApi,
        session: &SessionContext,
    ) -> SubmitOutcome {
        if self.submitting {
            return SubmitOutcome::Busy;
        }

        if !self.is_ready() {
            self.error = Some(MISSING_INPUT_MESSAGE.to_string());
            return SubmitOutcome::Rejected;
        }
        let Some(file) = self.file.clone() else {
            return SubmitOutcome::Rejected;
        };

        self.submitting = true;
        self.error = None;
        self.result = None;

        let outcome = match api
            .analyze_resume(session, &file, &self.job_description)
            .await
        {
            Ok(result) => {
                info!(
                    "Screened {}: {} ({})",
                    file.file_name,
                    result.match_score.display(),
                    result.match_score.recommended_action
                );
                self.result = Some(result);
                self.file = None;
                SubmitOutcome::Completed
            }
            Err(e) => {
                warn!("Screening of {} failed: {e}", file.file_name);
                self.error = Some(failure_message(&e));
                SubmitOutcome::Failed
            }
        };

        self.submitting = false;
        outcome
    }
}

fn failure_message(e: &ApiError) -> String {
    match e {
        ApiError::Unauthorized { detail } | ApiError::Status { detail, .. } => detail
            .clone()
            .unwrap_or_else(|| SCREENING_FAILED_MESSAGE.to_string()),
        ApiError::Transport(_) | ApiError::Parse(_) => UNEXPECTED_ERROR_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::{Call, FakeApi, Fail};
    use crate::flows::tier::ScoreTier;

    fn resume() -> ResumeFile {
        ResumeFile::new("jane.pdf", b"%PDF-1.4".to_vec()).with_content_type("application/pdf")
    }

    fn ready_form() -> UploadForm {
        let mut form = UploadForm::new();
        form.select_files([resume()]);
        form.set_job_description("Senior Rust engineer with Postgres experience");
        form
    }

    #[tokio::test]
    async fn test_whitespace_description_is_rejected_locally() {
        let api = FakeApi::new();
        let mut form = UploadForm::new();
        form.select_files([resume()]);
        form.set_job_description("   \n\t ");

        let outcome = form.submit(&api, &SessionContext::default()).await;

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(form.error(), Some(MISSING_INPUT_MESSAGE));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_rejected_locally() {
        let api = FakeApi::new();
        let mut form = UploadForm::new();
        form.set_job_description("Backend engineer");

        assert_eq!(
            form.submit(&api, &SessionContext::default()).await,
            SubmitOutcome::Rejected
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_valid_submission_sends_once_and_clears_file() {
        let api = FakeApi::new();
        let mut form = ready_form();

        let outcome = form.submit(&api, &SessionContext::default()).await;

        assert_eq!(outcome, SubmitOutcome::Completed);
        assert_eq!(
            api.calls(),
            vec![Call::Analyze {
                file_name: "jane.pdf".to_string(),
                job_description: "Senior Rust engineer with Postgres experience".to_string(),
            }]
        );
        assert!(form.file().is_none());
        assert!(!form.is_submitting());
        assert!(form.error().is_none());

        let result = form.result().unwrap();
        assert_eq!(result.match_score.display(), "8.2/10");
        assert_eq!(ScoreTier::from_score(result.match_score.score), ScoreTier::Top);
    }

    #[tokio::test]
    async fn test_failure_uses_backend_detail_and_keeps_inputs() {
        let api = FakeApi::new().with_analyze(Err(Fail::Status(400, Some("PDF only".into()))));
        let mut form = ready_form();

        let outcome = form.submit(&api, &SessionContext::default()).await;

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(form.error(), Some("PDF only"));
        assert!(form.file().is_some());
        assert!(!form.job_description().is_empty());
        assert!(form.result().is_none());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_failure_without_detail_uses_fallback() {
        let api = FakeApi::new().with_analyze(Err(Fail::Status(500, None)));
        let mut form = ready_form();
        form.submit(&api, &SessionContext::default()).await;
        assert_eq!(form.error(), Some(SCREENING_FAILED_MESSAGE));

        let api = FakeApi::new().with_analyze(Err(Fail::Malformed));
        let mut form = ready_form();
        form.submit(&api, &SessionContext::default()).await;
        assert_eq!(form.error(), Some(UNEXPECTED_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_new_submission_clears_previous_error() {
        let api = FakeApi::new();
        let mut form = UploadForm::new();
        form.submit(&api, &SessionContext::default()).await;
        assert!(form.error().is_some());

        form.select_files([resume()]);
        form.set_job_description("Data engineer");
        form.submit(&api, &SessionContext::default()).await;
        assert!(form.error().is_none());
    }

    #[test]
    fn test_drop_keeps_only_first_file() {
        let mut form = UploadForm::new();
        let second = ResumeFile::new("other.pdf", b"%PDF".to_vec());
        form.drop_files([resume(), second]);
        assert_eq!(form.file().unwrap().file_name, "jane.pdf");
    }

    #[test]
    fn test_empty_drop_keeps_current_file() {
        let mut form = UploadForm::new();
        form.select_files([resume()]);
        form.drop_files(Vec::new());
        assert_eq!(form.file().unwrap().file_name, "jane.pdf");
    }
}
