use tracing::{info, warn};

use crate::backend::{ScreenerApi, SessionContext};
use crate::flows::dashboard::{DashboardView, LoadOutcome, Notice};

pub const DELETED_MESSAGE: &str = "Candidate deleted successfully!";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete candidate";

/// Explicit user acknowledgment obtained before a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionTarget {
    pub id: i64,
    pub name: String,
}

impl DeletionTarget {
    pub fn prompt(&self) -> String {
        format!("Are you sure you want to delete {}?", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// Declined; nothing was sent.
    Cancelled,
    /// Deleted, and the dashboard was re-synchronized with this result.
    Deleted(LoadOutcome),
    /// The backend answered 401; the caller must redirect to login.
    Unauthorized,
    /// Delete failed; the view's data is untouched.
    Failed,
}

/// Confirms, deletes, then reloads the dashboard from the backend.
/// No local removal happens: the list only changes through the reload.
pub async fn delete_candidate(
    api: &dyn ScreenerApi,
    session: &SessionContext,
    view: &mut DashboardView,
    target: &DeletionTarget,
    confirm: &(dyn Confirm + Sync),
) -> DeletionOutcome {
    if !confirm.confirm(&target.prompt()) {
        info!("Deletion of candidate {} cancelled", target.id);
        return DeletionOutcome::Cancelled;
    }

    match api.delete_candidate(session, target.id).await {
        Ok(()) => {
            info!("Candidate {} deleted", target.id);
            view.set_notice(Notice::Success(DELETED_MESSAGE.to_string()));
            DeletionOutcome::Deleted(view.load(api, session).await)
        }
        Err(e) if e.is_unauthorized() => {
            info!("Deletion of candidate {} rejected (401)", target.id);
            DeletionOutcome::Unauthorized
        }
        Err(e) => {
            warn!("Deletion of candidate {} failed: {e}", target.id);
            view.set_notice(Notice::Failure(DELETE_FAILED_MESSAGE.to_string()));
            DeletionOutcome::Failed
        }
    }
}
