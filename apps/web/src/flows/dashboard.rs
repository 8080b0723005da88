//! Dashboard data loader and the view state it populates.
//!
//! Stats and screenings are requested together; neither is exposed unless
//! both succeed. A 401 from either discards everything and asks the caller
//! to redirect. Other failures leave an inline, retryable error.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::backend::{ApiError, ScreenerApi, SessionContext};
use crate::flows::session_guard::{guard_session, GuardOutcome};
use crate::models::{RecommendedAction, ScreeningRecord, StatsSummary};

pub const LOAD_FAILED_MESSAGE: &str = "Could not load dashboard data. Please try again.";

/// Client-side projection over the loaded screenings. Never sent to the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewFilter {
    #[default]
    All,
    Shortlist,
    Reject,
}

impl ViewFilter {
    pub const ALL: [ViewFilter; 3] = [ViewFilter::All, ViewFilter::Shortlist, ViewFilter::Reject];

    pub fn matches(&self, record: &ScreeningRecord) -> bool {
        match self {
            ViewFilter::All => true,
            ViewFilter::Shortlist => record.recommended_action == RecommendedAction::Shortlist,
            ViewFilter::Reject => record.recommended_action == RecommendedAction::Reject,
        }
    }

    /// Query-string value. Anything unrecognised shows everything.
    pub fn from_param(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|filter| filter.as_str().eq_ignore_ascii_case(value.trim()))
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewFilter::All => "All",
            ViewFilter::Shortlist => "Shortlist",
            ViewFilter::Reject => "Reject",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Ready,
    /// The backend answered 401; the caller must redirect to login.
    Unauthorized,
    /// Any other failure; `load_error()` carries the message.
    Failed,
}

#[derive(Debug, Clone)]
pub struct DashboardView {
    phase: Phase,
    stats: Option<StatsSummary>,
    screenings: Vec<ScreeningRecord>,
    filter: ViewFilter,
    load_error: Option<String>,
    notice: Option<Notice>,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            stats: None,
            screenings: Vec::new(),
            filter: ViewFilter::All,
            load_error: None,
            notice: None,
        }
    }

    pub fn with_filter(mut self, filter: ViewFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn stats(&self) -> Option<&StatsSummary> {
        self.stats.as_ref()
    }

    pub fn screenings(&self) -> &[ScreeningRecord] {
        &self.screenings
    }

    pub fn filter(&self) -> ViewFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: ViewFilter) {
        self.filter = filter;
    }

    /// Screenings passing the current filter, in backend order.
    pub fn visible(&self) -> Vec<&ScreeningRecord> {
        self.screenings
            .iter()
            .filter(|r| self.filter.matches(r))
            .collect()
    }

    pub fn count_for(&self, filter: ViewFilter) -> usize {
        self.screenings.iter().filter(|r| filter.matches(r)).count()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// Session guard first, then the data load. Nothing protected is
    /// requested unless the guard passes.
    pub async fn activate(
        &mut self,
        api: &dyn ScreenerApi,
        session: &SessionContext,
    ) -> LoadOutcome {
        match guard_session(api, session).await {
            GuardOutcome::Authenticated => self.load(api, session).await,
            GuardOutcome::RedirectToLogin => {
                self.discard();
                LoadOutcome::Unauthorized
            }
        }
    }

    /// Fetches stats and screenings concurrently. Re-invokable; does not re-run
    /// the session guard.
    pub async fn load(
        &mut self,
        api: &dyn ScreenerApi,
        session: &SessionContext,
    ) -> LoadOutcome {
        self.phase = Phase::Loading;
        debug!("Fetching dashboard stats and screenings");

        let (stats, screenings) =
            tokio::join!(api.fetch_stats(session), api.fetch_screenings(session));

        let outcome = match (stats, screenings) {
            (Ok(stats), Ok(screenings)) => {
                info!(
                    "Dashboard loaded: {} screenings, {} candidates",
                    screenings.len(),
                    stats.total_candidates
                );
                self.stats = Some(stats);
                self.screenings = screenings;
                self.load_error = None;
                LoadOutcome::Ready
            }
            (stats, screenings) => {
                let errors: Vec<ApiError> = [stats.err(), screenings.err()]
                    .into_iter()
                    .flatten()
                    .collect();
                errors.iter().for_each(log_load_failure);
                let unauthorized = errors.iter().any(ApiError::is_unauthorized);

                self.discard();
                if unauthorized {
                    LoadOutcome::Unauthorized
                } else {
                    self.load_error = Some(LOAD_FAILED_MESSAGE.to_string());
                    LoadOutcome::Failed
                }
            }
        };

        self.phase = Phase::Ready;
        outcome
    }

    fn discard(&mut self) {
        self.stats = None;
        self.screenings.clear();
        self.load_error = None;
    }
}

fn log_load_failure(e: &ApiError) {
    if e.is_unauthorized() {
        info!("Dashboard fetch rejected (401)");
    } else {
        warn!("Dashboard fetch failed: {e}");
    }
}
