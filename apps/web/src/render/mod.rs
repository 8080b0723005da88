//! Askama page templates for the landing, login and dashboard pages.
//!
//! Markup lives in `templates/`; askama escapes every interpolated value.
//! All state decisions happen in `flows`, these types only shape it for the
//! templates.

use askama::Template;
use uuid::Uuid;

use crate::flows::{
    DashboardView, DeletionTarget, LoginForm, Notice, ScoreTier, UploadForm, ViewFilter,
};
use crate::models::{AnalysisResult, ScreeningRecord};

const UNKNOWN_CANDIDATE: &str = "Unknown candidate";

/// Navigation links shown in the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nav {
    pub authenticated: bool,
    pub username: Option<String>,
}

impl Nav {
    pub fn user(&self) -> &str {
        self.username.as_deref().unwrap_or("")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Landing page + upload
// ────────────────────────────────────────────────────────────────────────────

pub struct ResultView<'a> {
    pub result: &'a AnalysisResult,
    pub tier: &'static str,
}

impl<'a> ResultView<'a> {
    fn new(result: &'a AnalysisResult) -> Self {
        Self {
            result,
            tier: ScoreTier::from_score(result.match_score.score).as_str(),
        }
    }

    pub fn name(&self) -> &str {
        self.result.candidate.name.as_deref().unwrap_or(UNKNOWN_CANDIDATE)
    }

    pub fn email(&self) -> &str {
        self.result.candidate.email.as_deref().unwrap_or("")
    }

    pub fn skills(&self) -> String {
        self.result.candidate.skills.join(", ")
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage<'a> {
    pub nav: &'a Nav,
    pub form: &'a UploadForm,
    pub result: Option<ResultView<'a>>,
    /// Token for a resume kept after a failed screening.
    pub retained_file: Option<Uuid>,
}

impl<'a> HomePage<'a> {
    pub fn new(form: &'a UploadForm, nav: &'a Nav) -> Self {
        Self {
            nav,
            form,
            result: form.result().map(ResultView::new),
            retained_file: None,
        }
    }

    pub fn with_retained_file(mut self, token: Uuid) -> Self {
        self.retained_file = Some(token);
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Login + error
// ────────────────────────────────────────────────────────────────────────────

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage<'a> {
    pub nav: &'a Nav,
    pub form: &'a LoginForm,
}

impl<'a> LoginPage<'a> {
    pub fn new(form: &'a LoginForm, nav: &'a Nav) -> Self {
        Self { nav, form }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage<'a> {
    pub nav: &'a Nav,
    pub status: u16,
    pub message: &'a str,
}

// ────────────────────────────────────────────────────────────────────────────
// Dashboard
// ────────────────────────────────────────────────────────────────────────────

pub struct NoticeView<'a> {
    pub class: &'static str,
    pub role: &'static str,
    pub message: &'a str,
}

pub struct FilterLink {
    pub name: &'static str,
    pub count: usize,
    pub active: bool,
}

pub struct CardView<'a> {
    pub record: &'a ScreeningRecord,
    pub tier: &'static str,
    pub screened_at: String,
}

impl<'a> CardView<'a> {
    fn new(record: &'a ScreeningRecord) -> Self {
        Self {
            record,
            tier: ScoreTier::from_score(record.match_score).as_str(),
            screened_at: record
                .screened_at
                .map(|t| t.format("%b %-d, %Y %H:%M").to_string())
                .unwrap_or_default(),
        }
    }

    pub fn score(&self) -> String {
        format!("{:.1}/10", self.record.match_score)
    }

    pub fn email(&self) -> &str {
        self.record.candidate_email.as_deref().unwrap_or("")
    }

    pub fn job_title(&self) -> &str {
        self.record.job_title.as_deref().unwrap_or("")
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage<'a> {
    pub nav: &'a Nav,
    pub view: &'a DashboardView,
    pub notice: Option<NoticeView<'a>>,
    pub filter: &'static str,
    pub filters: Vec<FilterLink>,
    pub cards: Vec<CardView<'a>>,
}

impl<'a> DashboardPage<'a> {
    pub fn new(view: &'a DashboardView, nav: &'a Nav) -> Self {
        let notice = view.notice().map(|notice| match notice {
            Notice::Success(message) => NoticeView {
                class: "notice",
                role: "status",
                message,
            },
            Notice::Failure(message) => NoticeView {
                class: "error",
                role: "alert",
                message,
            },
        });
        let filters = ViewFilter::ALL
            .into_iter()
            .map(|filter| FilterLink {
                name: filter.as_str(),
                count: view.count_for(filter),
                active: filter == view.filter(),
            })
            .collect();

        Self {
            nav,
            view,
            notice,
            filter: view.filter().as_str(),
            filters,
            cards: view.visible().into_iter().map(CardView::new).collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "confirm_delete.html")]
pub struct ConfirmDeletePage<'a> {
    pub nav: &'a Nav,
    pub target: &'a DeletionTarget,
    pub filter: &'static str,
}

impl<'a> ConfirmDeletePage<'a> {
    pub fn new(target: &'a DeletionTarget, filter: ViewFilter, nav: &'a Nav) -> Self {
        Self {
            nav,
            target,
            filter: filter.as_str(),
        }
    }
}
