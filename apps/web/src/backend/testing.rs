//! Scripted in-memory `ScreenerApi` used by flow and route tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::backend::{
    ApiError, LoginReply, ResumeFile, ScreenerApi, SessionContext, SessionGrant,
};
use crate::models::analysis::{CandidateProfile, MatchScore};
use crate::models::{
    AnalysisResult, AuthStatus, LoginResponse, RecommendedAction, ScreeningRecord, StatsSummary,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Login { username: String },
    Logout,
    AuthStatus,
    Probe,
    Stats,
    Screenings,
    Analyze {
        file_name: String,
        job_description: String,
    },
    Delete(i64),
}

/// A failure the fake should answer with.
#[derive(Debug, Clone)]
pub enum Fail {
    Unauthorized(Option<String>),
    Status(u16, Option<String>),
    Transport,
    Malformed,
}

impl Fail {
    fn into_error(self) -> ApiError {
        match self {
            Fail::Unauthorized(detail) => ApiError::Unauthorized { detail },
            Fail::Status(status, detail) => ApiError::Status { status, detail },
            Fail::Transport => ApiError::Transport("connection refused".to_string()),
            Fail::Malformed => match serde_json::from_str::<serde_json::Value>("{not json") {
                Err(e) => ApiError::Parse(e),
                Ok(_) => unreachable!("malformed fixture parsed"),
            },
        }
    }
}

type Scripted<T> = Result<T, Fail>;

pub struct FakeApi {
    calls: Mutex<Vec<Call>>,
    login: Scripted<LoginReply>,
    logout: Scripted<SessionGrant>,
    auth: Scripted<AuthStatus>,
    probe: Scripted<()>,
    stats: Scripted<StatsSummary>,
    screenings: Scripted<Vec<ScreeningRecord>>,
    analyze: Scripted<AnalysisResult>,
    delete: Scripted<()>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            login: Ok(LoginReply {
                response: LoginResponse {
                    success: true,
                    detail: None,
                    message: Some("Login successful".to_string()),
                },
                grant: SessionGrant {
                    set_cookies: vec!["resume_screener_session=fresh; Path=/".to_string()],
                },
            }),
            logout: Ok(SessionGrant::default()),
            auth: Ok(AuthStatus {
                authenticated: true,
                username: Some("admin".to_string()),
            }),
            probe: Ok(()),
            stats: Ok(StatsSummary::default()),
            screenings: Ok(Vec::new()),
            analyze: Ok(analysis("Jane Doe", 8.2, RecommendedAction::Shortlist)),
            delete: Ok(()),
        }
    }
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_login(mut self, reply: Scripted<LoginReply>) -> Self {
        self.login = reply;
        self
    }

    pub fn with_logout(mut self, reply: Scripted<SessionGrant>) -> Self {
        self.logout = reply;
        self
    }

    pub fn with_auth(mut self, reply: Scripted<AuthStatus>) -> Self {
        self.auth = reply;
        self
    }

    pub fn with_probe(mut self, reply: Scripted<()>) -> Self {
        self.probe = reply;
        self
    }

    pub fn with_stats(mut self, reply: Scripted<StatsSummary>) -> Self {
        self.stats = reply;
        self
    }

    pub fn with_screenings(mut self, reply: Scripted<Vec<ScreeningRecord>>) -> Self {
        self.screenings = reply;
        self
    }

    pub fn with_analyze(mut self, reply: Scripted<AnalysisResult>) -> Self {
        self.analyze = reply;
        self
    }

    pub fn with_delete(mut self, reply: Scripted<()>) -> Self {
        self.delete = reply;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls().iter().filter(|c| *c == call).count()
    }

    fn record<T: Clone>(&self, call: Call, reply: &Scripted<T>) -> Result<T, ApiError> {
        self.calls.lock().unwrap().push(call);
        reply.clone().map_err(Fail::into_error)
    }
}

#[async_trait]
impl ScreenerApi for FakeApi {
    async fn login(&self, username: &str, _password: &str) -> Result<LoginReply, ApiError> {
        self.record(
            Call::Login {
                username: username.to_string(),
            },
            &self.login,
        )
    }

    async fn logout(&self, _session: &SessionContext) -> Result<SessionGrant, ApiError> {
        self.record(Call::Logout, &self.logout)
    }

    async fn auth_status(&self, _session: &SessionContext) -> Result<AuthStatus, ApiError> {
        self.record(Call::AuthStatus, &self.auth)
    }

    async fn probe_session(&self, _session: &SessionContext) -> Result<(), ApiError> {
        self.record(Call::Probe, &self.probe)
    }

    async fn fetch_stats(&self, _session: &SessionContext) -> Result<StatsSummary, ApiError> {
        self.record(Call::Stats, &self.stats)
    }

    async fn fetch_screenings(
        &self,
        _session: &SessionContext,
    ) -> Result<Vec<ScreeningRecord>, ApiError> {
        self.record(Call::Screenings, &self.screenings)
    }

    async fn analyze_resume(
        &self,
        _session: &SessionContext,
        file: &ResumeFile,
        job_description: &str,
    ) -> Result<AnalysisResult, ApiError> {
        self.record(
            Call::Analyze {
                file_name: file.file_name.clone(),
                job_description: job_description.to_string(),
            },
            &self.analyze,
        )
    }

    async fn delete_candidate(&self, _session: &SessionContext, id: i64) -> Result<(), ApiError> {
        self.record(Call::Delete(id), &self.delete)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fixtures
// ────────────────────────────────────────────────────────────────────────────

pub fn record(id: i64, action: RecommendedAction, score: f64) -> ScreeningRecord {
    ScreeningRecord {
        id,
        candidate_id: id,
        candidate_name: Some(format!("Candidate {id}")),
        candidate_email: Some(format!("candidate{id}@example.com")),
        job_title: Some("Backend Engineer".to_string()),
        match_score: score,
        recommended_action: action,
        justification: "Evaluated against the job description".to_string(),
        strengths: vec!["Rust".to_string()],
        concerns: vec![],
        screened_at: None,
    }
}

/// Records with ids 1.. in the order shortlisted, then maybe, then rejected.
pub fn screenings(shortlisted: usize, maybe: usize, rejected: usize) -> Vec<ScreeningRecord> {
    let actions = std::iter::repeat(RecommendedAction::Shortlist)
        .take(shortlisted)
        .chain(std::iter::repeat(RecommendedAction::Maybe).take(maybe))
        .chain(std::iter::repeat(RecommendedAction::Reject).take(rejected));

    actions
        .enumerate()
        .map(|(i, action)| {
            let score = match action {
                RecommendedAction::Shortlist => 8.0,
                RecommendedAction::Maybe => 6.0,
                RecommendedAction::Reject => 3.0,
            };
            record(i as i64 + 1, action, score)
        })
        .collect()
}

pub fn analysis(name: &str, score: f64, action: RecommendedAction) -> AnalysisResult {
    AnalysisResult {
        candidate: CandidateProfile {
            name: Some(name.to_string()),
            email: Some("j@x.com".to_string()),
            ..CandidateProfile::default()
        },
        match_score: MatchScore {
            score,
            recommended_action: action,
            justification: String::new(),
            strengths: vec![],
            concerns: vec![],
        },
        job_description: None,
        resume_filename: None,
        screened_at: None,
        candidate_id: None,
    }
}
