// Client-side flows: session guard, dashboard loading, deletion, upload, login.
// Each flow is plain Rust over `ScreenerApi`; routes interpret their outcomes
// and perform navigation.

pub mod dashboard;
pub mod deletion;
pub mod login;
pub mod session_guard;
pub mod tier;
pub mod upload;

pub use dashboard::{DashboardView, LoadOutcome, Notice, ViewFilter};
pub use deletion::{delete_candidate, DeletionOutcome, DeletionTarget};
pub use login::{logout, LoginForm, LoginOutcome};
pub use session_guard::{guard_session, GuardOutcome};
pub use tier::ScoreTier;
pub use upload::UploadForm;

/// Where the login redirect sends unauthenticated visitors.
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
