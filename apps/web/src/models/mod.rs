pub mod analysis;
pub mod auth;
pub mod screening;

use serde::{Deserialize, Deserializer};

pub use analysis::AnalysisResult;
pub use auth::{AuthStatus, LoginResponse};
pub use screening::{RecommendedAction, ScreeningRecord, ScreeningsPage, StatsSummary};

/// Nullable backend columns: `null` and a missing key both give the default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
