use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::null_as_default;

/// Outcome of a screening as decided by the backend.
/// Unknown values are rejected when the payload is parsed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RecommendedAction {
    Shortlist,
    Maybe,
    Reject,
}

impl RecommendedAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendedAction::Shortlist => "Shortlist",
            RecommendedAction::Maybe => "Maybe",
            RecommendedAction::Reject => "Reject",
        }
    }
}

impl fmt::Display for RecommendedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One completed resume evaluation, as listed by `GET /api/screenings/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScreeningRecord {
    pub id: i64,
    pub candidate_id: i64,
    #[serde(default)]
    pub candidate_name: Option<String>,
    #[serde(default)]
    pub candidate_email: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    pub match_score: f64, // 0.0 – 10.0
    pub recommended_action: RecommendedAction,
    #[serde(default, deserialize_with = "null_as_default")]
    pub justification: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub strengths: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub concerns: Vec<String>,
    #[serde(default)]
    pub screened_at: Option<NaiveDateTime>,
}

impl ScreeningRecord {
    pub fn display_name(&self) -> &str {
        self.candidate_name.as_deref().unwrap_or("Unknown candidate")
    }
}

/// Envelope returned by `GET /api/screenings/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningsPage {
    pub screenings: Vec<ScreeningRecord>,
}

/// Aggregate counts computed server-side by `GET /api/stats/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsSummary {
    pub total_candidates: u64,
    pub total_screenings: u64,
    pub shortlisted: u64,
    pub rejected: u64,
    #[serde(default)]
    pub maybe: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_screening_record_parses_backend_shape() {
        let record: ScreeningRecord = serde_json::from_value(json!({
            "id": 3,
            "candidate_id": 7,
            "candidate_name": "Jane Doe",
            "candidate_email": "j@x.com",
            "job_title": "Backend Engineer",
            "match_score": 8.2,
            "recommended_action": "Shortlist",
            "justification": "Strong Rust background",
            "strengths": ["Rust", "Postgres"],
            "concerns": [],
            "screened_at": "2024-05-01T10:15:30.123456"
        }))
        .unwrap();

        assert_eq!(record.recommended_action, RecommendedAction::Shortlist);
        assert_eq!(record.strengths, vec!["Rust", "Postgres"]);
        assert!(record.screened_at.is_some());
    }

    #[test]
    fn test_screening_record_tolerates_null_candidate_fields() {
        let record: ScreeningRecord = serde_json::from_value(json!({
            "id": 1,
            "candidate_id": 1,
            "candidate_name": null,
            "candidate_email": null,
            "job_title": null,
            "match_score": 4.0,
            "recommended_action": "Reject",
            "justification": "",
            "strengths": [],
            "concerns": ["No relevant experience"],
            "screened_at": null
        }))
        .unwrap();

        assert_eq!(record.display_name(), "Unknown candidate");
    }

    #[test]
    fn test_null_text_columns_parse_as_empty() {
        let record: ScreeningRecord = serde_json::from_value(json!({
            "id": 2,
            "candidate_id": 5,
            "candidate_name": "Sam Lee",
            "match_score": 5.5,
            "recommended_action": "Maybe",
            "justification": null,
            "strengths": null,
            "concerns": null,
            "screened_at": "2024-05-02T09:00:00"
        }))
        .unwrap();

        assert_eq!(record.justification, "");
        assert!(record.strengths.is_empty());
        assert!(record.concerns.is_empty());
    }

    #[test]
    fn test_unknown_recommended_action_is_rejected() {
        let result = serde_json::from_value::<ScreeningRecord>(json!({
            "id": 1,
            "candidate_id": 1,
            "match_score": 6.0,
            "recommended_action": "Hire immediately"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_stats_summary_maybe_defaults_to_zero() {
        let stats: StatsSummary = serde_json::from_value(json!({
            "total_candidates": 10,
            "total_screenings": 12,
            "shortlisted": 4,
            "rejected": 8
        }))
        .unwrap();
        assert_eq!(stats.maybe, 0);
        assert_eq!(stats.total_screenings, 12);
    }
}
