#![allow(dead_code)]

use serde::{Deserialize, Serialize};

use crate::models::null_as_default;
use crate::models::screening::RecommendedAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub years: Option<f64>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub gpa: Option<String>,
}

/// Structured candidate data the backend extracted from the resume.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CandidateProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub total_experience_years: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchScore {
    pub score: f64, // 1.0 – 10.0
    pub recommended_action: RecommendedAction,
    #[serde(default, deserialize_with = "null_as_default")]
    pub justification: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub strengths: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub concerns: Vec<String>,
}

impl MatchScore {
    /// Score rendered with one decimal, e.g. `8.2/10`.
    pub fn display(&self) -> String {
        format!("{:.1}/10", self.score)
    }
}

/// Response of `POST /api/analyze/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub candidate: CandidateProfile,
    pub match_score: MatchScore,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub resume_filename: Option<String>,
    #[serde(default)]
    pub screened_at: Option<String>,
    #[serde(default)]
    pub candidate_id: Option<i64>,
}
