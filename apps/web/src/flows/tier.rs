const TOP_TIER_MIN: f64 = 7.0;
const MIDDLE_TIER_MIN: f64 = 5.0;

/// Display band for a 0–10 match score. Shared by the upload result and the
/// dashboard cards so both always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Top,    // score >= 7
    Middle, // 5 <= score < 7
    Bottom, // score < 5
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= TOP_TIER_MIN {
            ScoreTier::Top
        } else if score >= MIDDLE_TIER_MIN {
            ScoreTier::Middle
        } else {
            ScoreTier::Bottom
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreTier::Top => "top",
            ScoreTier::Middle => "middle",
            ScoreTier::Bottom => "bottom",
        }
    }
}
