use serde::{Deserialize, Serialize};

//
// ─── GRADE REPORT ──────────────────────────────────────────────────────────────
//

/// Outcome for a single question as reported by the grader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    #[serde(default)]
    pub explanation: String,
}

/// Aggregate grading response. Read-only once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeReport {
    pub score: u32,
    pub total: u32,
    pub percentage: f64,
    pub results: Vec<QuestionResult>,
}

impl GradeReport {
    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_percentage(self.percentage)
    }

    #[must_use]
    pub fn percentage_label(&self) -> String {
        format_percentage(self.percentage)
    }

    #[must_use]
    pub fn score_text(&self) -> String {
        format!("You scored {} out of {}", self.score, self.total)
    }
}

//
// ─── SCORE TIERS ───────────────────────────────────────────────────────────────
//

/// Feedback band for a percentage score. Lower bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// 90 and above.
    Excellent,
    /// 80 to below 90.
    Great,
    /// 70 to below 80.
    Good,
    /// 60 to below 70.
    Fair,
    /// Below 60.
    KeepLearning,
}

impl ScoreTier {
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::Excellent
        } else if percentage >= 80.0 {
            Self::Great
        } else if percentage >= 70.0 {
            Self::Good
        } else if percentage >= 60.0 {
            Self::Fair
        } else {
            Self::KeepLearning
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent! You're a machine learning expert!",
            ScoreTier::Great => "Great job! You have a solid understanding!",
            ScoreTier::Good => "Good work! Keep studying to improve!",
            ScoreTier::Fair => "Not bad! Review the topics and try again!",
            ScoreTier::KeepLearning => "Keep learning! Practice makes perfect!",
        }
    }
}

/// `50.0` renders as `50%`, `66.666` as `66.67%`.
#[must_use]
pub fn format_percentage(percentage: f64) -> String {
    let rounded = format!("{percentage:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}%")
}
