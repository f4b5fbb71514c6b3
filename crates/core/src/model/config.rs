use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Validation failures for a quiz configuration draft.
///
/// The display strings are user-facing and shown verbatim in the config view.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("Please enter your Gemini API key")]
    MissingApiKey,

    #[error("Please enter a quiz topic")]
    MissingTopic,

    #[error("Number of questions must be between {min} and {max}", min = QuizConfig::MIN_QUESTIONS, max = QuizConfig::MAX_QUESTIONS)]
    QuestionCount(i64),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Difficulty level requested from the generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[serde(alias = "beginner")]
    Easy,
    #[default]
    Intermediate,
    #[serde(alias = "advanced")]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Intermediate, Self::Hard];

    /// Lowercase wire value, also used as the badge CSS modifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Hard => "hard",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "easy" | "beginner" => Ok(Self::Easy),
            "intermediate" => Ok(Self::Intermediate),
            "hard" | "advanced" => Ok(Self::Hard),
            _ => Err(ConfigError::UnknownDifficulty(raw.to_string())),
        }
    }
}

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Unvalidated configuration as collected from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfigDraft {
    pub api_key: String,
    pub topic: String,
    pub num_questions: i64,
    pub difficulty: Difficulty,
}

impl QuizConfigDraft {
    /// Check the draft and produce a config that is safe to send.
    ///
    /// Checks run in form order: API key, topic, question count.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` encountered.
    pub fn validate(self) -> Result<QuizConfig, ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        let topic = self.topic.trim();
        if topic.is_empty() {
            return Err(ConfigError::MissingTopic);
        }
        let num_questions = u32::try_from(self.num_questions)
            .ok()
            .filter(|n| (QuizConfig::MIN_QUESTIONS..=QuizConfig::MAX_QUESTIONS).contains(n))
            .ok_or(ConfigError::QuestionCount(self.num_questions))?;

        Ok(QuizConfig {
            api_key: self.api_key,
            topic: topic.to_string(),
            num_questions,
            difficulty: self.difficulty,
        })
    }
}

/// A validated quiz configuration. Lives only for one generation request.
#[derive(Clone, PartialEq, Eq)]
pub struct QuizConfig {
    api_key: String,
    topic: String,
    num_questions: u32,
    difficulty: Difficulty,
}

impl QuizConfig {
    pub const MIN_QUESTIONS: u32 = 1;
    pub const MAX_QUESTIONS: u32 = 25;

    pub const DEFAULT_TOPIC: &'static str = "Machine Learning";
    pub const DEFAULT_NUM_QUESTIONS: u32 = 10;

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn num_questions(&self) -> u32 {
        self.num_questions
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

// Keep the API key out of logs.
impl fmt::Debug for QuizConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizConfig")
            .field("api_key", &"<redacted>")
            .field("topic", &self.topic)
            .field("num_questions", &self.num_questions)
            .field("difficulty", &self.difficulty)
            .finish()
    }
}
