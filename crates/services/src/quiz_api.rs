use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use quiz_core::{AnswerSet, Difficulty, GradeReport, Question, Quiz, QuizConfig};

use crate::error::QuizApiError;

/// Backend contract: one call to generate a quiz, one to grade it.
#[async_trait]
pub trait QuizApi: Send + Sync {
    async fn generate_quiz(&self, request: &GenerateQuizRequest) -> Result<Quiz, QuizApiError>;

    async fn submit_quiz(&self, request: &SubmitQuizRequest) -> Result<GradeReport, QuizApiError>;
}

/// Body of `POST /generate_quiz`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct GenerateQuizRequest {
    pub api_key: String,
    pub topic: String,
    pub num_questions: u32,
    pub difficulty: Difficulty,
}

impl From<&QuizConfig> for GenerateQuizRequest {
    fn from(config: &QuizConfig) -> Self {
        Self {
            api_key: config.api_key().to_string(),
            topic: config.topic().to_string(),
            num_questions: config.num_questions(),
            difficulty: config.difficulty(),
        }
    }
}

impl std::fmt::Debug for GenerateQuizRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerateQuizRequest")
            .field("topic", &self.topic)
            .field("num_questions", &self.num_questions)
            .field("difficulty", &self.difficulty)
            .finish_non_exhaustive()
    }
}

/// Body of `POST /submit_quiz`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitQuizRequest {
    pub answers: AnswerSet,
    pub questions: Vec<Question>,
}

/// Success body of `POST /generate_quiz`.
///
/// Only `questions` is required; the labels fall back to what was requested.
#[derive(Debug, Deserialize)]
pub struct GenerateQuizResponse {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub questions: Option<Vec<Question>>,
}

impl GenerateQuizResponse {
    /// # Errors
    ///
    /// Returns `QuizApiError::MissingField` without `questions`, or
    /// `QuizApiError::InvalidQuiz` when the list is empty.
    pub fn into_quiz(self, request: &GenerateQuizRequest) -> Result<Quiz, QuizApiError> {
        let questions = self
            .questions
            .ok_or(QuizApiError::MissingField("questions"))?;
        let topic = self
            .topic
            .filter(|topic| !topic.trim().is_empty())
            .unwrap_or_else(|| request.topic.clone());
        let difficulty = self
            .difficulty
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(request.difficulty);
        Ok(Quiz::new(topic, difficulty, questions)?)
    }
}

/// Failure body shared by both endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
