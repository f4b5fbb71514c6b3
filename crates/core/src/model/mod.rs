mod answers;
mod config;
mod grading;
mod quiz;

pub use answers::{AnswerError, AnswerSet};
pub use config::{ConfigError, Difficulty, QuizConfig, QuizConfigDraft};
pub use grading::{GradeReport, QuestionResult, ScoreTier, format_percentage};
pub use quiz::{OptionKey, Question, Quiz, QuizError};
