#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    AnswerError, AnswerSet, ConfigError, Difficulty, GradeReport, OptionKey, Question,
    QuestionResult, Quiz, QuizConfig, QuizConfigDraft, QuizError, ScoreTier,
};
