use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::quiz::{OptionKey, Quiz};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    /// Holds 1-based question numbers in ascending order.
    #[error("Please answer all questions. Unanswered: {}", join_numbers(.0))]
    Unanswered(Vec<usize>),

    #[error("question index {index} is out of range for {total} questions")]
    IndexOutOfRange { index: usize, total: usize },

    #[error("option {key} is not offered by question {number}")]
    UnknownOption { key: OptionKey, number: usize },
}

fn join_numbers(numbers: &[usize]) -> String {
    numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

//
// ─── ANSWER SET ────────────────────────────────────────────────────────────────
//

/// Sparse map from zero-based question index to the chosen option.
///
/// Serialises as `{"0": "A", "2": "C"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<usize, OptionKey>);

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key` for question `index`, replacing any earlier choice.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError` if the index is not a question of `quiz` or the
    /// question does not offer `key`.
    pub fn record(&mut self, quiz: &Quiz, index: usize, key: OptionKey) -> Result<(), AnswerError> {
        let question = quiz.question(index).ok_or(AnswerError::IndexOutOfRange {
            index,
            total: quiz.len(),
        })?;
        if !question.has_option(&key) {
            return Err(AnswerError::UnknownOption {
                key,
                number: index + 1,
            });
        }
        self.0.insert(index, key);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&OptionKey> {
        self.0.get(&index)
    }

    #[must_use]
    pub fn is_answered(&self, index: usize) -> bool {
        self.0.contains_key(&index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// 1-based numbers of the questions in `0..total` without an answer.
    #[must_use]
    pub fn unanswered(&self, total: usize) -> Vec<usize> {
        (0..total)
            .filter(|index| !self.is_answered(*index))
            .map(|index| index + 1)
            .collect()
    }

    /// # Errors
    ///
    /// Returns `AnswerError::Unanswered` listing every missing question.
    pub fn ensure_complete(&self, total: usize) -> Result<(), AnswerError> {
        let missing = self.unanswered(total);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AnswerError::Unanswered(missing))
        }
    }
}
