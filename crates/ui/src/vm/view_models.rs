use std::time::Duration;

use quiz_core::{
    AnswerSet, Difficulty, GradeReport, OptionKey, Quiz, QuizConfig, QuizConfigDraft, ScoreTier,
};

/// The four mutually exclusive sections of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    Config,
    Loading,
    Quiz,
    Results,
}

//
// ─── CONFIG FORM ───────────────────────────────────────────────────────────────
//

/// Raw form input, as typed by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigForm {
    pub api_key: String,
    pub topic: String,
    pub num_questions: String,
    pub difficulty: Difficulty,
}

impl Default for ConfigForm {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            topic: QuizConfig::DEFAULT_TOPIC.to_string(),
            num_questions: QuizConfig::DEFAULT_NUM_QUESTIONS.to_string(),
            difficulty: Difficulty::default(),
        }
    }
}

impl ConfigForm {
    #[must_use]
    pub fn to_draft(&self) -> QuizConfigDraft {
        // Non-numeric input fails the range check.
        let num_questions = self.num_questions.trim().parse::<i64>().unwrap_or(0);
        QuizConfigDraft {
            api_key: self.api_key.clone(),
            topic: self.topic.clone(),
            num_questions,
            difficulty: self.difficulty,
        }
    }
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizHeaderVm {
    pub topic: String,
    pub difficulty: Difficulty,
}

impl QuizHeaderVm {
    #[must_use]
    pub fn from_quiz(quiz: &Quiz) -> Self {
        Self {
            topic: quiz.topic().to_string(),
            difficulty: quiz.difficulty(),
        }
    }

    #[must_use]
    pub fn badge_class(&self) -> String {
        format!("difficulty-badge {}", self.difficulty.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub key: OptionKey,
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub total: usize,
    pub text: String,
    pub options: Vec<OptionVm>,
}

impl QuestionVm {
    #[must_use]
    pub fn build(quiz: &Quiz, index: usize, answers: &AnswerSet) -> Option<Self> {
        let question = quiz.question(index)?;
        let chosen = answers.get(index);
        let options = question
            .options()
            .iter()
            .map(|(key, text)| OptionVm {
                key: key.clone(),
                text: text.clone(),
                selected: chosen == Some(key),
            })
            .collect();
        Some(Self {
            index,
            total: quiz.len(),
            text: question.text().to_string(),
            options,
        })
    }

    #[must_use]
    pub fn number(&self) -> usize {
        self.index + 1
    }

    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("Question {} of {}", self.number(), self.total)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&OptionKey> {
        self.options
            .iter()
            .find(|option| option.selected)
            .map(|option| &option.key)
    }
}

/// Enabled/visible state of the prev/next/submit controls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub previous_disabled: bool,
    pub next_disabled: bool,
    pub submit_visible: bool,
}

impl NavigationState {
    #[must_use]
    pub fn compute(index: usize, total: usize, answered: bool) -> Self {
        let is_last = index + 1 >= total;
        Self {
            previous_disabled: index == 0,
            next_disabled: !answered || is_last,
            submit_visible: is_last && answered,
        }
    }
}

//
// ─── RESULTS ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultItemVm {
    pub number: usize,
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: String,
}

impl ResultItemVm {
    #[must_use]
    pub fn status_class(&self) -> &'static str {
        if self.is_correct { "correct" } else { "incorrect" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub percentage_label: String,
    pub score_text: String,
    pub tier: ScoreTier,
    pub items: Vec<ResultItemVm>,
}

impl ResultsVm {
    #[must_use]
    pub fn from_report(report: &GradeReport) -> Self {
        let items = report
            .results
            .iter()
            .enumerate()
            .map(|(index, result)| ResultItemVm {
                number: index + 1,
                question: result.question.clone(),
                user_answer: result.user_answer.clone(),
                correct_answer: result.correct_answer.clone(),
                is_correct: result.is_correct,
                explanation: result.explanation.clone(),
            })
            .collect();
        Self {
            percentage_label: report.percentage_label(),
            score_text: report.score_text(),
            tier: report.tier(),
            items,
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.tier.message()
    }
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// A transient message shown above the config form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorNotice {
    pub id: u64,
    pub message: String,
    pub dismiss_after: Duration,
}
