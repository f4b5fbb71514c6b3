use std::sync::Arc;
use std::time::Duration;

use quiz_core::{AnswerSet, GradeReport, OptionKey, Quiz};
use services::{GenerateQuizRequest, QuizApi, QuizApiError, SubmitQuizRequest};

use crate::vm::quiz_view::QuizView;
use crate::vm::view_models::{
    ActiveView, ConfigForm, ErrorNotice, NavigationState, QuestionVm, QuizHeaderVm, ResultsVm,
};

/// How long an error notice stays on screen.
pub const ERROR_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Synchronous user intents. Network-bound actions have their own methods.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    SelectAnswer { index: usize, key: OptionKey },
    Previous,
    Next,
    NewQuiz,
    Retry,
    DismissError(u64),
}

/// Drives one page through config → loading → quiz → results.
///
/// Network calls are split into `begin_*` / `finish_*` so a renderer can
/// release its borrow of the controller while the request is awaited.
/// `submit_config` and `submit_quiz` run both halves in one go.
pub struct QuizController<V: QuizView> {
    api: Arc<dyn QuizApi>,
    view: V,
    active: ActiveView,
    quiz: Option<Quiz>,
    index: usize,
    answers: AnswerSet,
    report: Option<GradeReport>,
    error: Option<ErrorNotice>,
    next_error_id: u64,
}

impl<V: QuizView> QuizController<V> {
    /// The view is assumed to start on a default config form.
    #[must_use]
    pub fn new(api: Arc<dyn QuizApi>, view: V) -> Self {
        Self {
            api,
            view,
            active: ActiveView::Config,
            quiz: None,
            index: 0,
            answers: AnswerSet::new(),
            report: None,
            error: None,
            next_error_id: 1,
        }
    }

    #[must_use]
    pub fn api(&self) -> Arc<dyn QuizApi> {
        Arc::clone(&self.api)
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub fn active_view(&self) -> ActiveView {
        self.active
    }

    #[must_use]
    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn report(&self) -> Option<&GradeReport> {
        self.report.as_ref()
    }

    #[must_use]
    pub fn error(&self) -> Option<&ErrorNotice> {
        self.error.as_ref()
    }

    /// Navigation controls for the current question. All disabled without a quiz.
    #[must_use]
    pub fn navigation(&self) -> NavigationState {
        match &self.quiz {
            Some(quiz) => NavigationState::compute(
                self.index,
                quiz.len(),
                self.answers.is_answered(self.index),
            ),
            None => NavigationState {
                previous_disabled: true,
                next_disabled: true,
                submit_visible: false,
            },
        }
    }

    pub fn handle(&mut self, intent: QuizIntent) {
        match intent {
            QuizIntent::SelectAnswer { index, key } => self.select_answer(index, key),
            QuizIntent::Previous => self.go_to_previous(),
            QuizIntent::Next => self.go_to_next(),
            QuizIntent::NewQuiz => self.start_new_quiz(),
            QuizIntent::Retry => {
                self.retry_quiz();
            }
            QuizIntent::DismissError(id) => self.dismiss_error(id),
        }
    }

    //
    // ─── GENERATION ────────────────────────────────────────────────────────────
    //

    /// Validate the form and switch to loading.
    ///
    /// Returns `None` (with an error shown) when validation fails; no request
    /// should be sent in that case.
    pub fn begin_generate(&mut self, form: &ConfigForm) -> Option<GenerateQuizRequest> {
        let config = match form.to_draft().validate() {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!(error = %err, "quiz config rejected");
                self.show_error(err.to_string());
                return None;
            }
        };
        tracing::info!(?config, "requesting quiz");
        self.transition(ActiveView::Loading);
        Some(GenerateQuizRequest::from(&config))
    }

    pub fn finish_generate(&mut self, result: Result<Quiz, QuizApiError>) {
        match result {
            Ok(quiz) => {
                tracing::info!(questions = quiz.len(), topic = quiz.topic(), "quiz ready");
                self.view.set_quiz_header(&QuizHeaderVm::from_quiz(&quiz));
                self.quiz = Some(quiz);
                self.index = 0;
                self.answers.clear();
                self.report = None;
                self.enter_quiz();
            }
            Err(err) => {
                tracing::warn!(error = %err, "quiz generation failed");
                self.show_error(format!("Failed to generate quiz: {err}"));
            }
        }
    }

    /// Returns true when the quiz view was reached.
    pub async fn submit_config(&mut self, form: &ConfigForm) -> bool {
        let Some(request) = self.begin_generate(form) else {
            return false;
        };
        let result = self.api.generate_quiz(&request).await;
        self.finish_generate(result);
        self.active == ActiveView::Quiz
    }

    //
    // ─── ANSWERING ─────────────────────────────────────────────────────────────
    //

    /// Record a choice for `index`. Invalid indices or keys are ignored.
    pub fn select_answer(&mut self, index: usize, key: OptionKey) {
        let Some(quiz) = self.quiz.as_ref() else {
            tracing::warn!(index, "answer selected without an active quiz");
            return;
        };
        if let Err(err) = self.answers.record(quiz, index, key) {
            tracing::warn!(error = %err, "ignoring answer selection");
            return;
        }
        self.render_current();
    }

    pub fn go_to_previous(&mut self) {
        if self.quiz.is_some() && self.index > 0 {
            self.index -= 1;
            self.render_current();
        }
    }

    pub fn go_to_next(&mut self) {
        let Some(quiz) = self.quiz.as_ref() else {
            return;
        };
        if self.index < quiz.last_index() {
            self.index += 1;
            self.render_current();
        }
    }

    //
    // ─── GRADING ───────────────────────────────────────────────────────────────
    //

    /// Check every question is answered and switch to loading.
    ///
    /// Returns `None` without an active quiz or when questions are missing
    /// answers (an error naming them is shown).
    pub fn begin_submit(&mut self) -> Option<SubmitQuizRequest> {
        let quiz = self.quiz.as_ref()?;
        if let Err(err) = self.answers.ensure_complete(quiz.len()) {
            self.show_error(err.to_string());
            return None;
        }
        let request = SubmitQuizRequest {
            answers: self.answers.clone(),
            questions: quiz.questions().to_vec(),
        };
        tracing::info!(answers = request.answers.len(), "submitting quiz");
        self.transition(ActiveView::Loading);
        Some(request)
    }

    pub fn finish_submit(&mut self, result: Result<GradeReport, QuizApiError>) {
        match result {
            Ok(report) => {
                tracing::info!(score = report.score, total = report.total, "quiz graded");
                self.transition(ActiveView::Results);
                self.view.render_results(&ResultsVm::from_report(&report));
                self.report = Some(report);
            }
            Err(err) => {
                tracing::warn!(error = %err, "quiz submission failed");
                self.show_error(format!("Failed to submit quiz: {err}"));
            }
        }
    }

    /// Returns true when the results view was reached.
    pub async fn submit_quiz(&mut self) -> bool {
        let Some(request) = self.begin_submit() else {
            return false;
        };
        let result = self.api.submit_quiz(&request).await;
        self.finish_submit(result);
        self.active == ActiveView::Results
    }

    //
    // ─── RESETS ────────────────────────────────────────────────────────────────
    //

    pub fn start_new_quiz(&mut self) {
        self.quiz = None;
        self.index = 0;
        self.answers.clear();
        self.report = None;
        self.view.reset_config_form(&ConfigForm::default());
        self.transition(ActiveView::Config);
    }

    /// Restart the current quiz from question 1 with no answers.
    ///
    /// Returns false, changing nothing, when there is no quiz to retry.
    pub fn retry_quiz(&mut self) -> bool {
        if self.quiz.is_none() {
            tracing::debug!("retry requested without a quiz");
            return false;
        }
        self.index = 0;
        self.answers.clear();
        self.report = None;
        self.enter_quiz();
        true
    }

    //
    // ─── ERRORS ────────────────────────────────────────────────────────────────
    //

    /// Return to the config view and display `message` for five seconds.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.transition(ActiveView::Config);
        let notice = ErrorNotice {
            id: self.next_error_id,
            message: message.into(),
            dismiss_after: ERROR_DISMISS_AFTER,
        };
        self.next_error_id += 1;
        self.view.show_error(&notice);
        self.error = Some(notice);
    }

    /// Hide notice `id` if it is still the one on screen.
    pub fn dismiss_error(&mut self, id: u64) {
        if self.error.as_ref().is_some_and(|notice| notice.id == id) {
            self.error = None;
            self.view.hide_error();
        }
    }

    //
    // ─── INTERNALS ─────────────────────────────────────────────────────────────
    //

    fn transition(&mut self, next: ActiveView) {
        if self.error.take().is_some() {
            self.view.hide_error();
        }
        tracing::debug!(from = ?self.active, to = ?next, "view transition");
        self.active = next;
        self.view.show(next);
    }

    fn enter_quiz(&mut self) {
        self.transition(ActiveView::Quiz);
        self.render_current();
    }

    fn render_current(&mut self) {
        let Some(quiz) = self.quiz.as_ref() else {
            return;
        };
        if let Some(question) = QuestionVm::build(quiz, self.index, &self.answers) {
            let navigation = self.navigation();
            self.view.render_question(&question, navigation);
        }
    }
}
