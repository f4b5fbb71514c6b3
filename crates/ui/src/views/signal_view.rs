use dioxus::prelude::*;

use crate::vm::{
    ActiveView, ConfigForm, ErrorNotice, NavigationState, QuestionVm, QuizHeaderVm, QuizView,
    ResultsVm,
};

/// `QuizView` backed by Dioxus signals. Components read the signals; the
/// controller writes them.
#[derive(Clone, Copy, PartialEq)]
pub struct SignalView {
    pub active: Signal<ActiveView>,
    pub header: Signal<Option<QuizHeaderVm>>,
    pub question: Signal<Option<QuestionVm>>,
    pub navigation: Signal<NavigationState>,
    pub results: Signal<Option<ResultsVm>>,
    pub error: Signal<Option<ErrorNotice>>,
    pub form: Signal<ConfigForm>,
}

/// Hook: allocate the signals for one page.
pub fn use_signal_view() -> SignalView {
    SignalView {
        active: use_signal(ActiveView::default),
        header: use_signal(|| None),
        question: use_signal(|| None),
        navigation: use_signal(NavigationState::default),
        results: use_signal(|| None),
        error: use_signal(|| None),
        form: use_signal(ConfigForm::default),
    }
}

impl QuizView for SignalView {
    fn show(&mut self, view: ActiveView) {
        self.active.set(view);
    }

    fn set_quiz_header(&mut self, header: &QuizHeaderVm) {
        self.header.set(Some(header.clone()));
    }

    fn render_question(&mut self, question: &QuestionVm, navigation: NavigationState) {
        self.question.set(Some(question.clone()));
        self.navigation.set(navigation);
    }

    fn render_results(&mut self, results: &ResultsVm) {
        self.results.set(Some(results.clone()));
    }

    fn show_error(&mut self, notice: &ErrorNotice) {
        self.error.set(Some(notice.clone()));
    }

    fn hide_error(&mut self) {
        self.error.set(None);
    }

    fn reset_config_form(&mut self, form: &ConfigForm) {
        self.form.set(form.clone());
    }
}
