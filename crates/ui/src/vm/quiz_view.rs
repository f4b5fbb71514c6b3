use crate::vm::view_models::{
    ActiveView, ConfigForm, ErrorNotice, NavigationState, QuestionVm, QuizHeaderVm, ResultsVm,
};

/// Output side of the controller: what a rendering layer has to implement.
///
/// Calls arrive in the order the controller makes state changes. `show` is
/// always called with the section that should be the only visible one.
pub trait QuizView {
    fn show(&mut self, view: ActiveView);

    fn set_quiz_header(&mut self, header: &QuizHeaderVm);

    fn render_question(&mut self, question: &QuestionVm, navigation: NavigationState);

    fn render_results(&mut self, results: &ResultsVm);

    /// The view is expected to hide the notice after `notice.dismiss_after`
    /// by reporting the id back through `QuizIntent::DismissError`.
    fn show_error(&mut self, notice: &ErrorNotice);

    fn hide_error(&mut self);

    fn reset_config_form(&mut self, form: &ConfigForm);
}
