mod quiz_view;
mod quiz_vm;
mod view_models;

pub use quiz_view::QuizView;
pub use quiz_vm::{ERROR_DISMISS_AFTER, QuizController, QuizIntent};
pub use view_models::{
    ActiveView, ConfigForm, ErrorNotice, NavigationState, OptionVm, QuestionVm, QuizHeaderVm,
    ResultItemVm, ResultsVm,
};
