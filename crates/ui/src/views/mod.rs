mod config;
mod quiz;
mod quiz_page;
mod results;
mod signal_view;
mod status;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use config::ConfigSection;
pub use quiz::QuizSection;
pub use quiz_page::{QuizControllerSignal, QuizPage, QuizScreen, use_quiz_controller};
pub use results::ResultsSection;
pub use signal_view::{SignalView, use_signal_view};
pub use status::{ErrorBanner, LoadingSection};
