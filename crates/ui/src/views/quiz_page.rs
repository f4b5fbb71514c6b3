use dioxus::prelude::*;

use quiz_core::OptionKey;

use crate::context::AppContext;
use crate::views::config::ConfigSection;
use crate::views::quiz::QuizSection;
use crate::views::results::ResultsSection;
use crate::views::signal_view::{SignalView, use_signal_view};
use crate::views::status::{ErrorBanner, LoadingSection};
use crate::vm::{ActiveView, ConfigForm, QuizController, QuizIntent};

/// Shared handle to the page controller and its signal-backed view.
pub type QuizControllerSignal = Signal<QuizController<SignalView>>;

/// Creates the page controller over a fresh set of view signals.
pub fn use_quiz_controller() -> QuizControllerSignal {
    let ctx = use_context::<AppContext>();
    let view = use_signal_view();
    use_signal(move || QuizController::new(ctx.quiz_api(), view))
}

/// The single quiz page.
#[component]
pub fn QuizPage() -> Element {
    let controller = use_quiz_controller();
    rsx! { QuizScreen { controller } }
}

/// Renders exactly one section, chosen by the controller's active view.
#[component]
pub fn QuizScreen(controller: QuizControllerSignal) -> Element {
    let mut controller = controller;
    let view = *controller.peek().view();

    let active = *view.active.read();
    let banner = match active {
        ActiveView::Config => view.error.read().clone().map(|notice| (notice.id, notice)),
        _ => None,
    };

    let section = match active {
        ActiveView::Config => rsx! {
            ConfigSection {
                form: view.form,
                on_submit: move |form: ConfigForm| start_generation(controller, form),
            }
        },
        ActiveView::Loading => rsx! { LoadingSection {} },
        ActiveView::Quiz => {
            let header = view.header.read().clone();
            let question = view.question.read().clone();
            let navigation = *view.navigation.read();
            match (header, question) {
                (Some(header), Some(question)) => {
                    let index = question.index;
                    rsx! {
                        QuizSection {
                            header,
                            question,
                            navigation,
                            on_select: move |key: OptionKey| {
                                controller.write().handle(QuizIntent::SelectAnswer { index, key });
                            },
                            on_previous: move |_| controller.write().handle(QuizIntent::Previous),
                            on_next: move |_| controller.write().handle(QuizIntent::Next),
                            on_submit: move |_| start_submission(controller),
                        }
                    }
                }
                _ => rsx! {},
            }
        }
        ActiveView::Results => match view.results.read().clone() {
            Some(results) => rsx! {
                ResultsSection {
                    results,
                    on_new_quiz: move |_| controller.write().handle(QuizIntent::NewQuiz),
                    on_retry: move |_| controller.write().handle(QuizIntent::Retry),
                }
            },
            None => rsx! {},
        },
    };

    rsx! {
        div { class: "container",
            header { class: "page-header",
                h1 { "AI Quiz Generator" }
                p { "Generate a multiple-choice quiz on any topic and test yourself." }
            }
            if let Some((id, notice)) = banner {
                ErrorBanner {
                    key: "{id}",
                    notice,
                    on_dismiss: move |id: u64| controller.write().handle(QuizIntent::DismissError(id)),
                }
            }
            {section}
        }
    }
}

pub(crate) fn start_generation(mut controller: QuizControllerSignal, form: ConfigForm) {
    let request = controller.write().begin_generate(&form);
    let Some(request) = request else {
        return;
    };
    let api = controller.peek().api();
    spawn(async move {
        let result = api.generate_quiz(&request).await;
        controller.write().finish_generate(result);
    });
}

pub(crate) fn start_submission(mut controller: QuizControllerSignal) {
    let request = controller.write().begin_submit();
    let Some(request) = request else {
        return;
    };
    let api = controller.peek().api();
    spawn(async move {
        let result = api.submit_quiz(&request).await;
        controller.write().finish_submit(result);
    });
}
