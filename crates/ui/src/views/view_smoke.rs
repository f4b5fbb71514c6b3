use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use dioxus::prelude::*;
use quiz_core::{AnswerSet, GradeReport, OptionKey, QuestionResult};

use super::quiz_page::start_generation;
use super::test_harness::{drive_dom, render_component, sample_quiz, setup_page_harness};
use crate::views::{ErrorBanner, QuizSection, ResultsSection};
use crate::vm::{
    ConfigForm, ERROR_DISMISS_AFTER, ErrorNotice, NavigationState, QuestionVm, QuizHeaderVm,
    ResultsVm,
};

#[derive(Props, Clone, PartialEq)]
struct QuizHarnessProps {
    header: QuizHeaderVm,
    question: QuestionVm,
    navigation: NavigationState,
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    rsx! {
        QuizSection {
            header: props.header,
            question: props.question,
            navigation: props.navigation,
            on_select: move |_| {},
            on_previous: move |_| {},
            on_next: move |_| {},
            on_submit: move |_| {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ResultsHarnessProps {
    results: ResultsVm,
}

#[component]
fn ResultsHarness(props: ResultsHarnessProps) -> Element {
    rsx! {
        ResultsSection {
            results: props.results,
            on_new_quiz: move |_| {},
            on_retry: move |_| {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct BannerHarnessProps {
    notice: ErrorNotice,
}

#[component]
fn BannerHarness(props: BannerHarnessProps) -> Element {
    rsx! {
        ErrorBanner { notice: props.notice, on_dismiss: move |_| {} }
    }
}

#[derive(Props, Clone)]
struct TimedBannerProps {
    notice: ErrorNotice,
    dismissed: Arc<Mutex<Vec<u64>>>,
}

impl PartialEq for TimedBannerProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn TimedBanner(props: TimedBannerProps) -> Element {
    let dismissed = Arc::clone(&props.dismissed);
    rsx! {
        ErrorBanner {
            notice: props.notice,
            on_dismiss: move |id: u64| dismissed.lock().unwrap().push(id),
        }
    }
}

fn filled_form() -> ConfigForm {
    ConfigForm {
        api_key: "test-key".into(),
        topic: "Cats".into(),
        num_questions: "3".into(),
        ..ConfigForm::default()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_page_starts_on_config_form() {
    let mut harness = setup_page_harness();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("config-form"), "missing form in {html}");
    assert!(html.contains("Machine Learning"), "missing default topic in {html}");
    assert!(!html.contains("quiz-container"), "quiz shown too early in {html}");
    assert!(!html.contains("results-container"), "results shown too early in {html}");
    assert_eq!(harness.api.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_section_renders_counter_selection_and_controls() {
    let quiz = sample_quiz(3);
    let mut answers = AnswerSet::new();
    answers.record(&quiz, 1, OptionKey::from("C")).unwrap();
    let question = QuestionVm::build(&quiz, 1, &answers).unwrap();

    let html = render_component(
        QuizHarness,
        QuizHarnessProps {
            header: QuizHeaderVm::from_quiz(&quiz),
            question,
            navigation: NavigationState::compute(1, 3, true),
        },
    );

    assert!(html.contains("Question 2 of 3"), "missing counter in {html}");
    assert!(html.contains("difficulty-badge easy"), "missing badge in {html}");
    assert!(html.contains("2. Sample question 2"), "missing text in {html}");
    assert!(html.contains("option selected"), "missing selection in {html}");
    assert!(html.contains("primary hidden"), "submit should be hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_section_renders_score_and_breakdown() {
    let report = GradeReport {
        score: 1,
        total: 2,
        percentage: 50.0,
        results: vec![
            QuestionResult {
                question: "Sample question 1".into(),
                user_answer: "A".into(),
                correct_answer: "A".into(),
                is_correct: true,
                explanation: "Because A.".into(),
            },
            QuestionResult {
                question: "Sample question 2".into(),
                user_answer: "B".into(),
                correct_answer: "D".into(),
                is_correct: false,
                explanation: String::new(),
            },
        ],
    };

    let html = render_component(
        ResultsHarness,
        ResultsHarnessProps {
            results: ResultsVm::from_report(&report),
        },
    );

    assert!(html.contains("50%"), "missing percentage in {html}");
    assert!(html.contains("You scored 1 out of 2"), "missing score in {html}");
    assert!(
        html.contains("Keep learning! Practice makes perfect!"),
        "missing tier message in {html}"
    );
    assert!(html.contains("result-item correct"), "missing correct row in {html}");
    assert!(html.contains("result-item incorrect"), "missing incorrect row in {html}");
    assert!(html.contains("Because A."), "missing explanation in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn error_banner_renders_message() {
    let html = render_component(
        BannerHarness,
        BannerHarnessProps {
            notice: ErrorNotice {
                id: 1,
                message: "Please enter a quiz topic".into(),
                dismiss_after: Duration::from_secs(5),
            },
        },
    );

    assert!(html.contains("error-message"), "missing banner in {html}");
    assert!(html.contains("Please enter a quiz topic"), "missing text in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn error_banner_dismisses_itself_after_the_delay() {
    let dismissed = Arc::new(Mutex::new(Vec::new()));
    let mut dom = VirtualDom::new_with_props(
        TimedBanner,
        TimedBannerProps {
            notice: ErrorNotice {
                id: 7,
                message: "Please enter a quiz topic".into(),
                dismiss_after: ERROR_DISMISS_AFTER,
            },
            dismissed: Arc::clone(&dismissed),
        },
    );
    dom.rebuild_in_place();
    drive_dom(&mut dom);

    tokio::time::advance(Duration::from_millis(4_900)).await;
    drive_dom(&mut dom);
    assert!(dismissed.lock().unwrap().is_empty(), "dismissed too early");

    tokio::time::advance(Duration::from_millis(200)).await;
    drive_dom(&mut dom);
    assert_eq!(*dismissed.lock().unwrap(), vec![7]);
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn validation_error_disappears_from_the_page() {
    let mut harness = setup_page_harness();
    harness.rebuild();

    let form = ConfigForm {
        topic: "   ".into(),
        ..filled_form()
    };
    harness.with_controller(|controller| start_generation(controller, form));
    harness.settle();

    let html = harness.render();
    assert!(html.contains("Please enter a quiz topic"), "missing error in {html}");
    assert!(html.contains("config-form"), "form should stay visible in {html}");
    assert_eq!(harness.api.calls.load(Ordering::SeqCst), 0);

    tokio::time::advance(ERROR_DISMISS_AFTER + Duration::from_millis(100)).await;
    harness.settle();
    let html = harness.render();
    assert!(!html.contains("error-message"), "error still shown in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn failed_generation_returns_to_form_with_timed_error() {
    let mut harness = setup_page_harness();
    harness.rebuild();

    harness.with_controller(|controller| start_generation(controller, filled_form()));
    harness.settle();

    assert_eq!(harness.api.calls.load(Ordering::SeqCst), 1);
    let html = harness.render();
    assert!(
        html.contains("Failed to generate quiz: response is missing"),
        "missing failure in {html}"
    );
    assert!(html.contains("config-form"), "form should be back in {html}");
    assert!(!html.contains("spinner"), "still loading in {html}");

    tokio::time::advance(Duration::from_millis(4_900)).await;
    harness.settle();
    assert!(harness.render().contains("error-message"), "dismissed too early");

    tokio::time::advance(Duration::from_millis(200)).await;
    harness.settle();
    let html = harness.render();
    assert!(!html.contains("error-message"), "error still shown in {html}");
}
