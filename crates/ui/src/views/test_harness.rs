use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::{Difficulty, GradeReport, OptionKey, Question, Quiz};
use services::{GenerateQuizRequest, QuizApi, QuizApiError, SubmitQuizRequest};

use crate::context::{UiApp, build_app_context};
use crate::views::{QuizControllerSignal, QuizScreen, use_quiz_controller};

/// Backend that always fails and counts how often it was asked.
#[derive(Default)]
pub struct OfflineQuizApi {
    pub calls: AtomicUsize,
}

#[async_trait]
impl QuizApi for OfflineQuizApi {
    async fn generate_quiz(&self, _request: &GenerateQuizRequest) -> Result<Quiz, QuizApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(QuizApiError::MissingField("questions"))
    }

    async fn submit_quiz(&self, _request: &SubmitQuizRequest) -> Result<GradeReport, QuizApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(QuizApiError::MissingField("results"))
    }
}

struct TestApp {
    api: Arc<OfflineQuizApi>,
}

impl UiApp for TestApp {
    fn quiz_api(&self) -> Arc<dyn QuizApi> {
        self.api.clone()
    }
}

type ControllerSlot = Rc<Cell<Option<QuizControllerSignal>>>;

#[derive(Props, Clone)]
struct PageHarnessProps {
    app: Arc<TestApp>,
    slot: ControllerSlot,
}

impl PartialEq for PageHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn PageHarness(props: PageHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { PageBody { slot: props.slot.clone() } }
}

#[derive(Props, Clone)]
struct PageBodyProps {
    slot: ControllerSlot,
}

impl PartialEq for PageBodyProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Same wiring as `QuizPage`, with the controller handed back to the test.
#[component]
fn PageBody(props: PageBodyProps) -> Element {
    let controller = use_quiz_controller();
    props.slot.set(Some(controller));
    rsx! { QuizScreen { controller } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub api: Arc<OfflineQuizApi>,
    slot: ControllerSlot,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Poll tasks and re-render until spawned work has been applied.
    pub fn settle(&mut self) {
        for _ in 0..4 {
            drive_dom(&mut self.dom);
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Run `f` against the page controller inside the dom's runtime.
    pub fn with_controller<T>(&self, f: impl FnOnce(QuizControllerSignal) -> T) -> T {
        let controller = self.slot.get().expect("page rendered");
        self.dom.in_scope(ScopeId::ROOT, || f(controller))
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_page_harness() -> ViewHarness {
    let api = Arc::new(OfflineQuizApi::default());
    let slot = ControllerSlot::default();
    let dom = VirtualDom::new_with_props(
        PageHarness,
        PageHarnessProps {
            app: Arc::new(TestApp {
                api: Arc::clone(&api),
            }),
            slot: Rc::clone(&slot),
        },
    );
    ViewHarness { dom, api, slot }
}

/// Render a component with props in a fresh dom and return the HTML.
pub fn render_component<P: Clone + 'static>(component: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(component, props);
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}

pub fn sample_quiz(len: usize) -> Quiz {
    let questions = (1..=len)
        .map(|n| {
            let options: BTreeMap<OptionKey, String> = ["A", "B", "C", "D"]
                .into_iter()
                .map(|k| (OptionKey::from(k), format!("Answer {n}{k}")))
                .collect();
            Question::new(format!("Sample question {n}"), options)
        })
        .collect();
    Quiz::new("Cats", Difficulty::Easy, questions).expect("non-empty quiz")
}
