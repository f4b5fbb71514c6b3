use dioxus::prelude::*;

use quiz_core::{Difficulty, QuizConfig};

use crate::vm::ConfigForm;

#[component]
pub fn ConfigSection(form: Signal<ConfigForm>, on_submit: EventHandler<ConfigForm>) -> Element {
    let mut form = form;
    let current = form.read().clone();
    let min = QuizConfig::MIN_QUESTIONS;
    let max = QuizConfig::MAX_QUESTIONS;

    rsx! {
        section { id: "quiz-config", class: "card",
            h2 { "Configure your quiz" }
            form {
                id: "config-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(form.peek().clone());
                },
                div { class: "form-group",
                    label { r#for: "api-key", "API key" }
                    input {
                        id: "api-key",
                        name: "api-key",
                        r#type: "password",
                        placeholder: "Enter your Gemini API key",
                        value: "{current.api_key}",
                        oninput: move |evt| {
                            form.write().api_key = evt.value();
                        },
                    }
                }
                div { class: "form-group",
                    label { r#for: "topic", "Topic" }
                    input {
                        id: "topic",
                        name: "topic",
                        r#type: "text",
                        value: "{current.topic}",
                        oninput: move |evt| {
                            form.write().topic = evt.value();
                        },
                    }
                }
                div { class: "form-group",
                    label { r#for: "num-questions", "Number of questions" }
                    input {
                        id: "num-questions",
                        name: "num-questions",
                        r#type: "number",
                        min: "{min}",
                        max: "{max}",
                        value: "{current.num_questions}",
                        oninput: move |evt| {
                            form.write().num_questions = evt.value();
                        },
                    }
                }
                div { class: "form-group",
                    label { r#for: "difficulty", "Difficulty" }
                    select {
                        id: "difficulty",
                        name: "difficulty",
                        value: "{current.difficulty}",
                        onchange: move |evt| {
                            if let Ok(difficulty) = evt.value().parse::<Difficulty>() {
                                form.write().difficulty = difficulty;
                            }
                        },
                        for difficulty in Difficulty::ALL {
                            option {
                                value: "{difficulty}",
                                selected: difficulty == current.difficulty,
                                "{difficulty.label()}"
                            }
                        }
                    }
                }
                button { class: "primary", r#type: "submit", "Generate quiz" }
            }
        }
    }
}
