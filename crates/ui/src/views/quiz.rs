use dioxus::prelude::*;

use quiz_core::OptionKey;

use crate::vm::{NavigationState, QuestionVm, QuizHeaderVm};

#[component]
pub fn QuizSection(
    header: QuizHeaderVm,
    question: QuestionVm,
    navigation: NavigationState,
    on_select: EventHandler<OptionKey>,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
    on_submit: EventHandler<()>,
) -> Element {
    let counter = question.counter_label();
    let badge_class = header.badge_class();
    let difficulty = header.difficulty.label();
    let number = question.number();
    let group = format!("question-{}", question.index);
    let submit_class = if navigation.submit_visible {
        "primary"
    } else {
        "primary hidden"
    };

    rsx! {
        section { id: "quiz-container", class: "card",
            div { class: "quiz-header",
                span { id: "quiz-topic", class: "quiz-topic", "{header.topic}" }
                span { id: "difficulty-badge", class: "{badge_class}", "{difficulty}" }
                span { id: "question-counter", class: "question-counter", "{counter}" }
            }
            form {
                id: "quiz-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },
                div { id: "questions-container",
                    div { class: "question",
                        h3 { "{number}. {question.text}" }
                        div { class: "options",
                            for option in question.options.iter() {
                                OptionRow {
                                    key: "{option.key}",
                                    group: group.clone(),
                                    option_key: option.key.clone(),
                                    text: option.text.clone(),
                                    selected: option.selected,
                                    on_select,
                                }
                            }
                        }
                    }
                }
                div { class: "navigation",
                    button {
                        id: "prev-btn",
                        r#type: "button",
                        disabled: navigation.previous_disabled,
                        onclick: move |_| on_previous.call(()),
                        "Previous"
                    }
                    button {
                        id: "next-btn",
                        r#type: "button",
                        disabled: navigation.next_disabled,
                        onclick: move |_| on_next.call(()),
                        "Next"
                    }
                    button { id: "submit-btn", class: "{submit_class}", r#type: "submit", "Submit quiz" }
                }
            }
        }
    }
}

#[component]
fn OptionRow(
    group: String,
    option_key: OptionKey,
    text: String,
    selected: bool,
    on_select: EventHandler<OptionKey>,
) -> Element {
    let class = if selected { "option selected" } else { "option" };
    let label = option_key.to_string();
    rsx! {
        label {
            class: "{class}",
            onclick: move |_| on_select.call(option_key.clone()),
            input {
                r#type: "radio",
                name: "{group}",
                value: "{label}",
                checked: selected,
            }
            span {
                strong { "{label}." }
                " {text}"
            }
        }
    }
}
