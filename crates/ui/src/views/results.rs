use dioxus::prelude::*;

use crate::vm::{ResultItemVm, ResultsVm};

#[component]
pub fn ResultsSection(
    results: ResultsVm,
    on_new_quiz: EventHandler<()>,
    on_retry: EventHandler<()>,
) -> Element {
    let message = results.message();

    rsx! {
        section { id: "results-container", class: "card",
            h2 { "Quiz results" }
            div { class: "score",
                div { id: "score-percentage", class: "score-percentage", "{results.percentage_label}" }
                p { id: "score-text", "{results.score_text}" }
                p { id: "score-message", class: "score-message", "{message}" }
            }
            div { id: "results-list",
                for item in results.items.iter() {
                    ResultRow { key: "{item.number}", item: item.clone() }
                }
            }
            div { class: "actions",
                button {
                    id: "new-quiz-btn",
                    class: "primary",
                    r#type: "button",
                    onclick: move |_| on_new_quiz.call(()),
                    "New quiz"
                }
                button {
                    id: "retry-quiz-btn",
                    r#type: "button",
                    onclick: move |_| on_retry.call(()),
                    "Retry quiz"
                }
            }
        }
    }
}

#[component]
fn ResultRow(item: ResultItemVm) -> Element {
    let status = item.status_class();
    rsx! {
        div { class: "result-item {status}",
            div { class: "result-question",
                strong { "Question {item.number}:" }
                " {item.question}"
            }
            div { class: "result-answers",
                div { class: "result-answer user",
                    strong { "Your answer:" }
                    " {item.user_answer}"
                }
                div { class: "result-answer {status}",
                    strong { "Correct answer:" }
                    " {item.correct_answer}"
                }
            }
            if !item.explanation.is_empty() {
                div { class: "result-explanation",
                    strong { "Explanation:" }
                    " {item.explanation}"
                }
            }
        }
    }
}
