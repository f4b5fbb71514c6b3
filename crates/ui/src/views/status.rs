use dioxus::prelude::*;

use crate::vm::ErrorNotice;

#[component]
pub fn LoadingSection() -> Element {
    rsx! {
        section { id: "loading", class: "card loading",
            div { class: "spinner" }
            p { "Working on it, this can take a few seconds..." }
        }
    }
}

/// Shows `notice` and reports its id through `on_dismiss` once its delay has
/// elapsed. Keyed by notice id, so each notice gets its own timer.
#[component]
pub fn ErrorBanner(notice: ErrorNotice, on_dismiss: EventHandler<u64>) -> Element {
    let id = notice.id;
    let delay = notice.dismiss_after;
    use_hook(move || {
        spawn(async move {
            tokio::time::sleep(delay).await;
            on_dismiss.call(id);
        })
    });

    rsx! {
        div { id: "error-message", class: "error-message",
            p { id: "error-text", "{notice.message}" }
        }
    }
}
