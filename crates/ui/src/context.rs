use std::sync::Arc;

use services::QuizApi;

pub trait UiApp: Send + Sync {
    fn quiz_api(&self) -> Arc<dyn QuizApi>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_api: Arc<dyn QuizApi>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_api: app.quiz_api(),
        }
    }

    #[must_use]
    pub fn quiz_api(&self) -> Arc<dyn QuizApi> {
        Arc::clone(&self.quiz_api)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
