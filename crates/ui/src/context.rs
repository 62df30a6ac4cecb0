use std::sync::Arc;

use client::CardService;

/// What the composition root must provide to the views.
pub trait UiApp: Send + Sync {
    fn card_service(&self) -> Arc<dyn CardService>;
}

#[derive(Clone)]
pub struct AppContext {
    card_service: Arc<dyn CardService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            card_service: app.card_service(),
        }
    }

    #[must_use]
    pub fn card_service(&self) -> Arc<dyn CardService> {
        Arc::clone(&self.card_service)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
