use std::sync::Arc;

use checkup_core::Catalog;
use dioxus::prelude::*;
use services::CheckupController;

use crate::style::Format;

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Catalog;
    fn format(&self) -> Format;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    format: Format,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: Arc::new(app.catalog()),
            format: app.format(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// Layout format, resolved once at startup.
    #[must_use]
    pub fn format(&self) -> Format {
        self.format
    }

    #[must_use]
    pub fn new_controller(&self) -> CheckupController {
        CheckupController::new(self.catalog.as_ref().clone())
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Install the checkup controller for the subtree. Call once near the root.
pub fn use_checkup_provider() -> Signal<CheckupController> {
    let ctx = use_context::<AppContext>();
    use_context_provider(move || Signal::new(ctx.new_controller()))
}

/// The controller installed by [`use_checkup_provider`].
#[must_use]
pub fn use_checkup_controller() -> Signal<CheckupController> {
    use_context::<Signal<CheckupController>>()
}
