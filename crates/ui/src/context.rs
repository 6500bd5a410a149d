use std::sync::{Arc, Mutex};

use quiz_core::model::{PresenterSettings, QuestionSet};

use crate::platform::PlatformRef;

/// What the composition root (the `app` binary, or a test harness) provides
/// to the views.
pub trait UiApp: Send + Sync {
    fn platform(&self) -> PlatformRef;
    fn initial_settings(&self) -> PresenterSettings;
    /// A question set preloaded from the command line, if any.
    fn preloaded_set(&self) -> Option<QuestionSet>;
}

#[derive(Clone)]
pub struct AppContext {
    platform: PlatformRef,
    initial_settings: PresenterSettings,
    // Consumed by the first presenter view that mounts; a later remount
    // starts unloaded like everyone else.
    preloaded_once: Arc<Mutex<Option<QuestionSet>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            platform: app.platform(),
            initial_settings: app.initial_settings(),
            preloaded_once: Arc::new(Mutex::new(app.preloaded_set())),
        }
    }

    #[must_use]
    pub fn platform(&self) -> PlatformRef {
        Arc::clone(&self.platform)
    }

    #[must_use]
    pub fn initial_settings(&self) -> PresenterSettings {
        self.initial_settings
    }

    #[must_use]
    pub fn take_preloaded_set(&self) -> Option<QuestionSet> {
        self.preloaded_once
            .lock()
            .ok()
            .and_then(|mut guard| guard.take())
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
