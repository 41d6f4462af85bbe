use std::cell::RefCell;

use checkup_core::constants::RESULTS_PATH;
use tracing::info;

use super::command::CheckupEvent;

/// Route-change collaborator. Requests are fire-and-forget.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Navigator that only remembers what it was asked to do.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    requests: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.requests.borrow_mut().push(path.to_string());
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletionPhase {
    #[default]
    InProgress,
    Complete,
}

/// Turns the first `CheckupComplete` event into a single navigation request
/// to [`RESULTS_PATH`].
#[derive(Debug, Clone, Default)]
pub struct CompletionTrigger {
    phase: CompletionPhase,
}

impl CompletionTrigger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> CompletionPhase {
        self.phase
    }

    /// Returns the path navigated to, if this event caused navigation.
    pub fn handle(&mut self, event: CheckupEvent, navigator: &dyn Navigator) -> Option<&'static str> {
        match (event, self.phase) {
            (CheckupEvent::CheckupComplete, CompletionPhase::InProgress) => {
                self.phase = CompletionPhase::Complete;
                info!(path = RESULTS_PATH, "checkup complete, navigating to results");
                navigator.navigate(RESULTS_PATH);
                Some(RESULTS_PATH)
            }
            (CheckupEvent::CheckupComplete, CompletionPhase::Complete) => None,
        }
    }

    pub fn reset(&mut self) {
        self.phase = CompletionPhase::InProgress;
    }
}
