use checkup_core::selectors::{get_question_count, get_response_list};
use checkup_core::{AppState, Catalog, CheckupState};
use tracing::{debug, warn};

use super::command::{CheckupCommand, CheckupEvent};
use super::completion::{CompletionPhase, CompletionTrigger, Navigator};
use super::progress::CheckupProgress;
use super::reducer::reduce;
use crate::error::CheckupError;

/// What a single dispatch produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub event: Option<CheckupEvent>,
    pub navigated_to: Option<&'static str>,
}

/// Owns the application state and applies commands one at a time.
///
/// Selectors read through [`CheckupController::state`]; the only way to change
/// anything is [`CheckupController::dispatch`].
#[derive(Debug, Clone)]
pub struct CheckupController {
    state: AppState,
    completion: CompletionTrigger,
}

impl CheckupController {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::from_state(AppState {
            checkup: CheckupState::new(catalog),
        })
    }

    /// Resume from an existing snapshot.
    #[must_use]
    pub fn from_state(state: AppState) -> Self {
        Self {
            state,
            completion: CompletionTrigger::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &CheckupState {
        &self.state.checkup
    }

    #[must_use]
    pub fn app_state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> CompletionPhase {
        self.completion.phase()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase() == CompletionPhase::Complete
    }

    #[must_use]
    pub fn progress(&self) -> CheckupProgress {
        let total = get_question_count(self.state());
        let answered = get_response_list(self.state()).len();
        CheckupProgress {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            is_complete: self.is_complete(),
        }
    }

    /// Apply one command and route any resulting event.
    ///
    /// # Errors
    ///
    /// Returns `CheckupError::AlreadyComplete` for anything but `Reset` once the
    /// checkup is complete, or the reducer's error for invalid commands.
    pub fn dispatch(
        &mut self,
        command: CheckupCommand,
        navigator: &dyn Navigator,
    ) -> Result<DispatchOutcome, CheckupError> {
        debug!(?command, "dispatching checkup command");

        if self.is_complete() && command != CheckupCommand::Reset {
            warn!(?command, "command rejected: checkup already complete");
            return Err(CheckupError::AlreadyComplete);
        }

        let event = reduce(&mut self.state.checkup, &command).inspect_err(|err| {
            warn!(?command, %err, "command rejected");
        })?;

        if command == CheckupCommand::Reset {
            self.completion.reset();
        }

        let navigated_to = event.and_then(|event| self.completion.handle(event, navigator));

        Ok(DispatchOutcome {
            event,
            navigated_to,
        })
    }
}
