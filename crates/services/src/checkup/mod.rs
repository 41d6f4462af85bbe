mod command;
mod completion;
mod controller;
mod progress;
mod reducer;

// Public API of the checkup subsystem.
pub use crate::error::CheckupError;
pub use command::{CheckupCommand, CheckupEvent};
pub use completion::{CompletionPhase, CompletionTrigger, Navigator, RecordingNavigator};
pub use controller::{CheckupController, DispatchOutcome};
pub use progress::CheckupProgress;
pub use reducer::reduce;
