#![forbid(unsafe_code)]

pub mod catalog_source;
pub mod checkup;
pub mod error;

pub use catalog_source::load_catalog;
pub use error::{CatalogLoadError, CheckupError};

pub use checkup::{
    CheckupCommand, CheckupController, CheckupEvent, CheckupProgress, CompletionPhase,
    DispatchOutcome, Navigator, RecordingNavigator,
};
