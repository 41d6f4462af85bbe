//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use checkup_core::CatalogError;
use checkup_core::model::QuestionId;

/// Errors emitted by the checkup controller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CheckupError {
    #[error("unknown question: {0}")]
    UnknownQuestion(QuestionId),
    #[error("no active question")]
    NoActiveQuestion,
    #[error("there is no next question")]
    NoNextQuestion,
    #[error("there is no previous question")]
    NoPreviousQuestion,
    #[error("question index {index} is out of range (0..{count})")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("checkup already completed")]
    AlreadyComplete,
}

/// Errors emitted while loading the question catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogLoadError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
