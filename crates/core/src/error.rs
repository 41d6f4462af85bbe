use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{AnswerError, ParseIdError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Id(#[from] ParseIdError),
    #[error("invalid checkup state: {0}")]
    State(#[from] serde_json::Error),
}
