use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::Error;
use crate::model::{Response, Topic};

/// Root of the application state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub checkup: CheckupState,
}

impl AppState {
    /// Parse an application state snapshot.
    ///
    /// # Errors
    ///
    /// Returns `Error::State` if the JSON does not match the expected shape.
    pub fn from_json(text: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Normalized checkup slice: the catalog topics, the answers given so far and
/// a pointer to the question on screen.
///
/// `active_question_index` is kept signed and optional so that snapshots with
/// a missing, negative or stale index load unchanged; selectors treat any such
/// value as "no active question".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckupState {
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub responses: Vec<Response>,
    #[serde(default)]
    pub active_question_index: Option<i64>,
}

impl CheckupState {
    /// Fresh state for a catalog: nothing answered, first question active.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            topics: catalog.into_topics(),
            responses: Vec::new(),
            active_question_index: Some(0),
        }
    }
}
