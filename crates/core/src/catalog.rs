//! The static question catalog.
//!
//! Loaded once at startup and never mutated afterwards. Topic order and the
//! question order inside each topic define the global question order.

use std::collections::HashSet;

use thiserror::Error;

use crate::model::{QuestionId, Topic, TopicId};

const BUNDLED_CATALOG: &str = include_str!("../data/checkup.json");

/// Errors raised while building a catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("duplicate topic id: {0}")]
    DuplicateTopic(TopicId),
    #[error("duplicate question id: {0}")]
    DuplicateQuestion(QuestionId),
    #[error("topic {0} has an empty name")]
    EmptyTopicName(TopicId),
    #[error("question {0} has empty text")]
    EmptyQuestionText(QuestionId),
    #[error("catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validated, ordered collection of topics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    topics: Vec<Topic>,
}

impl Catalog {
    /// Build a catalog from ordered topics.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if a topic or question id repeats, or a name or
    /// question text is blank.
    pub fn new(topics: Vec<Topic>) -> Result<Self, CatalogError> {
        let mut topic_ids = HashSet::new();
        let mut question_ids = HashSet::new();

        for topic in &topics {
            if !topic_ids.insert(&topic.id) {
                return Err(CatalogError::DuplicateTopic(topic.id.clone()));
            }
            if topic.name.trim().is_empty() {
                return Err(CatalogError::EmptyTopicName(topic.id.clone()));
            }
            for question in &topic.questions {
                if !question_ids.insert(&question.id) {
                    return Err(CatalogError::DuplicateQuestion(question.id.clone()));
                }
                if question.text.trim().is_empty() {
                    return Err(CatalogError::EmptyQuestionText(question.id.clone()));
                }
            }
        }

        Ok(Self { topics })
    }

    /// Parse a JSON array of topics and validate it.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` for malformed input, or any validation error
    /// from [`Catalog::new`].
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let topics: Vec<Topic> = serde_json::from_str(text)?;
        Self::new(topics)
    }

    /// The catalog shipped with the application.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` only if the embedded data is corrupt.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    #[must_use]
    pub fn into_topics(self) -> Vec<Topic> {
        self.topics
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.topics.iter().map(|topic| topic.questions.len()).sum()
    }
}
