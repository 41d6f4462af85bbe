use serde::{Deserialize, Serialize};

use crate::model::ids::{QuestionId, TopicId};

/// A single yes / no / not-sure prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
}

impl Question {
    #[must_use]
    pub fn new(id: QuestionId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// A named group of related questions. Question order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub name: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Topic {
    #[must_use]
    pub fn new(id: TopicId, name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id,
            name: name.into(),
            questions,
        }
    }
}
