use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur while reading answers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("invalid answer value: {0}")]
    InvalidAnswer(String),
}

//
// ─── ANSWER ───────────────────────────────────────────────────────────────────
//

/// Three-way answer a user can give to a checkup question.
///
/// Serialized as `YES`, `NO` and `NOT_SURE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Answer {
    /// The situation described by the question applies to the user.
    Yes,
    /// The situation does not apply.
    No,
    NotSure,
}

impl Answer {
    /// All answers in the order they are offered to the user.
    pub const ALL: [Answer; 3] = [Answer::Yes, Answer::No, Answer::NotSure];

    /// Wire name of the answer.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Answer::Yes => "YES",
            Answer::No => "NO",
            Answer::NotSure => "NOT_SURE",
        }
    }

    /// Label shown on the answer button.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
            Answer::NotSure => "Not sure",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Answer {
    type Err = AnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "YES" => Ok(Self::Yes),
            "NO" => Ok(Self::No),
            "NOT_SURE" => Ok(Self::NotSure),
            other => Err(AnswerError::InvalidAnswer(other.to_string())),
        }
    }
}

//
// ─── RESPONSE ─────────────────────────────────────────────────────────────────
//

/// Recorded answer to a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub question_id: QuestionId,
    pub answer: Answer,
}

impl Response {
    #[must_use]
    pub fn new(question_id: QuestionId, answer: Answer) -> Self {
        Self {
            question_id,
            answer,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
