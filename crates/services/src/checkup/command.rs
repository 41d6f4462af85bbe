use checkup_core::model::{Answer, QuestionId};

/// Every state change goes through one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckupCommand {
    /// Record or replace the answer to a specific question.
    Answer {
        question_id: QuestionId,
        answer: Answer,
    },
    /// Answer the question on screen and move on.
    AnswerActive(Answer),
    Next,
    Previous,
    GoTo(usize),
    /// Finish the checkup explicitly.
    Complete,
    /// Start over with no answers.
    Reset,
}

/// Signals raised while applying a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckupEvent {
    CheckupComplete,
}
