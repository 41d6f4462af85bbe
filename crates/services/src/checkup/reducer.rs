use checkup_core::CheckupState;
use checkup_core::model::{Answer, QuestionId, Response};
use checkup_core::selectors::{
    check_next_question_enabled, check_previous_question_enabled, get_active_question,
    get_question_count, get_question_list,
};

use super::command::{CheckupCommand, CheckupEvent};
use crate::error::CheckupError;

/// Apply a single command to the checkup state.
///
/// On error the state is left untouched.
///
/// # Errors
///
/// Returns `CheckupError` when the command does not fit the current state.
pub fn reduce(
    state: &mut CheckupState,
    command: &CheckupCommand,
) -> Result<Option<CheckupEvent>, CheckupError> {
    match command {
        CheckupCommand::Answer {
            question_id,
            answer,
        } => {
            if !get_question_list(state).iter().any(|q| q.id == question_id) {
                return Err(CheckupError::UnknownQuestion(question_id.clone()));
            }
            record(state, question_id.clone(), *answer);
            Ok(None)
        }
        CheckupCommand::AnswerActive(answer) => answer_active(state, *answer),
        CheckupCommand::Next => {
            if !check_next_question_enabled(state) {
                return Err(CheckupError::NoNextQuestion);
            }
            shift_active(state, 1);
            Ok(None)
        }
        CheckupCommand::Previous => {
            if !check_previous_question_enabled(state) {
                return Err(CheckupError::NoPreviousQuestion);
            }
            let count = i64::try_from(get_question_count(state)).unwrap_or(i64::MAX);
            let current = state.active_question_index.unwrap_or(0);
            // A stale index past the end lands on the last question.
            state.active_question_index = Some((current - 1).min(count - 1).max(0));
            Ok(None)
        }
        CheckupCommand::GoTo(index) => {
            let count = get_question_count(state);
            if *index >= count {
                return Err(CheckupError::IndexOutOfRange {
                    index: *index,
                    count,
                });
            }
            state.active_question_index = i64::try_from(*index).ok();
            Ok(None)
        }
        CheckupCommand::Complete => Ok(Some(CheckupEvent::CheckupComplete)),
        CheckupCommand::Reset => {
            state.responses.clear();
            state.active_question_index = Some(0);
            Ok(None)
        }
    }
}

fn record(state: &mut CheckupState, question_id: QuestionId, answer: Answer) {
    match state
        .responses
        .iter_mut()
        .find(|response| response.question_id == question_id)
    {
        Some(existing) => existing.answer = answer,
        None => state.responses.push(Response::new(question_id, answer)),
    }
}

fn shift_active(state: &mut CheckupState, delta: i64) {
    state.active_question_index = state.active_question_index.map(|index| index + delta);
}

fn answer_active(
    state: &mut CheckupState,
    answer: Answer,
) -> Result<Option<CheckupEvent>, CheckupError> {
    let question_id = get_active_question(state)
        .map(|question| question.id.clone())
        .ok_or(CheckupError::NoActiveQuestion)?;
    record(state, question_id, answer);

    let Some(skipped) = first_unanswered(state) else {
        return Ok(Some(CheckupEvent::CheckupComplete));
    };

    if check_next_question_enabled(state) {
        shift_active(state, 1);
    } else {
        // End of the list: send the user back to what they skipped.
        state.active_question_index = i64::try_from(skipped).ok();
    }
    Ok(None)
}

fn first_unanswered(state: &CheckupState) -> Option<usize> {
    get_question_list(state)
        .iter()
        .find(|question| {
            !state
                .responses
                .iter()
                .any(|response| &response.question_id == question.id)
        })
        .map(|question| question.index)
}
