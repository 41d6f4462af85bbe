use checkup_core::model::Answer;
use checkup_core::selectors::{
    check_next_question_enabled, check_previous_question_enabled, get_active_answer,
    get_active_question,
};
use services::{CheckupCommand, CheckupController};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckupIntent {
    Answer(Answer),
    Next,
    Previous,
    Finish,
}

impl CheckupIntent {
    #[must_use]
    pub fn into_command(self) -> CheckupCommand {
        match self {
            CheckupIntent::Answer(answer) => CheckupCommand::AnswerActive(answer),
            CheckupIntent::Next => CheckupCommand::Next,
            CheckupIntent::Previous => CheckupCommand::Previous,
            CheckupIntent::Finish => CheckupCommand::Complete,
        }
    }
}

/// What the question screen needs, detached from the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub topic_name: String,
    pub text: String,
    /// 1-based position for display.
    pub number: usize,
    pub selected: Option<Answer>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckupVm {
    pub question: Option<QuestionVm>,
    pub total: usize,
    pub answered: usize,
    pub percent: u8,
    pub can_previous: bool,
    pub can_next: bool,
    pub is_complete: bool,
}

impl CheckupVm {
    #[must_use]
    pub fn progress_label(&self) -> String {
        match &self.question {
            Some(question) => format!("Question {} of {}", question.number, self.total),
            None => format!("{} of {} answered", self.answered, self.total),
        }
    }
}

#[must_use]
pub fn map_checkup(controller: &CheckupController) -> CheckupVm {
    let state = controller.state();
    let progress = controller.progress();
    let question = get_active_question(state).map(|question| QuestionVm {
        topic_name: question.topic.to_string(),
        text: question.text.to_string(),
        number: question.index + 1,
        selected: get_active_answer(state),
    });

    CheckupVm {
        question,
        total: progress.total,
        answered: progress.answered,
        percent: progress.percent(),
        can_previous: check_previous_question_enabled(state),
        can_next: check_next_question_enabled(state),
        is_complete: progress.is_complete,
    }
}
