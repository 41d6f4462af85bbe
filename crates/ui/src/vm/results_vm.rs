use checkup_core::model::{Answer, ResultType};
use checkup_core::selectors::{
    get_no_answers, get_not_sure_answers, get_responses, get_result_type, get_yes_answers,
};
use checkup_core::CheckupState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRowVm {
    pub question_id: String,
    pub question: String,
    pub answer: Answer,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicResultVm {
    pub id: String,
    pub name: String,
    pub answers: Vec<AnswerRowVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub result: ResultType,
    pub yes: usize,
    pub no: usize,
    pub not_sure: usize,
    pub topics: Vec<TopicResultVm>,
}

impl ResultsVm {
    #[must_use]
    pub fn headline(&self) -> &'static str {
        match self.result {
            ResultType::NeedHelp => "You could use some legal help",
            ResultType::AllGood => "Looks like you're all good",
        }
    }

    #[must_use]
    pub fn body(&self) -> &'static str {
        match self.result {
            ResultType::NeedHelp => {
                "Some of your answers suggest a legal problem. Community Law offers free legal advice."
            }
            ResultType::AllGood => {
                "Nothing in your answers points to a legal problem right now. Come back any time."
            }
        }
    }
}

#[must_use]
pub fn map_results(state: &CheckupState) -> ResultsVm {
    let topics = get_responses(state)
        .into_iter()
        .map(|group| TopicResultVm {
            id: group.id.to_string(),
            name: group.name.to_string(),
            answers: group
                .questions
                .iter()
                .map(|entry| AnswerRowVm {
                    question_id: entry.question.id.to_string(),
                    question: entry.question.text.to_string(),
                    answer: entry.answer,
                })
                .collect(),
        })
        .collect();

    ResultsVm {
        result: get_result_type(state),
        yes: get_yes_answers(state).len(),
        no: get_no_answers(state).len(),
        not_sure: get_not_sure_answers(state).len(),
        topics,
    }
}
