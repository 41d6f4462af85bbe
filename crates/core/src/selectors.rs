//! Read-only projections over [`CheckupState`].
//!
//! Every selector is a plain function of the state. Nothing is cached: the
//! catalog is small, so the flattened question list is rebuilt on each call.
//! Missing or out-of-range data yields `None` or an empty `Vec`, never a panic.

use std::collections::HashMap;
use std::ops::Range;

use crate::model::{Answer, QuestionId, ResultType, Topic, TopicId};
use crate::state::CheckupState;

//
// ─── VIEWS ────────────────────────────────────────────────────────────────────
//

/// A catalog question annotated with its global position and owning topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionEntry<'a> {
    pub index: usize,
    pub id: &'a QuestionId,
    pub text: &'a str,
    pub topic: &'a str,
    pub topic_id: &'a TopicId,
}

/// An answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseEntry<'a> {
    pub question: QuestionEntry<'a>,
    pub answer: Answer,
}

/// Answered questions of one topic, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicResponses<'a> {
    pub id: &'a TopicId,
    pub name: &'a str,
    pub questions: Vec<ResponseEntry<'a>>,
}

//
// ─── CATALOG ──────────────────────────────────────────────────────────────────
//

#[must_use]
pub fn get_topics(state: &CheckupState) -> &[Topic] {
    &state.topics
}

fn questions(state: &CheckupState) -> impl Iterator<Item = QuestionEntry<'_>> {
    state
        .topics
        .iter()
        .flat_map(|topic| {
            topic.questions.iter().map(move |question| (topic, question))
        })
        .enumerate()
        .map(|(index, (topic, question))| QuestionEntry {
            index,
            id: &question.id,
            text: &question.text,
            topic: &topic.name,
            topic_id: &topic.id,
        })
}

/// All questions in topic order, then question order within each topic.
#[must_use]
pub fn get_question_list(state: &CheckupState) -> Vec<QuestionEntry<'_>> {
    questions(state).collect()
}

#[must_use]
pub fn get_question_count(state: &CheckupState) -> usize {
    state.topics.iter().map(|topic| topic.questions.len()).sum()
}

/// Zero-based indices of every question.
#[must_use]
pub fn get_question_indices(state: &CheckupState) -> Range<usize> {
    0..get_question_count(state)
}

//
// ─── ACTIVE QUESTION ──────────────────────────────────────────────────────────
//

#[must_use]
pub fn get_active_question_index(state: &CheckupState) -> Option<i64> {
    state.active_question_index
}

/// The active index if it points at an existing question.
fn resolved_index(state: &CheckupState) -> Option<usize> {
    let index = usize::try_from(state.active_question_index?).ok()?;
    (index < get_question_count(state)).then_some(index)
}

#[must_use]
pub fn check_next_question_enabled(state: &CheckupState) -> bool {
    resolved_index(state).is_some_and(|index| index + 1 < get_question_count(state))
}

#[must_use]
pub fn check_previous_question_enabled(state: &CheckupState) -> bool {
    state.active_question_index.is_some_and(|index| index > 0)
}

#[must_use]
pub fn get_active_question(state: &CheckupState) -> Option<QuestionEntry<'_>> {
    let index = resolved_index(state)?;
    questions(state).nth(index)
}

#[must_use]
pub fn get_current_topic_name(state: &CheckupState) -> Option<&str> {
    get_active_question(state).map(|question| question.topic)
}

/// Answer already recorded for the active question.
#[must_use]
pub fn get_active_answer(state: &CheckupState) -> Option<Answer> {
    get_active_question(state).and_then(|question| get_answer(state, question.id))
}

#[must_use]
pub fn is_active_question_answered(state: &CheckupState) -> bool {
    get_active_answer(state).is_some()
}

//
// ─── RESPONSES ────────────────────────────────────────────────────────────────
//

#[must_use]
pub fn get_answer(state: &CheckupState, question_id: &QuestionId) -> Option<Answer> {
    state
        .responses
        .iter()
        .find(|response| &response.question_id == question_id)
        .map(|response| response.answer)
}

/// Stored responses in the order they were given.
///
/// Responses that reference a question missing from the catalog are skipped.
#[must_use]
pub fn get_response_list(state: &CheckupState) -> Vec<ResponseEntry<'_>> {
    let by_id: HashMap<&QuestionId, QuestionEntry<'_>> = questions(state)
        .map(|question| (question.id, question))
        .collect();

    state
        .responses
        .iter()
        .filter_map(|response| {
            by_id.get(&response.question_id).map(|question| ResponseEntry {
                question: *question,
                answer: response.answer,
            })
        })
        .collect()
}

#[must_use]
pub fn get_response_count(state: &CheckupState) -> usize {
    state.responses.len()
}

/// Responses grouped by topic. Topics without answers are left out.
#[must_use]
pub fn get_responses(state: &CheckupState) -> Vec<TopicResponses<'_>> {
    let answers: HashMap<&QuestionId, Answer> = state
        .responses
        .iter()
        .map(|response| (&response.question_id, response.answer))
        .collect();

    let mut groups: Vec<TopicResponses<'_>> = Vec::new();
    for question in questions(state) {
        let Some(&answer) = answers.get(question.id) else {
            continue;
        };
        let entry = ResponseEntry { question, answer };
        match groups.last_mut() {
            Some(group) if group.id == question.topic_id => group.questions.push(entry),
            _ => groups.push(TopicResponses {
                id: question.topic_id,
                name: question.topic,
                questions: vec![entry],
            }),
        }
    }
    groups
}

fn answers_matching(state: &CheckupState, answer: Answer) -> Vec<ResponseEntry<'_>> {
    get_response_list(state)
        .into_iter()
        .filter(|entry| entry.answer == answer)
        .collect()
}

#[must_use]
pub fn get_yes_answers(state: &CheckupState) -> Vec<ResponseEntry<'_>> {
    answers_matching(state, Answer::Yes)
}

#[must_use]
pub fn get_no_answers(state: &CheckupState) -> Vec<ResponseEntry<'_>> {
    answers_matching(state, Answer::No)
}

#[must_use]
pub fn get_not_sure_answers(state: &CheckupState) -> Vec<ResponseEntry<'_>> {
    answers_matching(state, Answer::NotSure)
}

//
// ─── RESULT ───────────────────────────────────────────────────────────────────
//

#[must_use]
pub fn get_result_type(state: &CheckupState) -> ResultType {
    ResultType::from_yes_count(get_yes_answers(state).len())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{
        FIRST_QUESTION_ID, LAST_QUESTION_ID, MONEY_TROUBLES_TOPIC_ID, fixture_state,
    };
    use crate::model::{Question, Response};

    fn with_index(index: Option<i64>) -> CheckupState {
        CheckupState {
            active_question_index: index,
            ..fixture_state()
        }
    }

    #[test]
    fn next_is_enabled_from_the_first_question() {
        assert!(check_next_question_enabled(&fixture_state()));
        assert!(check_next_question_enabled(&with_index(Some(3))));
    }

    #[test]
    fn next_is_disabled_at_the_end_or_without_index() {
        let last = i64::try_from(get_question_count(&fixture_state()) - 1).unwrap();
        assert!(!check_next_question_enabled(&with_index(Some(last))));
        assert!(!check_next_question_enabled(&with_index(Some(last + 1))));
        assert!(!check_next_question_enabled(&with_index(None)));
        assert!(!check_next_question_enabled(&with_index(Some(-1))));
    }

    #[test]
    fn previous_requires_an_index_above_zero() {
        assert!(!check_previous_question_enabled(&fixture_state()));
        assert!(!check_previous_question_enabled(&with_index(None)));
        assert!(!check_previous_question_enabled(&with_index(Some(-4))));
        assert!(check_previous_question_enabled(&with_index(Some(3))));
    }

    #[test]
    fn active_question_is_the_first_catalog_question() {
        let state = fixture_state();
        let active = get_active_question(&state).unwrap();
        let first = &state.topics[0].questions[0];

        assert_eq!(active.id, &first.id);
        assert_eq!(active.text, first.text);
        assert_eq!(active.index, 0);
    }

    #[test]
    fn active_question_is_absent_for_bad_indices() {
        assert!(get_active_question(&with_index(Some(-1))).is_none());
        assert!(get_active_question(&with_index(Some(28))).is_none());
        assert!(get_active_question(&with_index(Some(i64::MAX))).is_none());
        assert!(get_active_question(&with_index(None)).is_none());
    }

    #[test]
    fn active_question_index_is_passed_through() {
        assert_eq!(get_active_question_index(&fixture_state()), Some(0));
        assert_eq!(get_active_question_index(&CheckupState::default()), None);
    }

    #[test]
    fn current_topic_name_follows_active_question() {
        assert_eq!(
            get_current_topic_name(&fixture_state()),
            Some("Money Troubles")
        );
        assert_eq!(get_current_topic_name(&with_index(Some(-1))), None);
    }

    #[test]
    fn question_count_matches_flattened_list() {
        let state = fixture_state();
        assert_eq!(get_question_count(&state), get_question_list(&state).len());
    }

    #[test]
    fn question_indices_are_contiguous() {
        let indices: Vec<usize> = get_question_indices(&fixture_state()).collect();
        assert_eq!(indices, (0..28).collect::<Vec<_>>());
    }

    #[test]
    fn question_list_keeps_catalog_order() {
        let state = fixture_state();
        let questions = get_question_list(&state);

        assert_eq!(questions.len(), 28);
        assert_eq!(*questions[0].id, FIRST_QUESTION_ID);
        assert_eq!(*questions[27].id, LAST_QUESTION_ID);
        assert!(questions.iter().enumerate().all(|(i, q)| q.index == i));
    }

    #[test]
    fn question_list_carries_topic_name_and_id() {
        let state = fixture_state();
        let first = get_question_list(&state)[0];

        assert_eq!(first.topic, "Money Troubles");
        assert_eq!(*first.topic_id, MONEY_TROUBLES_TOPIC_ID);
    }

    #[test]
    fn flattening_is_stable() {
        let state = fixture_state();
        assert_eq!(get_question_list(&state), get_question_list(&state));
    }

    #[test]
    fn response_count_counts_stored_responses() {
        assert_eq!(get_response_count(&fixture_state()), 3);
    }

    #[test]
    fn response_list_keeps_answer_order() {
        let state = fixture_state();
        let responses = get_response_list(&state);

        assert_eq!(responses.len(), 3);
        assert_eq!(*responses[0].question.id, FIRST_QUESTION_ID);
        assert_eq!(responses[0].answer, Answer::Yes);
        assert_eq!(*responses[1].question.id, "8A9B3C23BA41440187B0B9F9EB0D8400");
        assert_eq!(responses[1].answer, Answer::No);
        assert_eq!(*responses[2].question.id, "A7D51C38F34A4EA1919C74013E703C39");
        assert_eq!(responses[2].answer, Answer::NotSure);
        assert_eq!(responses[0].question.topic, "Money Troubles");
    }

    #[test]
    fn response_list_uses_insertion_not_catalog_order() {
        let mut state = fixture_state();
        state.responses.reverse();
        let responses = get_response_list(&state);

        assert_eq!(responses[0].answer, Answer::NotSure);
        assert_eq!(responses[2].answer, Answer::Yes);
    }

    #[test]
    fn response_list_skips_unknown_questions() {
        let mut state = fixture_state();
        state
            .responses
            .push(Response::new(QuestionId::new("GONE"), Answer::Yes));

        assert_eq!(get_response_list(&state).len(), 3);
        assert_eq!(get_response_count(&state), 4);
    }

    #[test]
    fn responses_are_grouped_by_topic() {
        let state = fixture_state();
        let groups = get_responses(&state);

        assert_eq!(groups.len(), 1);
        let group = &groups[0];
        assert_eq!(*group.id, MONEY_TROUBLES_TOPIC_ID);
        assert_eq!(group.name, "Money Troubles");
        assert_eq!(group.questions.len(), 3);
        assert_eq!(*group.questions[0].question.id, FIRST_QUESTION_ID);
    }

    #[test]
    fn grouped_responses_follow_catalog_order() {
        let mut state = fixture_state();
        state.responses.reverse();
        state
            .responses
            .insert(0, Response::new(QuestionId::new(LAST_QUESTION_ID), Answer::No));

        let groups = get_responses(&state);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Money Troubles");
        assert_eq!(*groups[0].questions[0].question.id, FIRST_QUESTION_ID);
        assert_eq!(groups[0].questions[2].answer, Answer::NotSure);
        assert_eq!(groups[1].questions.len(), 1);
        assert_eq!(*groups[1].questions[0].question.id, LAST_QUESTION_ID);
    }

    #[test]
    fn grouped_responses_are_empty_without_answers() {
        let state = CheckupState {
            responses: Vec::new(),
            ..fixture_state()
        };
        assert!(get_responses(&state).is_empty());
    }

    #[test]
    fn answer_partitions_have_one_entry_each() {
        let state = fixture_state();
        assert_eq!(get_yes_answers(&state).len(), 1);
        assert_eq!(get_no_answers(&state).len(), 1);
        assert_eq!(get_not_sure_answers(&state).len(), 1);
    }

    #[test]
    fn result_needs_help_at_trigger() {
        assert_eq!(get_result_type(&fixture_state()), ResultType::NeedHelp);
    }

    #[test]
    fn result_is_all_good_without_responses() {
        let state = CheckupState {
            responses: Vec::new(),
            ..fixture_state()
        };
        assert_eq!(get_result_type(&state), ResultType::AllGood);
    }

    #[test]
    fn active_answer_reflects_responses() {
        let state = fixture_state();
        assert_eq!(get_active_answer(&state), Some(Answer::Yes));
        assert!(is_active_question_answered(&state));
        assert!(!is_active_question_answered(&with_index(Some(3))));
    }

    #[test]
    fn removed_question_behaves_as_out_of_range() {
        let mut state = with_index(Some(27));
        state.topics.last_mut().unwrap().questions.pop();

        assert!(get_active_question(&state).is_none());
        assert!(!check_next_question_enabled(&state));
    }

    #[test]
    fn empty_catalog_has_no_questions() {
        let state = CheckupState {
            topics: vec![Topic::new(TopicId::new("T"), "Empty", Vec::<Question>::new())],
            responses: Vec::new(),
            active_question_index: Some(0),
        };
        assert_eq!(get_question_count(&state), 0);
        assert!(get_active_question(&state).is_none());
        assert!(!check_next_question_enabled(&state));
        assert_eq!(get_result_type(&state), ResultType::AllGood);
    }
}
