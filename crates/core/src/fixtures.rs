//! Deterministic checkup states for tests in this and downstream crates.

use crate::catalog::Catalog;
use crate::model::{Answer, QuestionId, Response};
use crate::state::{AppState, CheckupState};

pub const MONEY_TROUBLES_TOPIC_ID: &str = "4DDB61C7677B4BA2813D2CAE98EF51D5";
pub const FIRST_QUESTION_ID: &str = "759CDC30C25B489A9EB71B7E859F2DD7";
pub const LAST_QUESTION_ID: &str = "79591D25C03D4AA7912E1366DD282586";

/// The bundled catalog with the first three questions answered
/// YES, NO and NOT_SURE, and the first question active.
///
/// # Panics
///
/// Panics if the bundled catalog is corrupt.
#[must_use]
pub fn fixture_state() -> CheckupState {
    let catalog = Catalog::bundled().expect("bundled catalog should be valid");
    let mut state = CheckupState::new(catalog);
    state.responses = vec![
        Response::new(QuestionId::new(FIRST_QUESTION_ID), Answer::Yes),
        Response::new(QuestionId::new("8A9B3C23BA41440187B0B9F9EB0D8400"), Answer::No),
        Response::new(QuestionId::new("A7D51C38F34A4EA1919C74013E703C39"), Answer::NotSure),
    ];
    state
}

#[must_use]
pub fn fixture_app_state() -> AppState {
    AppState {
        checkup: fixture_state(),
    }
}
