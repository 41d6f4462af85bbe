use checkup_core::constants::{ABOUT_US_URL, COMMUNITY_LAW_SERVICES_URL};
use checkup_core::fixtures::fixture_app_state;
use checkup_core::model::Answer;
use dioxus::prelude::ReadableExt;

use super::test_harness::{ViewKind, drive_dom, setup_view_harness, setup_view_harness_with_state};
use crate::style::Format;
use crate::vm::CheckupIntent;

#[test]
fn home_view_smoke_renders_start_and_links() {
    let mut harness = setup_view_harness(ViewKind::Home, Format::Desktop);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Start checkup"), "missing start button in {html}");
    assert!(html.contains(ABOUT_US_URL), "missing about link in {html}");
    assert!(
        html.contains(COMMUNITY_LAW_SERVICES_URL),
        "missing services link in {html}"
    );
    assert!(html.contains("margin: 0 auto 60px auto;"), "missing desktop margin in {html}");
}

#[test]
fn home_view_smoke_uses_mobile_layout() {
    let mut harness = setup_view_harness(ViewKind::Home, Format::Mobile);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("format-mobile"), "missing format class in {html}");
    assert!(html.contains("margin: 0 0 32px 0;"), "missing mobile margin in {html}");
    assert!(!html.contains("calc(50% - 10px)"), "desktop width leaked into {html}");
}

#[test]
fn home_view_smoke_offers_to_continue() {
    let mut harness =
        setup_view_harness_with_state(ViewKind::Home, Format::Desktop, Some(fixture_app_state()));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Continue checkup"), "missing continue label in {html}");
}

#[test]
fn checkup_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Checkup, Format::Desktop);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Money Troubles"), "missing topic in {html}");
    assert!(html.contains("Question 1 of 28"), "missing progress in {html}");
    assert!(
        html.contains("Do you owe money that you are struggling to pay back?"),
        "missing question text in {html}"
    );
    assert!(html.contains("Not sure"), "missing answer button in {html}");
}

#[test]
fn checkup_view_answer_intent_advances() {
    let mut harness = setup_view_harness(ViewKind::Checkup, Format::Desktop);
    harness.rebuild();

    let handles = harness.checkup_handles();
    let dispatch = handles.dispatch();
    harness
        .dom
        .in_runtime(|| dispatch.call(CheckupIntent::Answer(Answer::Yes)));
    drive_dom(&mut harness.dom);

    let answered = harness
        .dom
        .in_runtime(|| handles.controller().read().progress().answered);
    assert_eq!(answered, 1);

    let html = harness.render();
    assert!(html.contains("Question 2 of 28"), "missing progress in {html}");
    assert!(
        html.contains("Are debt collectors or lenders contacting you"),
        "missing second question in {html}"
    );
}

#[test]
fn checkup_view_blocked_navigation_shows_error() {
    let mut harness = setup_view_harness(ViewKind::Checkup, Format::Desktop);
    harness.rebuild();

    let dispatch = harness.checkup_handles().dispatch();
    harness
        .dom
        .in_runtime(|| dispatch.call(CheckupIntent::Previous));
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("class=\"error\""), "missing error banner in {html}");
    assert!(html.contains("Question 1 of 28"), "index moved in {html}");
}

#[test]
fn results_view_smoke_renders_need_help() {
    let mut harness =
        setup_view_harness_with_state(ViewKind::Results, Format::Tablet, Some(fixture_app_state()));
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("You could use some legal help"),
        "missing headline in {html}"
    );
    assert!(html.contains("Money Troubles"), "missing topic group in {html}");
    assert!(html.contains("Yes: 1"), "missing yes count in {html}");
    assert!(html.contains(ABOUT_US_URL), "missing about link in {html}");
    assert!(html.contains("width: 310px;"), "missing tablet redo width in {html}");
}

#[test]
fn results_view_smoke_renders_all_good_without_answers() {
    let mut harness = setup_view_harness(ViewKind::Results, Format::Desktop);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("all good"), "missing headline in {html}");
    assert!(
        html.contains("answered any questions yet"),
        "missing empty state in {html}"
    );
    assert!(html.contains("width: 920px;"), "missing desktop redo width in {html}");
}
