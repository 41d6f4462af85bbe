use checkup_core::constants::ABOUT_US_URL;
use checkup_core::model::ResultType;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::CheckupCommand;
use tracing::warn;

use crate::context::{AppContext, use_checkup_controller};
use crate::routes::{Route, RouteNavigator};
use crate::style::{about_style, redo_style};
use crate::vm::{TopicResultVm, map_results};

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut controller = use_checkup_controller();
    let router = use_navigator();
    let format = ctx.format();

    let vm = map_results(controller.read().state());
    let result_class = match vm.result {
        ResultType::NeedHelp => "result need-help",
        ResultType::AllGood => "result all-good",
    };

    let on_redo = move |_: MouseEvent| {
        let navigator = RouteNavigator::new(move |route| {
            router.push(route);
        });
        if let Err(err) = controller.write().dispatch(CheckupCommand::Reset, &navigator) {
            warn!(%err, "reset failed");
            return;
        }
        router.push(Route::Home {});
    };

    rsx! {
        div { class: "page results format-{format}",
            section { class: "{result_class}",
                h2 { "{vm.headline()}" }
                p { class: "result-body", "{vm.body()}" }
                ul { class: "result-counts",
                    li { "Yes: {vm.yes}" }
                    li { "No: {vm.no}" }
                    li { "Not sure: {vm.not_sure}" }
                }
            }

            if vm.topics.is_empty() {
                p { class: "empty", "You haven't answered any questions yet." }
            } else {
                div { class: "responses",
                    for topic in vm.topics.iter().cloned() {
                        TopicResults { key: "{topic.id}", topic }
                    }
                }
            }

            div { class: "results-actions",
                a {
                    id: "about-us",
                    href: ABOUT_US_URL,
                    style: "{about_style(format)}",
                    "About us"
                }
                button {
                    id: "redo-checkup",
                    style: "{redo_style(format)}",
                    onclick: on_redo,
                    "Redo checkup"
                }
            }
        }
    }
}

#[component]
fn TopicResults(topic: TopicResultVm) -> Element {
    rsx! {
        section { class: "topic-results",
            h3 { "{topic.name}" }
            ul {
                for row in topic.answers.iter() {
                    li { key: "{row.question_id}", class: "answer-row",
                        span { class: "question-text", "{row.question}" }
                        span { class: "answer answer-{row.answer}", "{row.answer.label()}" }
                    }
                }
            }
        }
    }
}
