use checkup_core::model::Answer;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::debug;

use crate::context::use_checkup_controller;
use crate::routes::{Route, RouteNavigator};
use crate::views::ViewError;
use crate::vm::{CheckupIntent, CheckupVm, QuestionVm, map_checkup};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;
#[cfg(test)]
use services::CheckupController;

#[component]
pub fn CheckupView() -> Element {
    let controller = use_checkup_controller();
    let router = use_navigator();
    let error = use_signal(|| None::<ViewError>);

    let dispatch_intent = use_callback(move |intent: CheckupIntent| {
        let mut controller = controller;
        let mut error = error;
        debug!(?intent, "checkup intent");

        let navigator = RouteNavigator::new(move |route| {
            router.push(route);
        });
        let result = controller
            .write()
            .dispatch(intent.into_command(), &navigator);

        match result {
            Ok(_) => error.set(None),
            Err(err) => error.set(Some(ViewError::from_checkup(&err))),
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<CheckupTestHandles>() {
                handles.register(dispatch_intent, controller);
            }
        }
    }

    let vm: CheckupVm = map_checkup(&controller.read());

    rsx! {
        div { class: "page checkup",
            div { class: "progress",
                span { class: "progress-label", "{vm.progress_label()}" }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {vm.percent}%;" }
                }
            }

            if let Some(err) = error() {
                p { class: "error", "{err.message()}" }
            }

            if vm.is_complete {
                div { class: "checkup-done",
                    p { "You've finished the checkup." }
                    button {
                        id: "checkup-see-results",
                        onclick: move |_| {
                            router.push(Route::Results {});
                        },
                        "See your results"
                    }
                }
            } else {
                {
                    match vm.question.clone() {
                        Some(question) => rsx! {
                            QuestionCard {
                                question,
                                on_answer: move |answer| dispatch_intent.call(CheckupIntent::Answer(answer)),
                            }
                        },
                        None => rsx! {
                            p { class: "empty", "There are no questions to show." }
                        },
                    }
                }

                nav { class: "checkup-nav",
                    button {
                        id: "checkup-previous",
                        disabled: !vm.can_previous,
                        onclick: move |_| dispatch_intent.call(CheckupIntent::Previous),
                        "Previous"
                    }
                    button {
                        id: "checkup-next",
                        disabled: !vm.can_next,
                        onclick: move |_| dispatch_intent.call(CheckupIntent::Next),
                        "Next"
                    }
                    if vm.answered > 0 {
                        button {
                            id: "checkup-finish",
                            onclick: move |_| dispatch_intent.call(CheckupIntent::Finish),
                            "Finish"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm, on_answer: EventHandler<Answer>) -> Element {
    rsx! {
        section { class: "question",
            h3 { class: "topic", "{question.topic_name}" }
            p { class: "question-text", "{question.text}" }
            div { class: "answers",
                for answer in Answer::ALL {
                    button {
                        key: "{answer}",
                        id: "answer-{answer}",
                        class: if question.selected == Some(answer) { "answer selected" } else { "answer" },
                        onclick: move |_| on_answer.call(answer),
                        "{answer.label()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct CheckupTestHandles {
    dispatch: Rc<RefCell<Option<Callback<CheckupIntent>>>>,
    controller: Rc<RefCell<Option<Signal<CheckupController>>>>,
}

#[cfg(test)]
impl CheckupTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<CheckupIntent>,
        controller: Signal<CheckupController>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.controller.borrow_mut() = Some(controller);
    }

    pub(crate) fn dispatch(&self) -> Callback<CheckupIntent> {
        (*self.dispatch.borrow()).expect("checkup dispatch registered")
    }

    pub(crate) fn controller(&self) -> Signal<CheckupController> {
        (*self.controller.borrow()).expect("checkup controller registered")
    }
}
