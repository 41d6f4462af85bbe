use std::sync::Arc;

use checkup_core::{AppState, Catalog};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::CheckupController;

use crate::context::{UiApp, build_app_context, use_checkup_provider};
use crate::style::Format;
use crate::views::checkup::CheckupTestHandles;
use crate::views::{CheckupView, HomeView, ResultsView};

#[derive(Clone)]
struct TestApp {
    catalog: Catalog,
    format: Format,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Catalog {
        self.catalog.clone()
    }

    fn format(&self) -> Format {
        self.format
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Checkup,
    Results,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    initial: Option<AppState>,
    checkup_handles: Option<CheckupTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    match props.initial.clone() {
        Some(state) => {
            use_context_provider(move || Signal::new(CheckupController::from_state(state)));
        }
        None => {
            use_checkup_provider();
        }
    }
    if let Some(handles) = props.checkup_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Checkup => rsx! { CheckupView {} },
        ViewKind::Results => rsx! { ResultsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub checkup_handles: Option<CheckupTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn checkup_handles(&self) -> CheckupTestHandles {
        self.checkup_handles
            .clone()
            .expect("checkup handles are only set up for the checkup view")
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// A fresh checkup over the bundled catalog.
pub fn setup_view_harness(view: ViewKind, format: Format) -> ViewHarness {
    setup_view_harness_with_state(view, format, None)
}

pub fn setup_view_harness_with_state(
    view: ViewKind,
    format: Format,
    initial: Option<AppState>,
) -> ViewHarness {
    let catalog = Catalog::bundled().expect("bundled catalog");
    let checkup_handles = match view {
        ViewKind::Checkup => Some(CheckupTestHandles::default()),
        _ => None,
    };

    let app = Arc::new(TestApp { catalog, format });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            initial,
            checkup_handles: checkup_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        checkup_handles,
    }
}
