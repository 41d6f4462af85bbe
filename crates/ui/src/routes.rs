use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};
use services::Navigator;
use tracing::warn;

use crate::views::{CheckupView, HomeView, ResultsView};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/checkup", CheckupView)] Checkup {},
        #[route("/results", ResultsView)] Results {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "banner",
                h1 { "Legal Checkup" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

/// Bridges navigation requests from the controller onto the router.
pub struct RouteNavigator<F> {
    push: F,
}

impl<F: Fn(Route)> RouteNavigator<F> {
    pub fn new(push: F) -> Self {
        Self { push }
    }
}

impl<F: Fn(Route)> Navigator for RouteNavigator<F> {
    fn navigate(&self, path: &str) {
        match path.parse::<Route>() {
            Ok(route) => (self.push)(route),
            Err(_) => warn!(path, "navigation requested to an unknown route"),
        }
    }
}
