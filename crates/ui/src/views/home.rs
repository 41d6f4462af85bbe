use checkup_core::constants::{ABOUT_US_URL, COMMUNITY_LAW_SERVICES_URL};
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::CheckupCommand;

use crate::context::{AppContext, use_checkup_controller};
use crate::routes::{Route, RouteNavigator};
use crate::style::{about_community_law_style, community_law_services_style, start_checkup_style};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut controller = use_checkup_controller();
    let router = use_navigator();
    let format = ctx.format();

    let started = controller.read().progress().answered > 0;
    let start_label = if started { "Continue checkup" } else { "Start checkup" };

    let on_start = move |_: MouseEvent| {
        // A finished checkup starts over; an unfinished one resumes.
        if controller.read().is_complete() {
            let navigator = RouteNavigator::new(move |route| {
                router.push(route);
            });
            let _ = controller.write().dispatch(CheckupCommand::Reset, &navigator);
        }
        router.push(Route::Checkup {});
    };

    rsx! {
        div { class: "page home format-{format}",
            h2 { "Do you have a legal problem?" }
            p { class: "intro",
                "Answer a few quick questions to find out whether you might need legal help, and where to get it for free."
            }
            button {
                id: "start-checkup",
                style: "{start_checkup_style(format)}",
                onclick: on_start,
                "{start_label}"
            }
            div { class: "home-links",
                a {
                    id: "about-community-law",
                    href: ABOUT_US_URL,
                    style: "{about_community_law_style(format)}",
                    "About Community Law"
                }
                a {
                    id: "community-law-services",
                    href: COMMUNITY_LAW_SERVICES_URL,
                    style: "{community_law_services_style(format)}",
                    "Community Law services"
                }
            }
        }
    }
}
