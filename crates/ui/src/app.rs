use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::use_checkup_provider;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    use_checkup_provider();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Legal Checkup" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
