use dioxus::prelude::*;

/// Spinner shown while a fetch is in flight
#[component]
pub fn Loader() -> Element {
    rsx! {
        div { class: "loader", role: "status",
            span { class: "loader-spinner" }
            span { class: "sr-only", "Loading..." }
        }
    }
}
