use dioxus::prelude::*;

const SEARCH_ICON: Asset = asset!("/assets/search.svg");

#[derive(Props, PartialEq, Clone)]
pub struct SearchInputProps {
    query: String,
    on_change: EventHandler<String>,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search",
            div {
                img { src: SEARCH_ICON, alt: "search" }
                input {
                    r#type: "text",
                    placeholder: "Search a collection of movies...",
                    value: "{props.query}",
                    oninput: move |evt| props.on_change.call(evt.value())
                }
            }
        }
    }
}
