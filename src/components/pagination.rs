use dioxus::prelude::*;

use crate::search::Pager;

#[derive(Props, PartialEq, Clone)]
pub struct PaginationProps {
    pager: Pager,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
}

#[component]
pub fn Pagination(props: PaginationProps) -> Element {
    let can_go_back = props.pager.can_go_back();
    let page = props.pager.current();
    let previous_class = if can_go_back { "page-button" } else { "page-button disabled" };

    rsx! {
        div { class: "pagination",
            button {
                class: previous_class,
                // Disabled on the first page so no page change can be triggered
                disabled: !can_go_back,
                onclick: move |_| {
                    if can_go_back {
                        props.on_previous.call(());
                    }
                },
                "Previous"
            }
            span { class: "page-number", "Page {page}" }
            button {
                class: "page-button",
                onclick: move |_| props.on_next.call(()),
                "Next"
            }
        }
    }
}
