use dioxus::prelude::*;

use super::Loader;
use crate::search::TrendingPanel;

#[derive(Props, PartialEq, Clone)]
pub struct TrendingListProps {
    panel: TrendingPanel,
}

/// Ranked list of the most searched movies
#[component]
pub fn TrendingList(props: TrendingListProps) -> Element {
    if !props.panel.is_visible() {
        return rsx! {};
    }

    let body = if props.panel.loading {
        rsx! { Loader {} }
    } else if let Some(error) = &props.panel.error {
        rsx! { h2 { class: "error-text", "{error}" } }
    } else {
        rsx! {
            ul {
                {props.panel.entries.iter().enumerate().map(|(index, entry)| {
                    let rank = index + 1;
                    let poster = entry.poster_url.clone().unwrap_or_default();
                    rsx! {
                        li { key: "{entry.id}",
                            p { "{rank}" }
                            img { src: "{poster}", alt: "{entry.search_term}" }
                        }
                    }
                })}
            }
        }
    };

    rsx! {
        section { class: "trending",
            h2 { "Trending Movies" }
            {body}
        }
    }
}
