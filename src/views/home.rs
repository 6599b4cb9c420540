use dioxus::{logger::tracing, prelude::*};
use std::time::Duration;

use crate::components::{Loader, MovieCard, Pagination, SearchInput, TrendingList};
use crate::search::{Debouncer, Pager, SearchPanel, SearchService, TrendingPanel};

const HOME_CSS: Asset = asset!("/assets/styling/home.css");
const HERO_IMG: Asset = asset!("/assets/hero.svg");

/// The movie search page: search box, trending searches and paged results
#[component]
pub fn Home(service: SearchService, image_base_url: String, debounce: Duration) -> Element {
    let mut search_text = use_signal(String::new);
    let mut committed_query = use_signal(String::new);
    let mut pager = use_signal(Pager::default);
    let mut panel = use_signal(SearchPanel::default);
    let mut trending = use_signal(TrendingPanel::default);
    let debouncer = use_hook(|| Debouncer::new(debounce));

    // Commit the typed text once typing pauses for the debounce window
    use_effect(move || {
        let text = search_text();
        let debouncer = debouncer.clone();
        spawn(async move {
            if debouncer.settle().await && *committed_query.peek() != text {
                committed_query.set(text);
            }
        });
    });

    // One catalog request per committed query or page change
    use_effect({
        let service = service.clone();
        move || {
            let query = committed_query();
            let page = pager().current();
            let ticket = panel.write().begin();
            let service = service.clone();
            spawn(async move {
                let outcome = service.search(&query, page).await;
                if !panel.write().finish(ticket, &outcome) {
                    tracing::debug!("Dropping stale results for '{}' page {}", query, page);
                }

                // Counted after the list is shown; failures only reach the log
                if let Some(movie) = outcome.counter_candidate(&query) {
                    service.record_search(&query, movie).await;
                }
            });
        }
    });

    // Trending searches, loaded once on mount
    use_effect(move || {
        let service = service.clone();
        trending.write().begin();
        spawn(async move {
            let result = service.trending().await;
            trending.write().finish(result);
        });
    });

    let results = panel.read().clone();
    let movies_section = if results.loading {
        rsx! { Loader {} }
    } else if let Some(error) = &results.error {
        rsx! { h2 { class: "error-text", "{error}" } }
    } else {
        rsx! {
            ul {
                {results.movies.iter().map(|movie| {
                    rsx! {
                        MovieCard {
                            key: "{movie.id}",
                            movie: movie.clone(),
                            image_base_url: image_base_url.clone()
                        }
                    }
                })}
            }
            Pagination {
                pager: pager(),
                on_previous: move |_| pager.write().previous(),
                on_next: move |_| pager.write().next()
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: HOME_CSS }

        main {
            div { class: "pattern" }
            div { class: "wrapper",
                header {
                    img { src: HERO_IMG, alt: "hero banner" }
                    h1 {
                        "Find "
                        span { class: "text-gradient", "Movies" }
                        " You'll Enjoy Without the Hassle"
                    }
                    SearchInput {
                        query: search_text(),
                        on_change: move |q| search_text.set(q)
                    }
                }

                TrendingList { panel: trending() }

                section { class: "all-movies",
                    h2 { "All Movies" }
                    {movies_section}
                }
            }
        }
    }
}
