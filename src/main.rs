use dioxus::{logger::tracing, prelude::*};
use dioxus_desktop::{Config, WindowBuilder};
use views::Home;

mod components;
mod contexts;
mod search;
mod tmdb;
mod trending;
mod utils;
mod views;

use contexts::AppConfig;
use search::SearchService;
use utils::config;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new().with_title("Movie Finder")
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    // Resolved once; the services receive the configuration explicitly
    let setup = use_hook(|| {
        AppConfig::load()
            .map(|cfg| (SearchService::from_config(&cfg), cfg.tmdb.image_base_url))
            .inspect_err(|e| tracing::error!("Failed to load configuration: {}", e))
    });

    match setup {
        Err(err) => {
            rsx! {
                document::Link { rel: "icon", href: FAVICON }
                document::Link { rel: "stylesheet", href: MAIN_CSS }

                div { class: "error-container",
                    div { class: "error-banner",
                        "⚠️ Movie Finder is not configured: {err}"
                    }
                    p {
                        "Set TMDB_API_KEY, APPWRITE_PROJECT_ID, APPWRITE_DATABASE_ID and APPWRITE_COLLECTION_ID, "
                        "or add them to the config.json file in the movie-finder config directory."
                    }
                }
            }
        }
        Ok((service, image_base_url)) => {
            rsx! {
                document::Link { rel: "icon", href: FAVICON }
                document::Link { rel: "stylesheet", href: MAIN_CSS }

                Home {
                    service,
                    image_base_url,
                    debounce: config::SEARCH_DEBOUNCE
                }
            }
        }
    }
}
