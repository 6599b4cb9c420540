use dioxus::prelude::*;

use crate::tmdb::Movie;
use crate::utils::display::{format_language, format_rating, release_year};

const NO_POSTER: Asset = asset!("/assets/no-movie.svg");
const STAR_ICON: Asset = asset!("/assets/star.svg");

#[derive(Props, PartialEq, Clone)]
pub struct MovieCardProps {
    movie: Movie,
    image_base_url: String,
}

#[component]
pub fn MovieCard(props: MovieCardProps) -> Element {
    let movie = &props.movie;
    let poster = match movie.poster_url(&props.image_base_url) {
        Some(url) => rsx! { img { src: "{url}", alt: "{movie.title}" } },
        None => rsx! { img { src: NO_POSTER, alt: "{movie.title}" } },
    };
    let rating = format_rating(movie.vote_average);
    let language = format_language(movie.original_language.as_deref());
    let year = release_year(movie.release_date.as_deref());

    rsx! {
        li { class: "movie-card",
            {poster}
            div { class: "mt-4",
                h3 { "{movie.title}" }
                div { class: "content",
                    div { class: "rating",
                        img { src: STAR_ICON, alt: "star icon" }
                        p { "{rating}" }
                    }
                    span { "•" }
                    p { class: "lang", "{language}" }
                    span { "•" }
                    p { class: "year", "{year}" }
                }
            }
        }
    }
}
