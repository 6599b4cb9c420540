use serde::Deserialize;

/// A movie record as returned by TMDB list endpoints
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Movie {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl Movie {
    /// Full poster URL, if the movie has a poster
    pub fn poster_url(&self, image_base_url: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}{}", image_base_url, path))
    }
}

/// One page of `search/movie` or `discover/movie` results.
///
/// `results` stays `None` when the field is absent so callers can tell
/// "no results field" apart from "empty results".
#[derive(Deserialize, Clone, Debug, Default)]
pub struct MoviePage {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub results: Option<Vec<Movie>>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_page() {
        let body = r#"{
            "page": 1,
            "results": [
                {"id": 268, "title": "Batman", "poster_path": "/cij4dd21v2Rk2YtUQbV5kW69WB2.jpg",
                 "vote_average": 7.2, "original_language": "en", "release_date": "1989-06-21",
                 "adult": false, "genre_ids": [14, 28]},
                {"id": 1, "title": "Untitled"}
            ],
            "total_pages": 3,
            "total_results": 41
        }"#;
        let page: MoviePage = serde_json::from_str(body).unwrap();
        let results = page.results.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Batman");
        assert_eq!(results[0].vote_average, Some(7.2));
        assert_eq!(results[1].poster_path, None);
        assert_eq!(page.total_pages, Some(3));
    }

    #[test]
    fn test_missing_results_field() {
        let page: MoviePage = serde_json::from_str(r#"{"status_message": "oops"}"#).unwrap();
        assert!(page.results.is_none());

        let page: MoviePage = serde_json::from_str(r#"{"page": 1, "results": []}"#).unwrap();
        assert_eq!(page.results, Some(Vec::new()));
    }

    #[test]
    fn test_poster_url() {
        let mut movie: Movie = serde_json::from_str(r#"{"id": 5, "poster_path": "/p.jpg"}"#).unwrap();
        assert_eq!(
            movie.poster_url("https://image.tmdb.org/t/p/w500").as_deref(),
            Some("https://image.tmdb.org/t/p/w500/p.jpg")
        );

        movie.poster_path = None;
        assert_eq!(movie.poster_url("https://image.tmdb.org/t/p/w500"), None);
    }
}
