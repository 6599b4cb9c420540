/// Configuration constants for the application
pub mod config {
    use std::time::Duration;

    /// Default TMDB API root
    pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

    /// Default prefix prepended to a movie's `poster_path`
    pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

    /// Default Appwrite cloud endpoint
    pub const DEFAULT_APPWRITE_ENDPOINT: &str = "https://cloud.appwrite.io/v1";

    /// Directory under the platform config dir holding the config file
    pub const CONFIG_DIR_NAME: &str = "movie-finder";

    /// Config file name
    pub const CONFIG_FILE_NAME: &str = "config.json";

    /// Quiet period before typed text is committed as a query
    pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(1000);

    /// Number of trending entries shown
    pub const TRENDING_LIMIT: usize = 5;

    /// Message shown when the catalog request fails
    pub const SEARCH_ERROR_MESSAGE: &str = "Error fetching movie from server please try again!";

    /// Message shown when the catalog answers without a results field
    pub const NO_RESULTS_MESSAGE: &str = "No movies found";

    /// Message shown when the trending list cannot be loaded
    pub const TRENDING_ERROR_MESSAGE: &str = "Error fetching movie from server please try again!";
}

/// Utility functions for locating files on disk
pub mod file_utils {
    use super::config::*;
    use std::path::PathBuf;

    /// Path of the optional config file, if the platform has a config directory
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}

/// Formatting helpers for movie cards
pub mod display {
    /// Formats a vote average with one decimal, or "N/A" when absent or zero
    pub fn format_rating(vote_average: Option<f64>) -> String {
        match vote_average {
            Some(rating) if rating > 0.0 => format!("{:.1}", rating),
            _ => "N/A".to_string(),
        }
    }

    /// Extracts the year from a `YYYY-MM-DD` release date
    pub fn release_year(release_date: Option<&str>) -> String {
        release_date
            .and_then(|date| date.split('-').next())
            .filter(|year| !year.is_empty())
            .unwrap_or("N/A")
            .to_string()
    }

    /// Displays a language code in upper case, or "N/A"
    pub fn format_language(language: Option<&str>) -> String {
        match language {
            Some(lang) if !lang.is_empty() => lang.to_uppercase(),
            _ => "N/A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::display::*;
    use super::file_utils::*;

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(Some(7.456)), "7.5");
        assert_eq!(format_rating(Some(0.0)), "N/A");
        assert_eq!(format_rating(None), "N/A");
    }

    #[test]
    fn test_release_year() {
        assert_eq!(release_year(Some("2008-07-16")), "2008");
        assert_eq!(release_year(Some("")), "N/A");
        assert_eq!(release_year(None), "N/A");
    }

    #[test]
    fn test_format_language() {
        assert_eq!(format_language(Some("en")), "EN");
        assert_eq!(format_language(Some("")), "N/A");
        assert_eq!(format_language(None), "N/A");
    }

    #[test]
    fn test_config_file_path() {
        // Might be None in CI environments without a home directory
        if let Some(path) = config_file_path() {
            assert!(path.ends_with("movie-finder/config.json"));
        }
    }
}
