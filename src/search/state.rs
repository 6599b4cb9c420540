use super::service::SearchOutcome;
use crate::contexts::StoreResult;
use crate::tmdb::Movie;
use crate::trending::TrendingMovie;
use crate::utils::config;

/// Current results page, never below 1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    current: u32,
}

impl Default for Pager {
    fn default() -> Self {
        Self { current: 1 }
    }
}

impl Pager {
    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 1
    }

    pub fn next(&mut self) {
        self.current = self.current.saturating_add(1);
    }

    /// Steps back one page. Does nothing on the first page.
    pub fn previous(&mut self) {
        if self.can_go_back() {
            self.current -= 1;
        }
    }
}

/// Identifies one issued search request
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Everything the "All Movies" section renders
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchPanel {
    pub movies: Vec<Movie>,
    pub error: Option<String>,
    pub loading: bool,
    latest: u64,
}

impl SearchPanel {
    /// Marks a new request in flight and hands out its ticket
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        self.loading = true;
        self.error = None;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Applies a finished request. Responses to superseded tickets are dropped
    /// and `false` is returned.
    pub fn finish(&mut self, ticket: Ticket, outcome: &SearchOutcome) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.loading = false;
        match outcome {
            SearchOutcome::Movies(movies) => {
                self.movies = movies.clone();
                self.error = None;
            }
            SearchOutcome::NoResults => {
                self.movies.clear();
                self.error = Some(config::NO_RESULTS_MESSAGE.to_string());
            }
            // The previous list is kept; the view shows the error instead of it
            SearchOutcome::Failed(_) => {
                self.error = Some(config::SEARCH_ERROR_MESSAGE.to_string());
            }
        }
        true
    }
}

/// Everything the "Trending Movies" section renders
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrendingPanel {
    pub entries: Vec<TrendingMovie>,
    pub error: Option<String>,
    pub loading: bool,
}

impl TrendingPanel {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish(&mut self, result: StoreResult<Vec<TrendingMovie>>) {
        self.loading = false;
        match result {
            Ok(entries) => self.entries = entries,
            Err(_) => self.error = Some(config::TRENDING_ERROR_MESSAGE.to_string()),
        }
    }

    /// The section stays hidden until there is something to show
    pub fn is_visible(&self) -> bool {
        self.loading || self.error.is_some() || !self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contexts::{CatalogError, StoreError};

    fn movie(id: u64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            poster_path: None,
            vote_average: None,
            original_language: None,
            release_date: None,
        }
    }

    #[test]
    fn test_pager_previous_disabled_on_first_page() {
        let mut pager = Pager::default();
        assert_eq!(pager.current(), 1);
        assert!(!pager.can_go_back());

        pager.previous();
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn test_pager_next_and_previous() {
        let mut pager = Pager::default();
        pager.next();
        pager.next();
        assert_eq!(pager.current(), 3);
        assert!(pager.can_go_back());

        pager.previous();
        assert_eq!(pager.current(), 2);
    }

    #[test]
    fn test_begin_sets_loading_and_clears_error() {
        let mut panel = SearchPanel {
            error: Some("old".to_string()),
            ..Default::default()
        };
        let ticket = panel.begin();
        assert!(panel.loading);
        assert!(panel.error.is_none());
        assert!(panel.is_current(ticket));
    }

    #[test]
    fn test_movies_replace_list() {
        let mut panel = SearchPanel::default();
        let ticket = panel.begin();
        assert!(panel.finish(ticket, &SearchOutcome::Movies(vec![movie(1, "Alien")])));
        assert_eq!(panel.movies.len(), 1);

        let ticket = panel.begin();
        panel.finish(ticket, &SearchOutcome::Movies(vec![movie(2, "Aliens"), movie(3, "Alien 3")]));
        assert_eq!(panel.movies.iter().map(|m| m.id).collect::<Vec<_>>(), vec![2, 3]);
        assert!(!panel.loading);
    }

    #[test]
    fn test_empty_results_show_no_error() {
        let mut panel = SearchPanel::default();
        let ticket = panel.begin();
        panel.finish(ticket, &SearchOutcome::Movies(Vec::new()));
        assert!(panel.movies.is_empty());
        assert!(panel.error.is_none());
    }

    #[test]
    fn test_missing_results_clear_list() {
        let mut panel = SearchPanel::default();
        let ticket = panel.begin();
        panel.finish(ticket, &SearchOutcome::Movies(vec![movie(1, "Alien")]));

        let ticket = panel.begin();
        panel.finish(ticket, &SearchOutcome::NoResults);
        assert!(panel.movies.is_empty());
        assert_eq!(panel.error.as_deref(), Some("No movies found"));
    }

    #[test]
    fn test_failure_keeps_previous_list() {
        let mut panel = SearchPanel::default();
        let ticket = panel.begin();
        panel.finish(ticket, &SearchOutcome::Movies(vec![movie(1, "Alien")]));

        let ticket = panel.begin();
        panel.finish(ticket, &SearchOutcome::Failed(CatalogError::Status(500)));
        assert_eq!(panel.movies.len(), 1);
        assert_eq!(
            panel.error.as_deref(),
            Some("Error fetching movie from server please try again!")
        );
        assert!(!panel.loading);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut panel = SearchPanel::default();
        let slow = panel.begin();
        let fast = panel.begin();

        assert!(panel.finish(fast, &SearchOutcome::Movies(vec![movie(2, "Batman")])));
        assert!(!panel.finish(slow, &SearchOutcome::Movies(vec![movie(1, "Bat")])));
        assert_eq!(panel.movies[0].title, "Batman");
    }

    #[test]
    fn test_stale_response_leaves_loading_for_latest() {
        let mut panel = SearchPanel::default();
        let slow = panel.begin();
        let _pending = panel.begin();

        panel.finish(slow, &SearchOutcome::NoResults);
        assert!(panel.loading);
        assert!(panel.error.is_none());
    }

    #[test]
    fn test_trending_panel() {
        let mut panel = TrendingPanel::default();
        assert!(!panel.is_visible());

        panel.begin();
        assert!(panel.is_visible());

        panel.finish(Err(StoreError::Network("offline".to_string())));
        assert!(!panel.loading);
        assert_eq!(
            panel.error.as_deref(),
            Some("Error fetching movie from server please try again!")
        );
        assert!(panel.is_visible());
    }

    #[test]
    fn test_trending_panel_success() {
        let mut panel = TrendingPanel::default();
        panel.begin();
        panel.finish(Ok(vec![TrendingMovie {
            id: "a".to_string(),
            search_term: "batman".to_string(),
            count: 3,
            movie_id: Some(268),
            poster_url: None,
        }]));
        assert_eq!(panel.entries.len(), 1);
        assert!(panel.error.is_none());
    }
}
