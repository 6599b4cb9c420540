//! Search and trending orchestration
//!
//! Ties the movie catalog and the search-count store together the way the
//! page uses them: one catalog request per committed query, an optional
//! counter update for real searches, and a one-off trending read.

use dioxus::logger::tracing;
use std::sync::Arc;

use crate::contexts::{AppConfig, CatalogError, StoreError, StoreResult};
use crate::tmdb::{Movie, MovieCatalog, MovieQuery, TmdbClient};
use crate::trending::{AppwriteStore, CountUpdate, TrendingMovie, TrendingStore};
use crate::utils::config;

/// Result of one catalog request as the page sees it
#[derive(Debug)]
pub enum SearchOutcome {
    /// The response carried a results list, possibly empty
    Movies(Vec<Movie>),
    /// The response had no results field at all
    NoResults,
    Failed(CatalogError),
}

impl SearchOutcome {
    /// The movie to count against `query`: the top hit of a non-empty search
    pub fn counter_candidate(&self, query: &str) -> Option<&Movie> {
        match self {
            SearchOutcome::Movies(movies) if !query.is_empty() => movies.first(),
            _ => None,
        }
    }
}

/// Result of the counter side call. Only ever logged.
#[derive(Debug)]
pub enum CounterOutcome {
    Recorded(CountUpdate),
    Failed(StoreError),
}

/// Movie search service shared by the page's effects
#[derive(Debug, Clone)]
pub struct SearchService {
    catalog: Arc<dyn MovieCatalog>,
    store: Arc<dyn TrendingStore>,
}

impl PartialEq for SearchService {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.catalog, &other.catalog) && Arc::ptr_eq(&self.store, &other.store)
    }
}

impl SearchService {
    pub fn new(catalog: Arc<dyn MovieCatalog>, store: Arc<dyn TrendingStore>) -> Self {
        Self { catalog, store }
    }

    /// Builds the TMDB and Appwrite clients over one shared HTTP client
    pub fn from_config(app: &AppConfig) -> Self {
        let http = reqwest::Client::new();
        let catalog = TmdbClient::with_client(http.clone(), &app.tmdb);
        let store = AppwriteStore::with_client(http, &app.appwrite, &app.tmdb.image_base_url);
        Self::new(Arc::new(catalog), Arc::new(store))
    }

    /// Fetch one page for the committed query. Empty text lists popular movies.
    pub async fn search(&self, query: &str, page: u32) -> SearchOutcome {
        match self.catalog.fetch_page(&MovieQuery::new(query, page)).await {
            Ok(result) => match result.results {
                Some(movies) => SearchOutcome::Movies(movies),
                None => {
                    tracing::warn!("Catalog response for '{}' page {} had no results field", query, page);
                    SearchOutcome::NoResults
                }
            },
            Err(e) => {
                tracing::error!("Failed to fetch movies for '{}' page {}: {}", query, page, e);
                SearchOutcome::Failed(e)
            }
        }
    }

    /// Count a search against its top result. Never fails; the outcome is logged.
    pub async fn record_search(&self, query: &str, movie: &Movie) -> CounterOutcome {
        match self.store.record_search(query, movie).await {
            Ok(update) => {
                tracing::debug!("Recorded search '{}': {:?}", query, update);
                CounterOutcome::Recorded(update)
            }
            Err(e) => {
                tracing::warn!("Failed to record search '{}': {}", query, e);
                CounterOutcome::Failed(e)
            }
        }
    }

    /// Most searched entries for the trending section
    pub async fn trending(&self) -> StoreResult<Vec<TrendingMovie>> {
        let result = self.store.top_searches(config::TRENDING_LIMIT).await;
        if let Err(e) = &result {
            tracing::error!("Error fetching trending movies: {}", e);
        }
        result
    }
}
