use async_trait::async_trait;
use dioxus::logger::tracing;
use reqwest::header::{ACCEPT, AUTHORIZATION};

use super::types::MoviePage;
use crate::contexts::{CatalogError, CatalogResult, TmdbConfig};

/// What to ask the catalog for
#[derive(Clone, Debug, PartialEq)]
pub enum MovieQuery {
    /// Popular movies, used while the search box is empty
    Discover { page: u32 },
    /// Free-text title search
    Search { text: String, page: u32 },
}

impl MovieQuery {
    /// Builds the query for a committed search text. Empty text means discover.
    pub fn new(text: &str, page: u32) -> Self {
        if text.is_empty() {
            MovieQuery::Discover { page }
        } else {
            MovieQuery::Search { text: text.to_string(), page }
        }
    }

    /// Full request URL below `base_url`
    pub fn url(&self, base_url: &str) -> String {
        match self {
            MovieQuery::Discover { page } => {
                format!("{}/discover/movie?sort_by=popularity.desc&page={}", base_url, page)
            }
            MovieQuery::Search { text, page } => format!(
                "{}/search/movie?query={}&page={}",
                base_url,
                urlencoding::encode(text),
                page
            ),
        }
    }
}

/// A source of movie result pages.
#[async_trait]
pub trait MovieCatalog: Send + Sync + std::fmt::Debug {
    /// Fetch one page of results.
    ///
    /// # Errors
    /// - `CatalogError::Network` - the request could not be sent
    /// - `CatalogError::Status` - the API answered with a non-success status
    /// - `CatalogError::Decode` - the body is not a result page
    async fn fetch_page(&self, query: &MovieQuery) -> CatalogResult<MoviePage>;
}

/// TMDB v3 client authenticated with a bearer token
#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Shares an existing HTTP client
    pub fn with_client(client: reqwest::Client, config: &TmdbConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            api_token: config.api_token.clone(),
        }
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn fetch_page(&self, query: &MovieQuery) -> CatalogResult<MoviePage> {
        let url = query.url(&self.base_url);
        tracing::debug!("Fetching movies from {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_token))
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
