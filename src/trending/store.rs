use async_trait::async_trait;
use dioxus::logger::tracing;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::query::{query_params, DocumentQuery};
use super::types::{CountUpdate, DocumentList, NewSearchCount, TrendingMovie};
use crate::contexts::{AppwriteConfig, StoreError, StoreResult};
use crate::tmdb::Movie;

const SEARCH_TERM_FIELD: &str = "searchTerm";
const COUNT_FIELD: &str = "count";

/// The hosted collection that counts searches and ranks them.
#[async_trait]
pub trait TrendingStore: Send + Sync + std::fmt::Debug {
    /// Most searched entries, highest count first.
    async fn top_searches(&self, limit: usize) -> StoreResult<Vec<TrendingMovie>>;

    /// Bump the counter for `term`, creating it with `movie` as its poster when new.
    async fn record_search(&self, term: &str, movie: &Movie) -> StoreResult<CountUpdate>;
}

/// The write needed to count one more search
#[derive(Debug, Clone, PartialEq)]
pub enum CountWrite {
    Create(NewSearchCount),
    Update { document_id: String, count: u64 },
}

/// Decides between creating a new counter document and bumping the existing one
pub fn plan_count_write(
    existing: Option<&TrendingMovie>,
    term: &str,
    movie: &Movie,
    image_base_url: &str,
) -> CountWrite {
    match existing {
        Some(doc) => CountWrite::Update {
            document_id: doc.id.clone(),
            count: doc.count + 1,
        },
        None => CountWrite::Create(NewSearchCount {
            search_term: term.to_string(),
            count: 1,
            movie_id: movie.id,
            poster_url: movie.poster_url(image_base_url),
        }),
    }
}

/// Appwrite Databases REST client scoped to one collection
#[derive(Debug, Clone)]
pub struct AppwriteStore {
    client: reqwest::Client,
    config: AppwriteConfig,
    image_base_url: String,
}

impl AppwriteStore {
    pub fn new(config: &AppwriteConfig, image_base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), config, image_base_url)
    }

    pub fn with_client(client: reqwest::Client, config: &AppwriteConfig, image_base_url: &str) -> Self {
        Self {
            client,
            config: config.clone(),
            image_base_url: image_base_url.to_string(),
        }
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.config.endpoint, self.config.database_id, self.config.collection_id
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request
            .header("X-Appwrite-Project", &self.config.project_id)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        match &self.config.api_key {
            Some(key) => request.header("X-Appwrite-Key", key),
            None => request,
        }
    }

    async fn list(&self, queries: &[DocumentQuery]) -> StoreResult<Vec<TrendingMovie>> {
        let request = self.client.get(self.documents_url()).query(&query_params(queries));
        let list: DocumentList<TrendingMovie> = send(self.authorize(request)).await?;
        Ok(list.documents)
    }
}

/// Sends the request and decodes a success body, turning error statuses into `StoreError::Status`
async fn send<T: DeserializeOwned>(request: RequestBuilder) -> StoreResult<T> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        // Appwrite error bodies carry a human readable `message`
        let message = serde_json::from_slice::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
        return Err(StoreError::Status { status: status.as_u16(), message });
    }

    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl TrendingStore for AppwriteStore {
    async fn top_searches(&self, limit: usize) -> StoreResult<Vec<TrendingMovie>> {
        self.list(&[DocumentQuery::limit(limit), DocumentQuery::order_desc(COUNT_FIELD)])
            .await
    }

    async fn record_search(&self, term: &str, movie: &Movie) -> StoreResult<CountUpdate> {
        let existing = self
            .list(&[DocumentQuery::equal(SEARCH_TERM_FIELD, term)])
            .await?;

        match plan_count_write(existing.first(), term, movie, &self.image_base_url) {
            CountWrite::Create(doc) => {
                tracing::debug!("Creating search count for '{}'", term);
                let request = self
                    .client
                    .post(self.documents_url())
                    .json(&json!({ "documentId": "unique()", "data": doc }));
                send::<serde_json::Value>(self.authorize(request)).await?;
                Ok(CountUpdate::Created)
            }
            CountWrite::Update { document_id, count } => {
                tracing::debug!("Incrementing search count for '{}' to {}", term, count);
                let request = self
                    .client
                    .patch(format!("{}/{}", self.documents_url(), document_id))
                    .json(&json!({ "data": { "count": count } }));
                send::<serde_json::Value>(self.authorize(request)).await?;
                Ok(CountUpdate::Incremented { count })
            }
        }
    }
}
