use serde::{Deserialize, Serialize};

/// A search-count document, one per distinct query text
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct TrendingMovie {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "searchTerm", default)]
    pub search_term: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub movie_id: Option<u64>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// Envelope of Appwrite's list-documents response
#[derive(Deserialize, Debug)]
pub struct DocumentList<T> {
    #[serde(default)]
    pub total: u64,
    pub documents: Vec<T>,
}

/// Fields written when a query is counted for the first time
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewSearchCount {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    pub count: u64,
    pub movie_id: u64,
    pub poster_url: Option<String>,
}

/// What recording a search did to the store
#[derive(Debug, Clone, PartialEq)]
pub enum CountUpdate {
    /// First time this query was recorded
    Created,
    /// Existing document bumped to the given count
    Incremented { count: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_document_list() {
        let body = r#"{
            "total": 2,
            "documents": [
                {"$id": "a1", "$collectionId": "metrics", "searchTerm": "batman", "count": 12,
                 "movie_id": 268, "poster_url": "https://image.tmdb.org/t/p/w500/b.jpg"},
                {"$id": "b2", "searchTerm": "alien", "count": 3}
            ]
        }"#;
        let list: DocumentList<TrendingMovie> = serde_json::from_str(body).unwrap();
        assert_eq!(list.total, 2);
        assert_eq!(list.documents[0].search_term, "batman");
        assert_eq!(list.documents[0].count, 12);
        assert_eq!(list.documents[1].poster_url, None);
    }

    #[test]
    fn test_encode_new_count() {
        let doc = NewSearchCount {
            search_term: "batman".to_string(),
            count: 1,
            movie_id: 268,
            poster_url: None,
        };
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["searchTerm"], "batman");
        assert_eq!(value["count"], 1);
        assert!(value["poster_url"].is_null());
    }
}
