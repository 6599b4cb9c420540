use serde_json::{json, Value};

/// A single Appwrite list filter, serialized as the JSON string the REST API expects
#[derive(Clone, Debug, PartialEq)]
pub enum DocumentQuery {
    Equal { attribute: String, value: Value },
    OrderDesc { attribute: String },
    Limit(usize),
}

impl DocumentQuery {
    pub fn equal(attribute: &str, value: impl Into<Value>) -> Self {
        DocumentQuery::Equal { attribute: attribute.to_string(), value: value.into() }
    }

    pub fn order_desc(attribute: &str) -> Self {
        DocumentQuery::OrderDesc { attribute: attribute.to_string() }
    }

    pub fn limit(limit: usize) -> Self {
        DocumentQuery::Limit(limit)
    }

    pub fn to_json(&self) -> String {
        let value = match self {
            DocumentQuery::Equal { attribute, value } => {
                json!({ "method": "equal", "attribute": attribute, "values": [value] })
            }
            DocumentQuery::OrderDesc { attribute } => {
                json!({ "method": "orderDesc", "attribute": attribute })
            }
            DocumentQuery::Limit(limit) => json!({ "method": "limit", "values": [limit] }),
        };
        value.to_string()
    }
}

/// Query-string pairs for a list request
pub fn query_params(queries: &[DocumentQuery]) -> Vec<(&'static str, String)> {
    queries.iter().map(|q| ("queries[]", q.to_json())).collect()
}
