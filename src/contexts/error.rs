use thiserror::Error;

/// Errors raised while resolving the application configuration
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// A required setting was found in no source
    #[error("Missing configuration value: {0} is not set")]
    Missing(&'static str),
    /// The config file exists but could not be read
    #[error("Failed to read config file {path}: {reason}")]
    Io { path: String, reason: String },
    /// The config file is not valid JSON for the expected shape
    #[error("Invalid config file {path}: {reason}")]
    InvalidFile { path: String, reason: String },
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors returned by the movie catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),
    /// The API answered with a non-success status
    #[error("Catalog returned HTTP {0}")]
    Status(u16),
    /// The body could not be decoded as a result page
    #[error("Failed to decode catalog response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            CatalogError::Status(status.as_u16())
        } else {
            CatalogError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Decode(err.to_string())
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors returned by the hosted search-count store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Store returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to decode store response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else {
            StoreError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::Missing("TMDB_API_KEY").to_string(),
            "Missing configuration value: TMDB_API_KEY is not set"
        );
        assert_eq!(CatalogError::Status(401).to_string(), "Catalog returned HTTP 401");

        let err = StoreError::Status { status: 404, message: "Collection not found".to_string() };
        assert_eq!(err.to_string(), "Store returned HTTP 404: Collection not found");
    }

    #[test]
    fn test_json_errors_become_decode_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(CatalogError::from(json_err), CatalogError::Decode(_)));
    }
}
