use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::error::{ConfigError, ConfigResult};
use crate::utils::{config, file_utils};

/// Settings for the TMDB catalog
#[derive(Clone, Debug, PartialEq)]
pub struct TmdbConfig {
    pub base_url: String,
    pub api_token: String,
    pub image_base_url: String,
}

/// Settings for the Appwrite collection holding search counts
#[derive(Clone, Debug, PartialEq)]
pub struct AppwriteConfig {
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    pub collection_id: String,
    pub api_key: Option<String>,
}

/// Everything the app needs to reach its two backends
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub tmdb: TmdbConfig,
    pub appwrite: AppwriteConfig,
}

/// Shape of the optional JSON config file. Every key may be omitted.
#[derive(Deserialize, Default, Debug, Clone)]
#[serde(default)]
pub struct ConfigFile {
    pub tmdb_api_key: Option<String>,
    pub tmdb_base_url: Option<String>,
    pub tmdb_image_base_url: Option<String>,
    pub appwrite_endpoint: Option<String>,
    pub appwrite_project_id: Option<String>,
    pub appwrite_database_id: Option<String>,
    pub appwrite_collection_id: Option<String>,
    pub appwrite_api_key: Option<String>,
}

impl ConfigFile {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            "TMDB_API_KEY" => self.tmdb_api_key.clone(),
            "TMDB_BASE_URL" => self.tmdb_base_url.clone(),
            "TMDB_IMAGE_BASE_URL" => self.tmdb_image_base_url.clone(),
            "APPWRITE_ENDPOINT" => self.appwrite_endpoint.clone(),
            "APPWRITE_PROJECT_ID" => self.appwrite_project_id.clone(),
            "APPWRITE_DATABASE_ID" => self.appwrite_database_id.clone(),
            "APPWRITE_COLLECTION_ID" => self.appwrite_collection_id.clone(),
            "APPWRITE_API_KEY" => self.appwrite_api_key.clone(),
            _ => None,
        }
    }

    /// Reads the config file at `path`. A missing file is an empty config.
    pub fn read(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Values baked in at compile time, the counterpart of a web bundler's env injection
fn build_time_value(key: &str) -> Option<String> {
    let value = match key {
        "TMDB_API_KEY" => option_env!("TMDB_API_KEY"),
        "APPWRITE_PROJECT_ID" => option_env!("APPWRITE_PROJECT_ID"),
        "APPWRITE_DATABASE_ID" => option_env!("APPWRITE_DATABASE_ID"),
        "APPWRITE_COLLECTION_ID" => option_env!("APPWRITE_COLLECTION_ID"),
        _ => None,
    };
    value.map(str::to_string)
}

impl AppConfig {
    /// Loads the configuration from the process environment, the config file
    /// and compile-time values, in that order of precedence.
    pub fn load() -> ConfigResult<Self> {
        let file = match file_utils::config_file_path() {
            Some(path) => ConfigFile::read(&path)?,
            None => ConfigFile::default(),
        };

        Self::resolve(|key| std::env::var(key).ok(), &file, build_time_value)
    }

    /// Resolves every key against the given sources. Empty strings count as unset.
    pub fn resolve(
        env: impl Fn(&str) -> Option<String>,
        file: &ConfigFile,
        build_time: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<Self> {
        let lookup = |key: &str| {
            env(key)
                .or_else(|| file.get(key))
                .or_else(|| build_time(key))
                .filter(|value| !value.trim().is_empty())
        };
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));
        let or_default = |key: &str, default: &str| {
            lookup(key)
                .unwrap_or_else(|| default.to_string())
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            tmdb: TmdbConfig {
                base_url: or_default("TMDB_BASE_URL", config::DEFAULT_TMDB_BASE_URL),
                api_token: required("TMDB_API_KEY")?,
                image_base_url: or_default("TMDB_IMAGE_BASE_URL", config::DEFAULT_IMAGE_BASE_URL),
            },
            appwrite: AppwriteConfig {
                endpoint: or_default("APPWRITE_ENDPOINT", config::DEFAULT_APPWRITE_ENDPOINT),
                project_id: required("APPWRITE_PROJECT_ID")?,
                database_id: required("APPWRITE_DATABASE_ID")?,
                collection_id: required("APPWRITE_COLLECTION_ID")?,
                api_key: lookup("APPWRITE_API_KEY"),
            },
        })
    }
}
