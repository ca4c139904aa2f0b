use std::path::PathBuf;

use url::Url;

use crate::errors::{AppError, AppResult};
use crate::utils::sanitize_base_url;

pub mod pages;

/// Default output directory when `SITEMAP_OUTPUT_DIR` is not set.
const DEFAULT_OUTPUT_DIR: &str = "./public";

#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreConfig,
    pub site: SiteConfig,
    pub output: OutputConfig,
}

/// Connection parameters for the remote document store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// REST endpoint, trailing slash stripped
    pub endpoint: String,
    pub project_id: String,
    pub api_key: String,
    pub database_id: String,
    pub collection_id: String,
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Public site prefix for every generated URL, trailing slash stripped
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl Config {
    /// Load configuration from process environment variables.
    ///
    /// Fails fast with a configuration error naming the first missing
    /// variable, before any network call is attempted.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(&|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> AppResult<Self> {
        let endpoint = required(lookup, "APPWRITE_ENDPOINT")?;
        let endpoint = endpoint.trim_end_matches('/').to_string();
        validate_url("APPWRITE_ENDPOINT", &endpoint)?;

        let store = StoreConfig {
            endpoint,
            project_id: required(lookup, "APPWRITE_PROJECT_ID")?,
            api_key: required(lookup, "APPWRITE_API_KEY")?,
            database_id: required(lookup, "APPWRITE_DATABASE_ID")?,
            collection_id: required(lookup, "APPWRITE_COLLECTION_ID")?,
        };

        let base_url = sanitize_base_url(&required(lookup, "SITE_BASE_URL")?);
        validate_url("SITE_BASE_URL", &base_url)?;

        let dir = lookup("SITEMAP_OUTPUT_DIR")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        Ok(Self {
            store,
            site: SiteConfig { base_url },
            output: OutputConfig { dir },
        })
    }
}

fn required(lookup: &dyn Fn(&str) -> Option<String>, name: &str) -> AppResult<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            AppError::configuration(format!("missing required environment variable {}", name))
        })
}

fn validate_url(name: &str, value: &str) -> AppResult<()> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| AppError::configuration(format!("{} is not a valid URL ({}): {}", name, value, e)))
}
