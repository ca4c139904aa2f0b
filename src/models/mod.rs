use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::datetime::DateTimeParser;

/// A job posting document as returned by the remote document store.
///
/// Only the fields the sitemap cares about are deserialized; everything else
/// in the payload is ignored. The `$`-prefixed wire names are the store's
/// system attributes; plain aliases are accepted for fixtures and tests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobDocument {
    #[serde(rename = "$id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(rename = "$createdAt", alias = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "$updatedAt", alias = "updatedAt", default)]
    pub updated_at: Option<String>,
}

impl JobDocument {
    /// The slug to publish, if this document is valid for sitemap inclusion.
    ///
    /// A document without a slug (or with an empty one) must never produce
    /// a URL entry.
    pub fn listable_slug(&self) -> Option<&str> {
        self.slug.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Freshness timestamp for this document: `updated_at` preferred,
    /// falling back to `created_at`, falling back to the run's fetch time.
    pub fn last_modified(&self, fallback: DateTime<Utc>) -> DateTime<Utc> {
        self.updated_at
            .as_deref()
            .or(self.created_at.as_deref())
            .and_then(|raw| DateTimeParser::parse_flexible(raw).ok())
            .unwrap_or(fallback)
    }
}

/// One page of documents from the store's listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentPage {
    /// Server-reported collection total, used only for progress logging
    #[serde(default)]
    pub total: Option<u64>,
    pub documents: Vec<JobDocument>,
}

/// Standard sitemap change frequency tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

impl std::fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A static page included in every sitemap, independent of fetched data.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticPageEntry {
    /// URL suffix relative to the site base; empty for the root page
    pub path: String,
    pub change_frequency: ChangeFrequency,
    pub priority: f64,
}

impl StaticPageEntry {
    pub fn new<S: Into<String>>(path: S, change_frequency: ChangeFrequency, priority: f64) -> Self {
        Self {
            path: path.into(),
            change_frequency,
            priority,
        }
    }
}

/// A single `<url>` element of the rendered sitemap.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    /// Absolute URL; escaped for XML at serialization time
    pub location: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f64,
}

/// Summary of one generation run, written alongside the sitemap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RunMetadata {
    pub static_pages: usize,
    /// Fetched documents that carried a publishable slug
    pub valid_jobs: usize,
    /// All fetched documents, regardless of validity
    pub total_jobs: usize,
    pub total_urls: usize,
    pub generated_at: DateTime<Utc>,
    pub sitemap_bytes: u64,
}

/// The rendered sitemap document plus its run metadata.
#[derive(Debug, Clone)]
pub struct GeneratedSitemap {
    pub xml: String,
    pub metadata: RunMetadata,
}
