//! Appwrite document store source
//!
//! Concrete `JobSource` implementation over the store's REST listing
//! endpoint. Each call issues exactly one request; pagination policy lives
//! in the ingestor, not here. Failures are fatal to the whole run — there
//! is no retry and no partial-result fallback.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::StoreConfig;
use crate::errors::SourceError;
use crate::models::DocumentPage;
use crate::sources::JobSource;

/// Appwrite-backed job document source
pub struct AppwriteSource {
    client: Client,
    config: StoreConfig,
}

impl AppwriteSource {
    /// Create a new source over a validated store configuration
    pub fn new(config: StoreConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("sitemap-generator/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.config.endpoint, self.config.database_id, self.config.collection_id
        )
    }
}

#[async_trait]
impl JobSource for AppwriteSource {
    async fn fetch_page(&self, offset: u64, limit: u64) -> Result<DocumentPage, SourceError> {
        let url = self.documents_url();
        debug!("Requesting document page: offset={} limit={}", offset, limit);

        let response = self
            .client
            .get(&url)
            .header("X-Appwrite-Project", &self.config.project_id)
            .header("X-Appwrite-Key", &self.config.api_key)
            .query(&[
                ("queries[]", format!("limit({})", limit)),
                ("queries[]", format!("offset({})", offset)),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SourceError::Http {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<DocumentPage>()
            .await
            .map_err(|e| SourceError::Decode {
                message: e.to_string(),
            })
    }
}
