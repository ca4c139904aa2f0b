//! Job document ingestion
//!
//! Drains the remote store's listing endpoint page by page and accumulates
//! every job document exactly once. Offset pagination against a live,
//! mutating collection can drift — records inserted or deleted between
//! pages shift the window, so pages may overlap or repeat near the end.
//! The loop tolerates that with dedup-by-id and a consecutive-stale-page
//! counter instead of expecting transactional consistency from the store.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::errors::SourceError;
use crate::models::JobDocument;
use crate::sources::JobSource;

/// Records requested per page; the store's practical per-request maximum.
pub const PAGE_SIZE: u64 = 100;

/// Ceiling on accumulated records.
pub const MAX_RECORDS: usize = 100_000;

/// Ceiling on the pagination offset.
pub const MAX_OFFSET: u64 = 200_000;

/// Consecutive pages with zero new records before the loop gives up.
pub const MAX_STALE_PAGES: u32 = 3;

/// Paginating fetcher over any `JobSource`
pub struct JobIngestor<S: JobSource> {
    source: S,
}

impl<S: JobSource> JobIngestor<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch the complete, deduplicated collection of job documents.
    ///
    /// Requests are strictly sequential; each offset depends on the size of
    /// the previous page. Termination: an empty page, `MAX_STALE_PAGES`
    /// consecutive pages contributing nothing new, or a safety ceiling.
    /// Ceilings terminate with a warning and keep the partial result; any
    /// source error aborts the whole fetch.
    pub async fn fetch_all(&self) -> Result<Vec<JobDocument>, SourceError> {
        let mut documents: Vec<JobDocument> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut offset: u64 = 0;
        let mut stale_pages: u32 = 0;
        let mut reported_total: Option<u64> = None;

        loop {
            let page = self.source.fetch_page(offset, PAGE_SIZE).await?;
            let returned = page.documents.len();

            if reported_total.is_none() {
                reported_total = page.total;
                if let Some(total) = reported_total {
                    debug!("Store reports {} documents in collection", total);
                }
            }

            if returned == 0 {
                break;
            }

            let mut added = 0usize;
            for document in page.documents {
                if seen.insert(document.id.clone()) {
                    documents.push(document);
                    added += 1;
                }
            }

            // Advance by what the store returned, not what we kept, so the
            // same window is never re-requested.
            offset += returned as u64;

            debug!(
                "Page at offset {}: returned={} new={} accumulated={}",
                offset - returned as u64,
                returned,
                added,
                documents.len()
            );

            if added == 0 {
                stale_pages += 1;
                if stale_pages >= MAX_STALE_PAGES {
                    warn!(
                        "Terminating fetch: {} consecutive pages contributed no new documents (unstable pagination window)",
                        stale_pages
                    );
                    break;
                }
            } else {
                stale_pages = 0;
            }

            if documents.len() >= MAX_RECORDS {
                warn!(
                    "Terminating fetch: accumulated record ceiling reached ({}); treating partial result as final",
                    MAX_RECORDS
                );
                break;
            }

            if offset >= MAX_OFFSET {
                warn!(
                    "Terminating fetch: offset ceiling reached ({}); treating partial result as final",
                    MAX_OFFSET
                );
                break;
            }
        }

        info!(
            "Fetched {} unique job documents{}",
            documents.len(),
            reported_total
                .map(|t| format!(" (store reported {})", t))
                .unwrap_or_default()
        );

        Ok(documents)
    }
}
