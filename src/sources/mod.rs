//! Document source abstraction
//!
//! The pagination loop in `ingestor` only needs one operation from the
//! remote store: fetch a bounded page of job documents at an offset. The
//! trait keeps the loop testable against an in-memory source.

use async_trait::async_trait;

use crate::errors::SourceError;
use crate::models::DocumentPage;

pub mod appwrite;

pub use appwrite::AppwriteSource;

#[async_trait]
pub trait JobSource {
    /// Fetch one page of job documents starting at `offset`, returning at
    /// most `limit` records. An empty page signals end of collection.
    async fn fetch_page(&self, offset: u64, limit: u64) -> Result<DocumentPage, SourceError>;
}
