use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::{Arc, Mutex};

use sitemap_generator::errors::SourceError;
use sitemap_generator::ingestor::JobIngestor;
use sitemap_generator::models::{DocumentPage, JobDocument};
use sitemap_generator::sitemap::SitemapGenerator;
use sitemap_generator::sources::JobSource;

fn job(id: &str, slug: Option<&str>) -> JobDocument {
    JobDocument {
        id: id.to_string(),
        slug: slug.map(str::to_string),
        created_at: Some("2024-01-01T00:00:00Z".to_string()),
        updated_at: None,
    }
}

/// In-memory store that serves a fixed collection through offset windows,
/// the way a well-behaved listing endpoint would.
struct InMemoryStore {
    collection: Vec<JobDocument>,
    requests: Arc<Mutex<Vec<u64>>>,
}

impl InMemoryStore {
    fn new(collection: Vec<JobDocument>) -> Self {
        Self {
            collection,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn request_log(&self) -> Arc<Mutex<Vec<u64>>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl JobSource for InMemoryStore {
    async fn fetch_page(&self, offset: u64, limit: u64) -> Result<DocumentPage, SourceError> {
        self.requests.lock().unwrap().push(offset);
        let start = (offset as usize).min(self.collection.len());
        let end = (start + limit as usize).min(self.collection.len());
        Ok(DocumentPage {
            total: Some(self.collection.len() as u64),
            documents: self.collection[start..end].to_vec(),
        })
    }
}

#[tokio::test]
async fn drains_a_multi_page_collection_sequentially() {
    let collection: Vec<JobDocument> = (0..250)
        .map(|n| job(&format!("id-{}", n), Some(&format!("role-{}", n))))
        .collect();
    let store = InMemoryStore::new(collection);
    let ingestor = JobIngestor::new(store);

    let documents = ingestor.fetch_all().await.unwrap();

    assert_eq!(documents.len(), 250);
    // Fetch order preserved
    assert_eq!(documents[0].id, "id-0");
    assert_eq!(documents[249].id, "id-249");
}

#[tokio::test]
async fn offsets_advance_by_returned_page_size() {
    let collection: Vec<JobDocument> = (0..250)
        .map(|n| job(&format!("id-{}", n), Some(&format!("role-{}", n))))
        .collect();
    let store = InMemoryStore::new(collection);
    let request_log = store.request_log();
    let ingestor = JobIngestor::new(store);

    ingestor.fetch_all().await.unwrap();

    // 100-record pages at 0 and 100, a short page at 200, then the empty
    // request at 250 that terminates the loop
    assert_eq!(*request_log.lock().unwrap(), vec![0, 100, 200, 250]);
}

#[tokio::test]
async fn fetched_documents_flow_into_the_rendered_sitemap() {
    let collection = vec![
        job("a", Some("senior-engineer")),
        job("b", None),
        job("c", Some("product-designer")),
    ];
    let store = InMemoryStore::new(collection);
    let ingestor = JobIngestor::new(store);

    let documents = ingestor.fetch_all().await.unwrap();
    assert_eq!(documents.len(), 3);

    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let generator = SitemapGenerator::new("https://jobs.example.com");
    let sitemap = generator.generate(&[], &documents, now);

    assert_eq!(sitemap.metadata.total_jobs, 3);
    assert_eq!(sitemap.metadata.valid_jobs, 2);
    assert!(sitemap
        .xml
        .contains("<loc>https://jobs.example.com/jobs/senior-engineer</loc>"));
    assert!(sitemap
        .xml
        .contains("<loc>https://jobs.example.com/jobs/product-designer</loc>"));
}
