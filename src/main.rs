use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sitemap_generator::{
    config::{pages, Config},
    errors::AppError,
    ingestor::JobIngestor,
    sitemap::{SitemapGenerator, SitemapWriter},
    sources::AppwriteSource,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env for local runs; real deployments set the environment
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sitemap_generator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting sitemap generator v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!(
        "Using document store {} (collection {})",
        config.store.endpoint, config.store.collection_id
    );

    let source = AppwriteSource::new(config.store.clone());
    let ingestor = JobIngestor::new(source);
    let jobs = ingestor.fetch_all().await.map_err(AppError::from)?;

    if jobs.is_empty() {
        return Err(AppError::EmptyFetch.into());
    }

    let static_pages = pages::static_pages();
    let now = chrono::Utc::now();

    let generator = SitemapGenerator::new(config.site.base_url.clone());
    let sitemap = generator.generate(&static_pages, &jobs, now);

    let writer = SitemapWriter::new(config.output.dir.clone());
    let sitemap_path = writer.save(&sitemap)?;

    info!(
        "Sitemap generated: {} urls ({} static, {} jobs of {} fetched), {} bytes at {}",
        sitemap.metadata.total_urls,
        sitemap.metadata.static_pages,
        sitemap.metadata.valid_jobs,
        sitemap.metadata.total_jobs,
        sitemap.metadata.sitemap_bytes,
        sitemap_path.display()
    );

    Ok(())
}
