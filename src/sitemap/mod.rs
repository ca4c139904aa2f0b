//! Sitemap rendering and artifact output

use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::AppResult;
use crate::models::GeneratedSitemap;

pub mod generator;

pub use generator::SitemapGenerator;

/// Output file name for the sitemap document.
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// Output file name for the run metadata summary.
pub const METADATA_FILE: &str = "sitemap-metadata.json";

/// Writes the generated artifacts into the output directory, overwriting
/// any previous run's files.
pub struct SitemapWriter {
    output_dir: PathBuf,
}

impl SitemapWriter {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Persist `sitemap.xml` and the metadata JSON, creating the output
    /// directory if absent. Returns the sitemap path.
    pub fn save(&self, sitemap: &GeneratedSitemap) -> AppResult<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;

        let sitemap_path = self.output_dir.join(SITEMAP_FILE);
        std::fs::write(&sitemap_path, &sitemap.xml)?;

        let metadata_path = self.output_dir.join(METADATA_FILE);
        let mut json = serde_json::to_string_pretty(&sitemap.metadata)?;
        json.push('\n');
        std::fs::write(&metadata_path, json)?;

        info!(
            "Wrote {} ({} bytes) and {}",
            sitemap_path.display(),
            sitemap.metadata.sitemap_bytes,
            metadata_path.display()
        );

        Ok(sitemap_path)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
