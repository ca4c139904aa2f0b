//! Sitemap document generation
//!
//! Pure transformation of (static pages, job documents, now) into the
//! sitemap XML and its run metadata. No network, no filesystem, no clock
//! reads; identical input produces byte-identical output.

use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::escape::escape;

use crate::models::{
    ChangeFrequency, GeneratedSitemap, JobDocument, RunMetadata, StaticPageEntry, UrlEntry,
};

/// Change frequency assigned to job posting URLs.
const JOB_CHANGE_FREQUENCY: ChangeFrequency = ChangeFrequency::Daily;

/// Priority assigned to job posting URLs.
const JOB_PRIORITY: f64 = 0.8;

/// Renders the merged URL set into a sitemap protocol document
pub struct SitemapGenerator {
    base_url: String,
}

impl SitemapGenerator {
    /// `base_url` must already be sanitized (no trailing slash).
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Build the sitemap document and its metadata.
    ///
    /// Entry order is static pages in declared order, then valid jobs in
    /// input order. Documents without a usable slug contribute to neither
    /// the document nor the valid-job count. `now` is captured once per
    /// run so every static entry shares one lastmod value.
    pub fn generate(
        &self,
        static_pages: &[StaticPageEntry],
        jobs: &[JobDocument],
        now: DateTime<Utc>,
    ) -> GeneratedSitemap {
        let mut entries: Vec<UrlEntry> = Vec::with_capacity(static_pages.len() + jobs.len());

        for page in static_pages {
            entries.push(UrlEntry {
                location: format!("{}{}", self.base_url, page.path),
                last_modified: now,
                change_frequency: page.change_frequency,
                priority: page.priority,
            });
        }

        let mut valid_jobs = 0usize;
        for job in jobs {
            let Some(slug) = job.listable_slug() else {
                continue;
            };
            valid_jobs += 1;
            entries.push(UrlEntry {
                location: format!("{}/jobs/{}", self.base_url, slug),
                last_modified: job.last_modified(now),
                change_frequency: JOB_CHANGE_FREQUENCY,
                priority: JOB_PRIORITY,
            });
        }

        let xml = render_urlset(&entries);
        let metadata = RunMetadata {
            static_pages: static_pages.len(),
            valid_jobs,
            total_jobs: jobs.len(),
            total_urls: entries.len(),
            generated_at: now,
            sitemap_bytes: xml.len() as u64,
        };

        GeneratedSitemap { xml, metadata }
    }
}

/// Serialize entries as a sitemap protocol `<urlset>` document.
///
/// Every content-derived value placed in element text is escaped for the
/// five XML metacharacters.
fn render_urlset(entries: &[UrlEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape(entry.location.as_str())));
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}
