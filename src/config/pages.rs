//! Static site structure included in every sitemap.
//!
//! These tables are fixed at build time: the marketing pages plus the
//! category and location landing pages the job board serves. They are
//! materialized once at startup and passed explicitly into the renderer.

use crate::models::{ChangeFrequency, StaticPageEntry};

/// Marketing and navigation pages, in the order they appear in the sitemap.
const MARKETING_PAGES: &[(&str, ChangeFrequency, f64)] = &[
    ("", ChangeFrequency::Daily, 1.0),
    ("/jobs", ChangeFrequency::Hourly, 0.9),
    ("/companies", ChangeFrequency::Daily, 0.7),
    ("/about", ChangeFrequency::Monthly, 0.4),
    ("/contact", ChangeFrequency::Monthly, 0.4),
    ("/privacy", ChangeFrequency::Yearly, 0.2),
    ("/terms", ChangeFrequency::Yearly, 0.2),
];

/// Job category landing pages (`/jobs/category/{slug}`).
const CATEGORY_SLUGS: &[&str] = &[
    "engineering",
    "design",
    "product",
    "marketing",
    "sales",
    "operations",
    "finance",
    "customer-support",
];

/// Location landing pages (`/jobs/location/{slug}`).
const LOCATION_SLUGS: &[&str] = &[
    "remote",
    "minneapolis",
    "new-york",
    "san-francisco",
    "london",
    "berlin",
];

/// Build the full static page list: marketing pages in declared order,
/// then category pages, then location pages.
pub fn static_pages() -> Vec<StaticPageEntry> {
    let mut entries: Vec<StaticPageEntry> = MARKETING_PAGES
        .iter()
        .map(|(path, freq, priority)| StaticPageEntry::new(*path, *freq, *priority))
        .collect();

    entries.extend(CATEGORY_SLUGS.iter().map(|slug| {
        StaticPageEntry::new(
            format!("/jobs/category/{}", slug),
            ChangeFrequency::Weekly,
            0.6,
        )
    }));

    entries.extend(LOCATION_SLUGS.iter().map(|slug| {
        StaticPageEntry::new(
            format!("/jobs/location/{}", slug),
            ChangeFrequency::Weekly,
            0.6,
        )
    }));

    entries
}
