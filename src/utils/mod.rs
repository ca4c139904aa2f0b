//! Utility functions for the sitemap generator
//!
//! This module provides various helper functions including:
//! - URL normalization and sanitization
//! - DateTime parsing utilities (see `utils::datetime`)

pub mod datetime;

/// Sanitize a base URL by removing trailing slashes and ensuring proper format
pub fn sanitize_base_url(base_url: &str) -> String {
    let mut url = base_url.trim().to_string();

    // Remove trailing slashes
    while url.ends_with('/') {
        url.pop();
    }

    // Ensure we have a scheme
    if !url.starts_with("http://") && !url.starts_with("https://") {
        url = format!("https://{}", url);
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_base_url() {
        assert_eq!(
            sanitize_base_url("https://jobs.example.com"),
            "https://jobs.example.com"
        );
        assert_eq!(
            sanitize_base_url("https://jobs.example.com/"),
            "https://jobs.example.com"
        );
        assert_eq!(
            sanitize_base_url("https://jobs.example.com//"),
            "https://jobs.example.com"
        );
        assert_eq!(
            sanitize_base_url("jobs.example.com"),
            "https://jobs.example.com"
        );
        assert_eq!(
            sanitize_base_url("http://localhost:3000/"),
            "http://localhost:3000"
        );
    }
}
