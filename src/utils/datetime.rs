//! Centralized datetime handling utilities
//!
//! This module provides consistent datetime parsing across the application.
//! Document timestamps arrive as ISO-8601 strings from the remote store;
//! everything is normalized to UTC before rendering.

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

/// Errors that can occur during datetime operations
#[derive(Error, Debug)]
pub enum DateTimeError {
    /// Invalid datetime format provided
    #[error("Invalid datetime format: '{input}' - expected RFC3339 (2023-01-01T12:00:00Z)")]
    InvalidFormat { input: String },
}

/// Centralized datetime parsing utilities
pub struct DateTimeParser;

impl DateTimeParser {
    /// Parse datetime from the formats the document store emits
    ///
    /// Supports:
    /// - RFC3339 format with timezone: "2023-01-01T12:00:00Z"
    /// - RFC3339 format with offset: "2023-01-01T12:00:00+02:00"
    /// - RFC3339 with fractional seconds: "2023-01-01T12:00:00.123Z"
    /// - ISO without timezone (assumes UTC): "2023-01-01T12:00:00"
    pub fn parse_flexible(datetime_str: &str) -> Result<DateTime<Utc>, DateTimeError> {
        let trimmed = datetime_str.trim();

        // RFC3339 first, the format the store actually uses
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(dt.with_timezone(&Utc));
        }

        // Naive datetime formats (assume UTC)
        let naive_formats = [
            "%Y-%m-%dT%H:%M:%S",    // ISO without timezone
            "%Y-%m-%dT%H:%M:%S%.f", // ISO with fractional seconds
            "%Y-%m-%d %H:%M:%S",    // space-separated variant
        ];

        for format in &naive_formats {
            if let Ok(naive_dt) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(DateTime::from_naive_utc_and_offset(naive_dt, Utc));
            }
        }

        Err(DateTimeError::InvalidFormat {
            input: datetime_str.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_rfc3339() {
        let dt = DateTimeParser::parse_flexible("2024-01-01T12:00:00Z").unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 1);
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn test_parse_with_timezone_offset() {
        let dt = DateTimeParser::parse_flexible("2024-01-01T12:00:00+02:00").unwrap();
        // Converted to UTC
        assert_eq!(dt.hour(), 10);
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let dt = DateTimeParser::parse_flexible("2024-06-15T08:30:00.123+00:00").unwrap();
        assert_eq!(dt.hour(), 8);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_parse_naive_assumes_utc() {
        let dt = DateTimeParser::parse_flexible("2024-01-01T12:00:00").unwrap();
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn test_parse_invalid_input() {
        assert!(DateTimeParser::parse_flexible("not a date").is_err());
        assert!(DateTimeParser::parse_flexible("").is_err());
    }
}
