//! Error types for the sitemap generator

pub mod types;

pub use types::*;
