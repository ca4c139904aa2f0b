//! Sitemap generator for a job listing site
//!
//! One-shot batch pipeline: fetch every job document from the remote
//! document store, merge with the static page table, render the sitemap
//! protocol XML and a JSON metadata summary, and write both artifacts.

pub mod config;
pub mod errors;
pub mod ingestor;
pub mod models;
pub mod sitemap;
pub mod sources;
pub mod utils;
