//! Articles Module
//!
//! Serves the curated article documents produced by the ingestion pipeline.
//! Writes happen through [`db::insert_article`]; HTTP access is read-only.

pub mod db;
pub mod handlers;

pub use handlers::{get_article, list_articles};
