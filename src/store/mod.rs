//! Catalog Store Module
//!
//! Fetches the awesome-rust README over HTTP, parses it into categories and
//! entries, and caches the parsed catalog as JSON on disk so later runs do
//! not touch the network. A plain JSON file keeps the tool dependency-free
//! on the user's machine; no database required.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod parser;

/// Source document for the catalog.
pub const CATALOG_URL: &str =
    "https://raw.githubusercontent.com/rust-unofficial/awesome-rust/main/README.md";

/// Default on-disk cache location, relative to the working directory.
pub const DEFAULT_CACHE_PATH: &str = "store.json";

/// Failures while building or persisting the catalog.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("catalog download failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("catalog cache I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog cache is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One catalog package: a crate or project listed under a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub category: String,
    pub name: String,
    pub link: String,
    pub description: String,
}

/// One catalog section with its own entry list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub description: String,
    pub entries: Vec<Entry>,
}

/// The parsed catalog: a flat entry list for searching plus the category
/// tree for browsing, stamped with the fetch time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub entries: Vec<Entry>,
    pub categories: Vec<Category>,
    pub fetched_at: DateTime<Utc>,
}

impl Catalog {
    /// Write the catalog to `path` as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        debug!("catalog cache written to {}", path.display());
        Ok(())
    }

    /// Read a previously saved catalog back from `path`.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path)?;
        let catalog = serde_json::from_str(&raw)?;
        Ok(catalog)
    }
}

/// Download the README and parse it into a catalog.
pub async fn fetch_catalog() -> Result<Catalog, StoreError> {
    info!("fetching catalog from {}", CATALOG_URL);
    let body = reqwest::get(CATALOG_URL).await?.text().await?;
    let (categories, entries) = parser::parse_catalog(&body);
    info!(
        "parsed {} entries across {} categories",
        entries.len(),
        categories.len()
    );
    Ok(Catalog {
        entries,
        categories,
        fetched_at: Utc::now(),
    })
}

/// Load the cached catalog, fetching and writing the cache on first run.
pub async fn init(cache_path: &Path) -> Result<Catalog, StoreError> {
    if cache_path.exists() {
        debug!("loading catalog cache from {}", cache_path.display());
        return Catalog::load(cache_path);
    }
    let catalog = fetch_catalog().await?;
    catalog.save(cache_path)?;
    Ok(catalog)
}

/// Re-fetch the catalog unconditionally and overwrite the cache.
pub async fn refresh(cache_path: &Path) -> Result<Catalog, StoreError> {
    let catalog = fetch_catalog().await?;
    catalog.save(cache_path)?;
    Ok(catalog)
}
