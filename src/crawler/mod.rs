//! Crawler module for catalog fetching and harvesting
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with timeout and status classification
//! - Product link extraction from listing pages
//! - The sequential, delay-paced catalog walk

mod fetcher;
mod walker;

pub use fetcher::{build_http_client, fetch_page};
pub use walker::{extract_product_links, CatalogWalker};

use crate::config::Config;
use crate::output::CrawlStats;
use crate::product::ProductRecord;
use crate::ShelfError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client and product assembler
/// 2. Walk listing pages up to `max_pages`
/// 3. Harvest every product card on each page
///
/// # Arguments
///
/// * `config` - The harvester configuration
/// * `max_pages` - Upper bound on listing pages to visit
///
/// # Returns
///
/// * `Ok((products, stats))` - Crawl ran; products may be empty
/// * `Err(ShelfError)` - The walker could not be set up
pub async fn crawl(
    config: Config,
    max_pages: u32,
) -> Result<(Vec<ProductRecord>, CrawlStats), ShelfError> {
    let mut walker = CatalogWalker::new(config)?;
    let products = walker.crawl(max_pages).await;
    Ok((products, walker.stats().clone()))
}
