//! Catalog walker - the main harvest loop
//!
//! Walks collection listing pages in order, follows every product card to
//! its detail page, and accumulates the assembled records. The walk is
//! strictly sequential with fixed politeness delays:
//!
//! - Page 1 is the bare collection URL, page N>1 adds `?page=N`
//! - A product that fails to fetch or assemble is logged and skipped
//! - A listing page that fails or yields no products ends the walk
//! - Otherwise the walk continues up to the requested page count

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::extract::{parse_selector, PRODUCT_CARD_SELECTOR, PRODUCT_LINK_SELECTOR};
use crate::output::{CrawlStats, StopReason};
use crate::product::{validate_for_import, ProductAssembler, ProductRecord};
use crate::ShelfError;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use url::Url;

/// Drives the crawl of one storefront collection
pub struct CatalogWalker {
    config: Config,
    client: Client,
    assembler: ProductAssembler,
    base_url: Url,
    collection_url: Url,
    stats: CrawlStats,
}

impl CatalogWalker {
    /// Creates a new walker instance
    ///
    /// # Returns
    ///
    /// * `Ok(CatalogWalker)` - Client built and URLs parsed
    /// * `Err(ShelfError)` - Invalid catalog URL or HTTP client failure
    pub fn new(config: Config) -> Result<Self, ShelfError> {
        let base_url = Url::parse(&config.catalog.base_url)?;
        let collection_url = Url::parse(&config.catalog.collection_url)?;
        let client = build_http_client(&config.http)?;

        Ok(Self {
            assembler: ProductAssembler::new(base_url.clone()),
            config,
            client,
            base_url,
            collection_url,
            stats: CrawlStats::new(),
        })
    }

    /// Statistics of the most recent crawl
    pub fn stats(&self) -> &CrawlStats {
        &self.stats
    }

    /// URL of listing page `page` (1-based)
    pub fn listing_url(&self, page: u32) -> Url {
        let mut url = self.collection_url.clone();
        if page > 1 {
            url.query_pairs_mut()
                .append_pair("page", &page.to_string());
        }
        url
    }

    /// Walks up to `max_pages` listing pages and returns every product found,
    /// in listing order
    ///
    /// Never fails: page and product errors are logged and reflected in
    /// [`CatalogWalker::stats`].
    pub async fn crawl(&mut self, max_pages: u32) -> Vec<ProductRecord> {
        self.stats = CrawlStats::new();
        let mut all_products: Vec<ProductRecord> = Vec::new();
        let mut stop_reason = StopReason::PageLimit;

        for page in 1..=max_pages {
            tracing::info!("Scraping page {}/{}", page, max_pages);

            let products = match self.harvest_page(page).await {
                Ok(products) => products,
                Err(e) => {
                    tracing::error!("Error fetching listing page {}: {}", page, e);
                    stop_reason = StopReason::PageFailed { page };
                    break;
                }
            };

            if products.is_empty() {
                tracing::info!("No products found on page {}. Stopping.", page);
                stop_reason = StopReason::EmptyPage { page };
                break;
            }

            self.stats.pages_with_products += 1;
            all_products.extend(products);
            tracing::info!(
                "Page {} complete, total products so far: {}",
                page,
                all_products.len()
            );

            if page < max_pages {
                self.pause(self.config.politeness.page_delay_ms).await;
            }
        }

        self.stats.finish(stop_reason);
        tracing::info!(
            "Crawl finished ({}): {} products from {} pages",
            stop_reason,
            all_products.len(),
            self.stats.pages_requested
        );

        all_products
    }

    /// Fetches one listing page and harvests every product card on it
    ///
    /// Only a listing fetch failure is an error; individual products that
    /// fail are skipped.
    async fn harvest_page(&mut self, page: u32) -> Result<Vec<ProductRecord>, ShelfError> {
        let url = self.listing_url(page);
        self.stats.pages_requested += 1;

        let html = fetch_page(&self.client, url.as_str()).await?;
        let links = extract_product_links(&html, &self.base_url);
        tracing::info!("Found {} products on page {}", links.len(), page);
        self.stats.product_links += links.len() as u64;

        let mut products = Vec::new();
        for (idx, link) in links.iter().enumerate() {
            tracing::info!("  [{}/{}] Processing: {}", idx + 1, links.len(), link);

            match self.harvest_product(link).await {
                Ok(product) => {
                    tracing::info!("    Extracted: {}", product.title);
                    self.stats.products_extracted += 1;
                    products.push(product);
                }
                Err(e) => {
                    tracing::warn!("    Skipping {}: {}", link, e);
                    self.stats.products_skipped += 1;
                }
            }

            self.pause(self.config.politeness.product_delay_ms).await;
        }

        Ok(products)
    }

    /// Fetches and assembles one product, reporting importer issues
    async fn harvest_product(&mut self, url: &Url) -> Result<ProductRecord, ShelfError> {
        let html = fetch_page(&self.client, url.as_str()).await?;
        let product = self.assembler.assemble(&html)?;

        let issues = validate_for_import(&product);
        if !issues.is_empty() {
            self.stats.products_with_issues += 1;
            for issue in &issues {
                tracing::warn!("    Import check for '{}': {}", product.title, issue);
            }
        }

        Ok(product)
    }

    async fn pause(&self, millis: u64) {
        if millis > 0 {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }
}

/// Extracts absolute product URLs from a collection listing page
///
/// One URL per product card, in card order. Cards without a product link,
/// and links that cannot be resolved, are skipped.
pub fn extract_product_links(html: &str, base_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);

    let (Some(card_selector), Some(link_selector)) = (
        parse_selector(PRODUCT_CARD_SELECTOR),
        parse_selector(PRODUCT_LINK_SELECTOR),
    ) else {
        return Vec::new();
    };

    document
        .select(&card_selector)
        .filter_map(|card| {
            let href = card
                .select(&link_selector)
                .next()
                .and_then(|link| link.value().attr("href"))?;

            match base_url.join(href.trim()) {
                Ok(url) => Some(url),
                Err(e) => {
                    tracing::debug!("Skipping product link '{}': {}", href, e);
                    None
                }
            }
        })
        .collect()
}
