//! Statistics for a single harvest run
//!
//! The walker updates a [`CrawlStats`] as it goes; the binary prints it once
//! the run is over.

use chrono::{DateTime, Utc};
use std::fmt;

/// Why the walker stopped requesting listing pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every requested page was walked
    PageLimit,
    /// A listing page produced no products (end of catalog)
    EmptyPage { page: u32 },
    /// A listing page could not be fetched
    PageFailed { page: u32 },
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageLimit => write!(f, "page limit reached"),
            Self::EmptyPage { page } => write!(f, "no products on page {}", page),
            Self::PageFailed { page } => write!(f, "listing page {} failed", page),
        }
    }
}

/// Counters collected during one crawl
#[derive(Debug, Clone)]
pub struct CrawlStats {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,

    /// Listing pages requested, including failed ones
    pub pages_requested: u32,

    /// Listing pages that yielded at least one product
    pub pages_with_products: u32,

    /// Product links found on listing pages
    pub product_links: u64,

    /// Product records accepted
    pub products_extracted: u64,

    /// Product pages that failed to fetch or lacked a title or price
    pub products_skipped: u64,

    /// Accepted records the importer would flag
    pub products_with_issues: u64,

    pub stop_reason: Option<StopReason>,
}

impl Default for CrawlStats {
    fn default() -> Self {
        Self::new()
    }
}

impl CrawlStats {
    /// Starts a new set of counters stamped with the current time
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            pages_requested: 0,
            pages_with_products: 0,
            product_links: 0,
            products_extracted: 0,
            products_skipped: 0,
            products_with_issues: 0,
            stop_reason: None,
        }
    }

    /// Marks the run as finished
    pub fn finish(&mut self, reason: StopReason) {
        self.finished_at = Some(Utc::now());
        self.stop_reason = Some(reason);
    }

    /// Run length in seconds, once finished
    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }

    /// Share of product links that produced a record, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.product_links == 0 {
            return 0.0;
        }
        (self.products_extracted as f64 / self.product_links as f64) * 100.0
    }
}

/// Formats statistics as the end-of-run report
pub fn format_statistics(stats: &CrawlStats) -> String {
    let mut out = String::new();

    out.push_str("=== Harvest Statistics ===\n\n");
    out.push_str(&format!("Started: {}\n", stats.started_at.to_rfc3339()));
    if let Some(finished) = stats.finished_at {
        out.push_str(&format!("Finished: {}\n", finished.to_rfc3339()));
    }
    if let Some(duration) = stats.duration_seconds() {
        out.push_str(&format!(
            "Duration: {} seconds ({:.2} minutes)\n",
            duration,
            duration as f64 / 60.0
        ));
    }
    if let Some(reason) = stats.stop_reason {
        out.push_str(&format!("Stopped: {}\n", reason));
    }
    out.push('\n');

    out.push_str("Listing pages:\n");
    out.push_str(&format!("  Requested: {}\n", stats.pages_requested));
    out.push_str(&format!("  With products: {}\n", stats.pages_with_products));
    out.push('\n');

    out.push_str("Products:\n");
    out.push_str(&format!("  Links found: {}\n", stats.product_links));
    out.push_str(&format!("  Extracted: {}\n", stats.products_extracted));
    out.push_str(&format!("  Skipped: {}\n", stats.products_skipped));
    out.push_str(&format!(
        "  With import issues: {}\n",
        stats.products_with_issues
    ));
    out.push('\n');

    out.push_str(&format!(
        "Success Rate: {:.1}% ({} / {} product links)\n",
        stats.success_rate(),
        stats.products_extracted,
        stats.product_links
    ));

    out
}

/// Prints statistics to stdout
pub fn print_statistics(stats: &CrawlStats) {
    print!("{}", format_statistics(stats));
}
