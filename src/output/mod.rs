//! Output module for exporting harvested products and run reports
//!
//! This module handles:
//! - Writing product records to CSV and JSON
//! - Recording and printing crawl statistics

mod csv_output;
mod json_output;
pub mod stats;
mod traits;

pub use csv_output::{write_csv, CsvExporter};
pub use json_output::{write_json, JsonExporter};
pub use stats::{format_statistics, print_statistics, CrawlStats, StopReason};
pub use traits::{OutputError, OutputResult, ProductSink};

use crate::config::OutputConfig;
use crate::product::ProductRecord;

/// Builds the configured export sinks: CSV first, then JSON
pub fn configured_sinks(config: &OutputConfig) -> Vec<Box<dyn ProductSink>> {
    vec![
        Box::new(CsvExporter::new(&config.csv_path)),
        Box::new(JsonExporter::new(&config.json_path)),
    ]
}

/// Writes products to every sink
///
/// A failing sink is logged and does not prevent the others from running.
///
/// # Returns
///
/// The number of sinks that wrote successfully
pub fn export_all(sinks: &[Box<dyn ProductSink>], products: &[ProductRecord]) -> usize {
    let mut succeeded = 0;

    for sink in sinks {
        match sink.write(products) {
            Ok(_) => succeeded += 1,
            Err(e) => tracing::error!(
                "Failed to write {} export to {}: {}",
                sink.name(),
                sink.destination(),
                e
            ),
        }
    }

    succeeded
}
