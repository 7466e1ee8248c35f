//! Sumi-Shelf main entry point
//!
//! This is the command-line interface for the Sumi-Shelf catalog harvester.

use anyhow::Context;
use clap::Parser;
use sumi_shelf::config::{config_path, load_config_or_default};
use sumi_shelf::crawler::crawl;
use sumi_shelf::output::{configured_sinks, export_all, print_statistics};
use sumi_shelf::ProductRecord;
use tracing_subscriber::EnvFilter;

/// Sumi-Shelf: a polite storefront catalog harvester
///
/// Walks a storefront collection page by page, extracts every product into
/// an import-ready record, and exports the results as CSV and JSON.
#[derive(Parser, Debug)]
#[command(name = "sumi-shelf")]
#[command(version = "1.0.0")]
#[command(about = "A polite storefront catalog harvester", long_about = None)]
struct Cli {
    /// Maximum number of listing pages to walk
    #[arg(value_name = "PAGES", allow_hyphen_values = true)]
    pages: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging();

    let path = config_path();
    let (config, config_hash) = load_config_or_default(&path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    match config_hash {
        Some(hash) => tracing::info!(
            "Configuration loaded from {} (hash: {})",
            path.display(),
            hash
        ),
        None => tracing::info!("No configuration file found, using defaults"),
    }

    let max_pages = parse_page_count(cli.pages.as_deref(), config.catalog.max_pages);
    let sinks = configured_sinks(&config.output);

    tracing::info!(
        "Starting harvest of {} (up to {} pages)",
        config.catalog.collection_url,
        max_pages
    );

    let (products, stats) = crawl(config, max_pages).await?;

    print_statistics(&stats);

    if products.is_empty() {
        tracing::error!("No products were scraped");
        return Ok(());
    }

    print_sample(&products[0]);

    let written = export_all(&sinks, &products);
    tracing::info!(
        "Harvest complete: {} products exported to {}/{} destinations",
        products.len(),
        written,
        sinks.len()
    );

    Ok(())
}

/// Sets up the logging/tracing subscriber
///
/// `RUST_LOG` takes precedence; otherwise crate logs at info and everything
/// else at warn.
fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sumi_shelf=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Resolves the page count argument, falling back to `default` when it is
/// absent, not a number, or zero
fn parse_page_count(arg: Option<&str>, default: u32) -> u32 {
    let Some(raw) = arg else {
        return default;
    };

    match raw.trim().parse::<u32>() {
        Ok(0) => {
            tracing::warn!("Page count must be at least 1, using default {}", default);
            default
        }
        Ok(pages) => pages,
        Err(_) => {
            tracing::warn!("Invalid page count '{}', using default {}", raw, default);
            default
        }
    }
}

fn print_sample(product: &ProductRecord) {
    println!("\n=== Sample Product ===\n");
    println!("Title:    {}", product.title);
    println!("Type:     {} / {}", product.product_type, product.gender);
    println!("Price:    {:.2}", product.price);
    if let (Some(sale), Some(discount)) = (product.sale_price, product.discount) {
        println!("Sale:     {:.2} ({}% off)", sale, discount);
    }
    println!("Colors:   {}", product.colors.join(", "));
    println!("Sizes:    {}", product.sizes.join(", "));
    println!("Material: {}", product.material);
    println!("SKU:      {}", product.sku);
    println!("Images:   {}", product.image_urls.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_absent_uses_default() {
        assert_eq!(parse_page_count(None, 8), 8);
    }

    #[test]
    fn test_page_count_parsed() {
        assert_eq!(parse_page_count(Some("3"), 8), 3);
        assert_eq!(parse_page_count(Some(" 12 "), 8), 12);
    }

    #[test]
    fn test_page_count_invalid_falls_back() {
        assert_eq!(parse_page_count(Some("lots"), 8), 8);
        assert_eq!(parse_page_count(Some("-2"), 8), 8);
        assert_eq!(parse_page_count(Some("0"), 8), 8);
    }

    #[test]
    fn test_cli_accepts_optional_pages() {
        let cli = Cli::try_parse_from(["sumi-shelf"]).unwrap();
        assert!(cli.pages.is_none());

        let cli = Cli::try_parse_from(["sumi-shelf", "abc"]).unwrap();
        assert_eq!(cli.pages.as_deref(), Some("abc"));

        let cli = Cli::try_parse_from(["sumi-shelf", "-2"]).unwrap();
        assert_eq!(cli.pages.as_deref(), Some("-2"));
    }
}
