//! Sumi-Shelf: a polite storefront catalog harvester
//!
//! This crate walks the paginated collection of a single e-commerce storefront,
//! extracts a normalized product record from every product page, and exports the
//! accumulated records to CSV and JSON for bulk import.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod product;

use thiserror::Error;

/// Main error type for Sumi-Shelf operations
#[derive(Debug, Error)]
pub enum ShelfError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Unexpected HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("Product page has no title")]
    MissingTitle,

    #[error("Product '{title}' has no valid price")]
    InvalidPrice { title: String },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Sumi-Shelf operations
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::CatalogWalker;
pub use product::{Gender, Material, ProductAssembler, ProductRecord, ProductType};
