//! Configuration module for Sumi-Shelf
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. A missing file is not an error: the built-in defaults
//! describe the storefront the harvester targets.
//!
//! # Example
//!
//! ```no_run
//! use sumi_shelf::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("sumi-shelf.toml")).unwrap();
//! println!("Walking up to {} pages", config.catalog.max_pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CatalogConfig, Config, HttpConfig, OutputConfig, PolitenessConfig, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{
    compute_config_hash, config_path, load_config, load_config_or_default, CONFIG_ENV_VAR,
    DEFAULT_CONFIG_PATH,
};
pub use validation::validate;
