//! Field extractors for product detail pages
//!
//! Each extractor derives one attribute from a parsed page and/or the product
//! title. None of them fail: missing markup yields a documented default.
//!
//! - Prices and sale prices from price labels
//! - Gallery image URLs, normalized to full-size absolute URLs
//! - Colors, sizes, material, type and gender from keyword tables
//! - A deterministic display SKU
//! - Free-text cleaning shared by title and description

mod attributes;
mod images;
mod price;
mod selectors;
mod sku;
mod text;

pub use attributes::{
    determine_gender, determine_type, extract_colors, extract_material, extract_sizes,
    material_description, COLOR_VOCABULARY, DEFAULT_COLORS, DEFAULT_SIZES, MAX_COLORS,
    SIZE_VOCABULARY,
};
pub use images::{extract_image_urls, normalize_image_url, MAX_IMAGES};
pub use price::{extract_price, extract_sale_price, parse_price_text};
pub use selectors::{
    first_non_empty, parse_selector, select_first, DESCRIPTION_SELECTORS, PRODUCT_CARD_SELECTOR,
    PRODUCT_LINK_SELECTOR, TITLE_SELECTOR,
};
pub use sku::generate_sku;
pub use text::{clean_text, element_text, truncate_chars};
