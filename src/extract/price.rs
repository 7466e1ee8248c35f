//! Price extraction

use crate::extract::selectors::{select_first, PRICE_SELECTORS, SALE_PRICE_SELECTORS};
use crate::extract::text::element_text;
use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("hardcoded regex pattern is valid"));

/// Parses the first number out of a price label such as `"Rs. 1,200.00"`
///
/// Thousands separators are removed before matching. Returns `None` when the
/// text carries no digits or the number does not fit a finite `f64`.
///
/// # Example
///
/// ```
/// use sumi_shelf::extract::parse_price_text;
///
/// assert_eq!(parse_price_text("Rs. 1,200.00"), Some(1200.0));
/// assert_eq!(parse_price_text("Sold out"), None);
/// ```
pub fn parse_price_text(text: &str) -> Option<f64> {
    let without_grouping = text.replace(',', "");
    NUMBER
        .find(&without_grouping)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Regular price from the first matching price element
pub fn extract_price(document: &Html) -> Option<f64> {
    select_first(document, PRICE_SELECTORS).and_then(|el| parse_price_text(&element_text(el)))
}

/// Sale price, if the page shows one
pub fn extract_sale_price(document: &Html) -> Option<f64> {
    select_first(document, SALE_PRICE_SELECTORS)
        .and_then(|el| parse_price_text(&element_text(el)))
}
