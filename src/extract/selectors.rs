//! Ordered CSS selector fallback chains
//!
//! Storefront themes move product markup around between versions, so most
//! fields are looked up through a list of selectors tried in order. The
//! first selector that produces something usable wins.

use scraper::{ElementRef, Html, Selector};

/// Price element candidates, most specific first
pub const PRICE_SELECTORS: &[&str] = &[
    ".price-item--regular",
    ".product-price",
    "[class*=\"price\"]",
];

/// Sale price element
pub const SALE_PRICE_SELECTORS: &[&str] = &[".price-item--sale"];

/// Description element candidates
pub const DESCRIPTION_SELECTORS: &[&str] = &[
    ".product__description",
    ".product-single__description",
    "[class*=\"description\"]",
];

/// Description elements searched for fabric names
pub const MATERIAL_DESCRIPTION_SELECTORS: &[&str] =
    &[".product__description", ".product-single__description"];

/// Product gallery image candidates
pub const IMAGE_SELECTORS: &[&str] = &[
    ".product__media img",
    ".product-single__photo img",
    "[class*=\"product-image\"] img",
    ".product-gallery img",
];

/// Variant option elements that may carry size labels
pub const SIZE_OPTION_SELECTOR: &str =
    "[class*=\"size\"] option, [class*=\"variant\"] option, select option";

/// Product card on a collection listing page
pub const PRODUCT_CARD_SELECTOR: &str = "li.grid__item .card-wrapper";

/// Product link inside a card
pub const PRODUCT_LINK_SELECTOR: &str = "a.full-unstyled-link";

/// Product title on a detail page
pub const TITLE_SELECTOR: &str = "h1";

/// Parses a selector, logging and skipping it if it is malformed
pub fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::debug!("Skipping invalid selector '{}': {:?}", selector, e);
            None
        }
    }
}

/// Returns the first element matched by the first selector that matches anything
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `selectors` - Selectors in priority order
pub fn select_first<'a>(document: &'a Html, selectors: &[&str]) -> Option<ElementRef<'a>> {
    selectors
        .iter()
        .filter_map(|s| parse_selector(s))
        .find_map(|selector| document.select(&selector).next())
}

/// Runs `map` over the matches of each selector in turn and returns the
/// results of the first selector that yields at least one value
///
/// Elements for which `map` returns `None` are skipped, so a selector that
/// only matches placeholder markup falls through to the next one.
///
/// # Example
///
/// ```
/// use scraper::Html;
/// use sumi_shelf::extract::first_non_empty;
///
/// let html = Html::parse_document(r#"<p class="b">one</p><p class="b">two</p>"#);
/// let texts = first_non_empty(&html, &[".a", ".b"], |el| Some(el.text().collect::<String>()));
/// assert_eq!(texts, vec!["one", "two"]);
/// ```
pub fn first_non_empty<'a, T, F>(document: &'a Html, selectors: &[&str], mut map: F) -> Vec<T>
where
    F: FnMut(ElementRef<'a>) -> Option<T>,
{
    for selector in selectors.iter().filter_map(|s| parse_selector(s)) {
        let found: Vec<T> = document.select(&selector).filter_map(&mut map).collect();
        if !found.is_empty() {
            return found;
        }
    }

    Vec::new()
}
