//! Keyword-table extractors for colors, sizes, material, type and gender
//!
//! Every table is evaluated top to bottom and the first match wins, so the
//! declaration order below is the tie-break rule (e.g. "t-shirt" must be
//! tested before "shirt", women's keywords before men's).

use crate::extract::selectors::{
    parse_selector, select_first, MATERIAL_DESCRIPTION_SELECTORS, SIZE_OPTION_SELECTOR,
};
use crate::extract::text::element_text;
use crate::product::{Gender, Material, ProductType};
use scraper::Html;

/// Maximum number of colors kept per product
pub const MAX_COLORS: usize = 5;

/// Color names recognised in titles
pub const COLOR_VOCABULARY: [&str; 15] = [
    "Black", "White", "Red", "Blue", "Green", "Yellow", "Pink", "Purple", "Gray", "Navy", "Khaki",
    "Beige", "Brown", "Orange", "Maroon",
];

pub const DEFAULT_COLORS: [&str; 3] = ["Black", "White", "Navy"];

/// Size labels accepted from variant pickers
pub const SIZE_VOCABULARY: [&str; 7] = ["XS", "S", "M", "L", "XL", "XXL", "XXXL"];

pub const DEFAULT_SIZES: [&str; 4] = ["S", "M", "L", "XL"];

/// Longest option label considered a size
const MAX_SIZE_LABEL_LEN: usize = 5;

const TYPE_KEYWORDS: &[(ProductType, &[&str])] = &[
    (ProductType::TShirt, &["t-shirt", "tshirt", "t shirt", "tee"]),
    (ProductType::Hoodie, &["hoodie", "sweatshirt", "hooded"]),
    (ProductType::Shirt, &["shirt", "blouse"]),
    (ProductType::Dress, &["dress"]),
    (ProductType::Jacket, &["jacket", "coat"]),
    (ProductType::Pants, &["pants", "trousers", "jeans"]),
    (ProductType::Shorts, &["shorts"]),
    (ProductType::Skirt, &["skirt"]),
];

const GENDER_KEYWORDS: &[(Gender, &[&str])] = &[
    (
        Gender::Women,
        &["women's", "womens", "female", "woman", "for women", "ladies", "girl"],
    ),
    (
        Gender::Men,
        &["men's", "mens", "male", "man", "for men", "gentleman"],
    ),
    (Gender::Unisex, &["unisex"]),
];

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

/// Colors named in the title, in vocabulary order
///
/// Falls back to [`DEFAULT_COLORS`] when the title names none.
pub fn extract_colors(title: &str) -> Vec<String> {
    let title = title.to_lowercase();

    let mut colors: Vec<String> = COLOR_VOCABULARY
        .iter()
        .filter(|color| title.contains(&color.to_lowercase()))
        .take(MAX_COLORS)
        .map(|color| color.to_string())
        .collect();

    if colors.is_empty() {
        colors = DEFAULT_COLORS.iter().map(|c| c.to_string()).collect();
    }

    colors
}

/// Size labels offered by the page's variant options, in document order
///
/// Falls back to [`DEFAULT_SIZES`] when no option carries a known size.
pub fn extract_sizes(document: &Html) -> Vec<String> {
    let mut sizes: Vec<String> = Vec::new();

    if let Some(selector) = parse_selector(SIZE_OPTION_SELECTOR) {
        for option in document.select(&selector) {
            let label = element_text(option);
            let label = label.trim();
            if label.is_empty() || label.chars().count() > MAX_SIZE_LABEL_LEN {
                continue;
            }

            let upper = label.to_uppercase();
            if SIZE_VOCABULARY.contains(&upper.as_str()) && !sizes.contains(&upper) {
                sizes.push(upper);
            }
        }
    }

    if sizes.is_empty() {
        sizes = DEFAULT_SIZES.iter().map(|s| s.to_string()).collect();
    }

    sizes
}

/// Raw text of the product description used for fabric detection
pub fn material_description(document: &Html) -> Option<String> {
    select_first(document, MATERIAL_DESCRIPTION_SELECTORS).map(element_text)
}

/// First fabric named in the title or description; Cotton otherwise
pub fn extract_material(title: &str, description: Option<&str>) -> Material {
    let search_text = format!("{} {}", title, description.unwrap_or_default()).to_lowercase();

    // "100% cotton" labels are covered by the vocabulary scan
    Material::ALL
        .iter()
        .find(|m| search_text.contains(&m.as_str().to_lowercase()))
        .copied()
        .unwrap_or(Material::Cotton)
}

/// Category of the first keyword group found in the title
pub fn determine_type(title: &str) -> ProductType {
    let title = title.to_lowercase();

    TYPE_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(&title, keywords))
        .map(|(product_type, _)| *product_type)
        .unwrap_or(ProductType::Clothing)
}

/// Audience named in the title; Unisex when nothing matches
pub fn determine_gender(title: &str) -> Gender {
    let title = title.to_lowercase();

    GENDER_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(&title, keywords))
        .map(|(gender, _)| *gender)
        .unwrap_or(Gender::Unisex)
}
