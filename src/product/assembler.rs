//! Product page → [`ProductRecord`]

use crate::extract::{
    clean_text, determine_gender, determine_type, element_text, extract_colors,
    extract_image_urls, extract_material, extract_price, extract_sale_price, extract_sizes,
    generate_sku, material_description, select_first, truncate_chars, DESCRIPTION_SELECTORS,
    TITLE_SELECTOR,
};
use crate::product::record::ProductRecord;
use crate::ShelfError;
use scraper::Html;
use url::Url;

/// Longest description kept in the export
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Descriptions shorter than this are replaced by the template
const MIN_DESCRIPTION_CHARS: usize = 10;

/// Builds product records from product detail pages of one storefront
#[derive(Debug, Clone)]
pub struct ProductAssembler {
    base_url: Url,
}

impl ProductAssembler {
    /// Creates an assembler resolving relative links against `base_url`
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Extracts one product record from a detail page
    ///
    /// # Returns
    ///
    /// * `Ok(ProductRecord)` - Title and a positive price were found
    /// * `Err(ShelfError::MissingTitle)` - The page has no usable `<h1>`
    /// * `Err(ShelfError::InvalidPrice)` - No price, or a price of zero
    ///
    /// # Example
    ///
    /// ```
    /// use sumi_shelf::ProductAssembler;
    /// use url::Url;
    ///
    /// let assembler = ProductAssembler::new(Url::parse("https://shop.example.com").unwrap());
    /// let html = r#"<h1>Men's Classic Black T-Shirt</h1>
    ///               <span class="price-item--regular">Rs. 1,200.00</span>"#;
    /// let product = assembler.assemble(html).unwrap();
    /// assert_eq!(product.price, 1200.0);
    /// assert_eq!(product.gender.as_str(), "Men");
    /// ```
    pub fn assemble(&self, html: &str) -> Result<ProductRecord, ShelfError> {
        let document = Html::parse_document(html);

        let title = select_first(&document, &[TITLE_SELECTOR])
            .map(|h1| clean_text(&element_text(h1)))
            .filter(|t| !t.is_empty())
            .ok_or(ShelfError::MissingTitle)?;

        let description = Self::description(&document, &title);

        let price = extract_price(&document)
            .filter(|p| *p > 0.0)
            .ok_or_else(|| ShelfError::InvalidPrice {
                title: title.clone(),
            })?;

        let raw_description = material_description(&document);
        let material = extract_material(&title, raw_description.as_deref());

        let mut product = ProductRecord {
            description,
            product_type: determine_type(&title),
            gender: determine_gender(&title),
            colors: extract_colors(&title),
            material,
            price,
            sale_price: None,
            discount: None,
            featured: false,
            in_stock: true,
            sku: generate_sku(&title),
            sizes: extract_sizes(&document),
            image_urls: extract_image_urls(&document, &self.base_url),
            title,
        };

        product.apply_sale_price(extract_sale_price(&document));

        tracing::debug!(
            "Assembled '{}' (price {}, sale {:?}, {} images)",
            product.title,
            product.price,
            product.sale_price,
            product.image_urls.len()
        );

        Ok(product)
    }

    /// Cleaned description, or the templated fallback, capped in length
    fn description(document: &Html, title: &str) -> String {
        let extracted = select_first(document, DESCRIPTION_SELECTORS)
            .map(|el| clean_text(&element_text(el)))
            .filter(|d| d.chars().count() >= MIN_DESCRIPTION_CHARS);

        let description =
            extracted.unwrap_or_else(|| format!("{} - Premium quality clothing", title));

        truncate_chars(&description, MAX_DESCRIPTION_CHARS)
    }
}
