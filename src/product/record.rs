//! The exported product record and its enumerated attributes

use serde::{Serialize, Serializer};
use std::fmt;

/// Column order shared by the CSV header and the JSON object keys
pub const EXPORT_COLUMNS: [&str; 14] = [
    "title",
    "description",
    "type",
    "gender",
    "colors",
    "material",
    "price",
    "salePrice",
    "discount",
    "featured",
    "inStock",
    "sku",
    "sizes",
    "imageURLs",
];

/// Product category, in keyword-matching priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProductType {
    #[serde(rename = "T-Shirt")]
    TShirt,
    Hoodie,
    Shirt,
    Dress,
    Jacket,
    Pants,
    Shorts,
    Skirt,
    Clothing,
}

impl ProductType {
    /// Returns the label used by the storefront importer
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TShirt => "T-Shirt",
            Self::Hoodie => "Hoodie",
            Self::Shirt => "Shirt",
            Self::Dress => "Dress",
            Self::Jacket => "Jacket",
            Self::Pants => "Pants",
            Self::Shorts => "Shorts",
            Self::Skirt => "Skirt",
            Self::Clothing => "Clothing",
        }
    }
}

/// Target audience inferred from the title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Women,
    Men,
    Unisex,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Women => "Women",
            Self::Men => "Men",
            Self::Unisex => "Unisex",
        }
    }
}

/// Fabric, in keyword-matching priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Material {
    Cotton,
    Polyester,
    Linen,
    Silk,
    Wool,
    Denim,
    Leather,
}

impl Material {
    pub const ALL: [Material; 7] = [
        Self::Cotton,
        Self::Polyester,
        Self::Linen,
        Self::Silk,
        Self::Wool,
        Self::Denim,
        Self::Leather,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cotton => "Cotton",
            Self::Polyester => "Polyester",
            Self::Linen => "Linen",
            Self::Silk => "Silk",
            Self::Wool => "Wool",
            Self::Denim => "Denim",
            Self::Leather => "Leather",
        }
    }
}

macro_rules! impl_display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display_as_str!(ProductType, Gender, Material);

/// One product, fully extracted from its detail page
///
/// List-valued fields serialize as comma-joined strings so the CSV and JSON
/// exports carry identical values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub gender: Gender,
    #[serde(serialize_with = "join_with_commas")]
    pub colors: Vec<String>,
    pub material: Material,
    pub price: f64,
    #[serde(rename = "salePrice")]
    pub sale_price: Option<f64>,
    pub discount: Option<u32>,
    pub featured: bool,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
    pub sku: String,
    #[serde(serialize_with = "join_with_commas")]
    pub sizes: Vec<String>,
    #[serde(rename = "imageURLs", serialize_with = "join_with_commas")]
    pub image_urls: Vec<String>,
}

impl ProductRecord {
    /// Applies the sale rule: a sale price is kept only when strictly below
    /// the regular price, and always comes with its rounded discount percent
    pub fn apply_sale_price(&mut self, sale_price: Option<f64>) {
        match sale_price {
            Some(sale) if sale > 0.0 && sale < self.price => {
                self.sale_price = Some(sale);
                self.discount = Some(discount_percent(self.price, sale));
            }
            _ => {
                self.sale_price = None;
                self.discount = None;
            }
        }
    }
}

/// `round((price - sale) / price * 100)`
pub fn discount_percent(price: f64, sale_price: f64) -> u32 {
    (((price - sale_price) / price) * 100.0).round() as u32
}

fn join_with_commas<S>(values: &[String], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&values.join(","))
}
