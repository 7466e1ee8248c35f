//! Checks applied by the storefront's bulk importer
//!
//! Records failing these checks are still exported; the issues are reported
//! so they can be fixed before the import is run.

use crate::product::record::ProductRecord;
use thiserror::Error;

/// One reason the importer would refuse a record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationIssue {
    #[error("Title must be at least 3 characters")]
    TitleTooShort,

    #[error("Description must be at least 10 characters")]
    DescriptionTooShort,

    #[error("At least one color is required")]
    NoColors,

    #[error("Price must be greater than 0")]
    NonPositivePrice,

    #[error("Sale price must be less than regular price")]
    SalePriceNotBelowPrice,

    #[error("Discount must be between 0 and 100, got {0}")]
    DiscountOutOfRange(u32),

    #[error("At least one size is required")]
    NoSizes,
}

/// Returns every importer rule the record breaks; empty means importable
pub fn validate_for_import(product: &ProductRecord) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if product.title.trim().chars().count() < 3 {
        issues.push(ValidationIssue::TitleTooShort);
    }

    if product.description.trim().chars().count() < 10 {
        issues.push(ValidationIssue::DescriptionTooShort);
    }

    if product.colors.iter().all(|c| c.trim().is_empty()) {
        issues.push(ValidationIssue::NoColors);
    }

    if product.price <= 0.0 {
        issues.push(ValidationIssue::NonPositivePrice);
    }

    if let Some(sale) = product.sale_price {
        if sale >= product.price {
            issues.push(ValidationIssue::SalePriceNotBelowPrice);
        }
    }

    if let Some(discount) = product.discount {
        if discount > 100 {
            issues.push(ValidationIssue::DiscountOutOfRange(discount));
        }
    }

    if product.sizes.iter().all(|s| s.trim().is_empty()) {
        issues.push(ValidationIssue::NoSizes);
    }

    issues
}
