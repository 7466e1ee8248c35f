//! Product records and their assembly from detail pages
//!
//! This module contains:
//! - The exported [`ProductRecord`] and its enumerated attributes
//! - The [`ProductAssembler`] that runs every extractor over one page
//! - Import validation mirroring the storefront's bulk importer

mod assembler;
mod record;
mod validation;

pub use assembler::{ProductAssembler, MAX_DESCRIPTION_CHARS};
pub use record::{discount_percent, Gender, Material, ProductRecord, ProductType, EXPORT_COLUMNS};
pub use validation::{validate_for_import, ValidationIssue};
