//! CSV export
//!
//! One header row followed by one row per product. List-valued fields are
//! comma-joined inside a single (quoted) cell; absent sale price and
//! discount are empty cells.

use crate::output::traits::{OutputResult, ProductSink};
use crate::product::ProductRecord;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes products to a CSV file
#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Serializes products as CSV into any writer
pub fn write_csv<W: Write>(writer: W, products: &[ProductRecord]) -> OutputResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for product in products {
        csv_writer.serialize(product)?;
    }
    csv_writer.flush()?;
    Ok(())
}

impl ProductSink for CsvExporter {
    fn name(&self) -> &'static str {
        "CSV"
    }

    fn destination(&self) -> String {
        self.path().display().to_string()
    }

    fn write(&self, products: &[ProductRecord]) -> OutputResult<usize> {
        if products.is_empty() {
            tracing::info!("No products to save, skipping {}", self.path.display());
            return Ok(0);
        }

        let file = std::fs::File::create(&self.path)?;
        write_csv(file, products)?;

        tracing::info!(
            "CSV file saved: {} ({} products)",
            self.path.display(),
            products.len()
        );
        Ok(products.len())
    }
}
