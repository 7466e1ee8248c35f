//! JSON export
//!
//! A single pretty-printed array of product objects. Non-ASCII text is
//! written as UTF-8, not escaped.

use crate::output::traits::{OutputResult, ProductSink};
use crate::product::ProductRecord;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes products to a JSON file
#[derive(Debug, Clone)]
pub struct JsonExporter {
    path: PathBuf,
}

impl JsonExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Serializes products as an indented JSON array into any writer
pub fn write_json<W: Write>(mut writer: W, products: &[ProductRecord]) -> OutputResult<()> {
    serde_json::to_writer_pretty(&mut writer, products)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

impl ProductSink for JsonExporter {
    fn name(&self) -> &'static str {
        "JSON"
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
        write_json(BufWriter::new(file), products)?;

        tracing::info!(
            "JSON file saved: {} ({} products)",
            self.path.display(),
            products.len()
        );
        Ok(products.len())
    }
}
