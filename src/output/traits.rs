//! Export sink trait and errors
//!
//! Every export format implements [`ProductSink`]. Sinks receive the full,
//! ordered list of records accumulated by the walker.

use crate::product::ProductRecord;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Destination for harvested product records
pub trait ProductSink {
    /// Short format name used in log lines (e.g. "CSV")
    fn name(&self) -> &'static str;

    /// Where the sink writes
    fn destination(&self) -> String;

    /// Writes all records
    ///
    /// An empty slice is not an error: nothing is written, a notice is
    /// logged, and `Ok(0)` is returned.
    ///
    /// # Returns
    ///
    /// The number of records written
    fn write(&self, products: &[ProductRecord]) -> OutputResult<usize>;
}
