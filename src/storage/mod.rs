//! Output sinks for collected products.
//!
//! A sink receives the full result sequence once, at the end of a run, and
//! replaces whatever file sits at its destination.

pub mod csv;
pub mod json;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{OutputConfig, OutputFormat, Product};

// Re-export for convenience
pub use self::csv::CsvSink;
pub use self::json::JsonSink;

/// Metadata about a completed write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    /// File that was written
    pub path: PathBuf,
    /// Number of product rows
    pub rows: usize,
    /// Format of the file
    pub format: OutputFormat,
}

/// Trait for product output backends.
pub trait ProductSink {
    /// Write all products in order, replacing the destination.
    fn write(&self, products: &[Product]) -> Result<WriteSummary>;

    /// Destination this sink writes to.
    fn destination(&self) -> &Path;
}

/// Build the sink selected by the output configuration.
pub fn sink_for(output: &OutputConfig) -> Box<dyn ProductSink> {
    match output.format {
        OutputFormat::Csv => Box::new(CsvSink::new(&output.path)),
        OutputFormat::Json => Box::new(JsonSink::new(&output.path)),
    }
}

/// Ensure the parent directory of `path` exists.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_for_format() {
        let mut output = OutputConfig {
            path: "out/products.json".to_string(),
            format: OutputFormat::Json,
        };
        assert_eq!(
            sink_for(&output).destination(),
            Path::new("out/products.json")
        );

        output.format = OutputFormat::Csv;
        output.path = "products.csv".to_string();
        assert_eq!(sink_for(&output).destination(), Path::new("products.csv"));
    }
}
