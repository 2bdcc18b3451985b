//! CSV file sink.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{OutputFormat, Product};
use crate::storage::{ProductSink, WriteSummary, ensure_parent_dir};
use crate::utils::console;

/// Writes products as `Name,Price,Rating` rows.
#[derive(Debug, Clone)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProductSink for CsvSink {
    fn write(&self, products: &[Product]) -> Result<WriteSummary> {
        ensure_parent_dir(&self.path)?;

        // Header goes out explicitly so an empty run still gets one.
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(Product::HEADERS)?;
        for product in products {
            writer.write_record(product.to_record())?;
        }
        writer.flush()?;

        console::success(&format!("Data saved to {}", self.path.display()));

        Ok(WriteSummary {
            path: self.path.clone(),
            rows: products.len(),
            format: OutputFormat::Csv,
        })
    }

    fn destination(&self) -> &Path {
        &self.path
    }
}
