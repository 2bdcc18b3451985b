//! JSON file sink.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{OutputFormat, Product};
use crate::storage::{ProductSink, WriteSummary, ensure_parent_dir};
use crate::utils::console;

/// Writes products as a pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonSink {
    path: PathBuf,
}

impl JsonSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProductSink for JsonSink {
    fn write(&self, products: &[Product]) -> Result<WriteSummary> {
        ensure_parent_dir(&self.path)?;

        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, products)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        console::success(&format!("Data saved to {}", self.path.display()));

        Ok(WriteSummary {
            path: self.path.clone(),
            rows: products.len(),
            format: OutputFormat::Json,
        })
    }

    fn destination(&self) -> &Path {
        &self.path
    }
}
