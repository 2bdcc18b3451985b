//! Service layer for the scraper.
//!
//! This module contains the per-page work:
//! - Page fetching (`PageFetcher`, `HttpFetcher`)
//! - Product extraction (`ProductExtractor`)

mod extractor;
mod fetcher;

pub use extractor::{FieldRule, PageExtraction, Presence, ProductExtractor, ProductSelectors};
pub use fetcher::{HttpFetcher, PageFetcher};

#[cfg(test)]
pub(crate) use extractor::tests::{card, page};
