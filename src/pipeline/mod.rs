//! Pipeline entry points for scraper operations.
//!
//! - `run`: scrape with the HTTP fetcher and the configured sink
//! - `run_scraper`: fetch, extract and collect every page, then write once
//! - `ProductCollector`: the ordered result sequence

pub mod collect;
pub mod scrape;

pub use collect::ProductCollector;
pub use scrape::{ScrapeOutcome, Stage, run, run_scraper};
