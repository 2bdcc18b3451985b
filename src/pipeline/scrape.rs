// src/pipeline/scrape.rs

//! Scrape driver.
//!
//! Walks pages `1..=N` strictly in order. Each page goes through
//! fetching, extracting and a fixed pause; the sink runs once after the
//! last page.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::error::{AppError, Result};
use crate::models::{Config, FetchErrorPolicy, Product, ScraperConfig};
use crate::pipeline::ProductCollector;
use crate::services::{HttpFetcher, PageFetcher, ProductExtractor};
use crate::storage::{ProductSink, WriteSummary, sink_for};
use crate::utils::console;

/// Where the driver is within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetching,
    Extracting,
    Paused,
    Writing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Fetching => "fetching",
            Stage::Extracting => "extracting",
            Stage::Paused => "paused",
            Stage::Writing => "writing",
        };
        f.write_str(name)
    }
}

/// Summary of a scrape run.
#[derive(Debug)]
pub struct ScrapeOutcome {
    pub products: Vec<Product>,
    pub pages_total: u32,
    pub pages_failed: u32,
    pub containers_total: usize,
    pub containers_skipped: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub written: WriteSummary,
}

/// Validate `config`, wire up the HTTP fetcher and configured sink, and run.
pub async fn run(config: &Config) -> Result<ScrapeOutcome> {
    config.validate()?;

    let extractor = ProductExtractor::new(&config.selectors)?;
    let fetcher = HttpFetcher::new(&config.scraper)?;
    let sink = sink_for(&config.output);

    run_scraper(&config.scraper, &fetcher, &extractor, sink.as_ref()).await
}

/// Run the scraper over the configured pages and write the results.
pub async fn run_scraper(
    config: &ScraperConfig,
    fetcher: &dyn PageFetcher,
    extractor: &ProductExtractor,
    sink: &dyn ProductSink,
) -> Result<ScrapeOutcome> {
    if config.pages == 0 {
        return Err(AppError::validation("page count must be >= 1"));
    }

    let started_at = Utc::now();
    let delay = Duration::from_millis(config.request_delay_ms);
    let total = config.pages;

    console::header(&format!("Scraping {} page(s) of {}", total, config.base_url));

    let mut collector = ProductCollector::new();
    let mut pages_failed = 0;
    let mut containers_total = 0;
    let mut containers_skipped = 0;

    for page in 1..=total {
        log::debug!("page {}/{}: {}", page, total, Stage::Fetching);

        match fetcher.fetch_page(page).await {
            Ok(markup) => {
                log::debug!("page {}/{}: {}", page, total, Stage::Extracting);
                let extraction = extractor.extract(&markup);

                containers_total += extraction.containers;
                containers_skipped += extraction.failures.len();
                console::step(
                    page,
                    total,
                    &format!(
                        "{} product(s), {} skipped",
                        extraction.products.len(),
                        extraction.failures.len()
                    ),
                );

                collector.extend_page(page, extraction.products);
            }
            Err(error) => match config.on_fetch_error {
                FetchErrorPolicy::Abort => return Err(error),
                FetchErrorPolicy::Skip => {
                    pages_failed += 1;
                    log::warn!("Skipping page {}: {}", page, error);
                }
            },
        }

        if !delay.is_zero() {
            log::debug!("page {}/{}: {} for {:?}", page, total, Stage::Paused, delay);
            tokio::time::sleep(delay).await;
        }
    }

    log::debug!(
        "{} {} product(s) to {}",
        Stage::Writing,
        collector.len(),
        sink.destination().display()
    );
    let written = sink.write(collector.as_slice())?;
    let finished_at = Utc::now();

    console::summary(
        "Scrape finished",
        &[
            ("Pages", total.to_string()),
            ("Failed pages", pages_failed.to_string()),
            ("Containers", containers_total.to_string()),
            ("Skipped containers", containers_skipped.to_string()),
            ("Records", written.rows.to_string()),
            ("Output", written.path.display().to_string()),
            (
                "Elapsed",
                format!(
                    "{:.1}s",
                    (finished_at - started_at).num_milliseconds() as f64 / 1000.0
                ),
            ),
        ],
    );

    Ok(ScrapeOutcome {
        products: collector.into_products(),
        pages_total: total,
        pages_failed,
        containers_total,
        containers_skipped,
        started_at,
        finished_at,
        written,
    })
}
