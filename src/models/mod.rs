// src/models/mod.rs

//! Domain models for the scraper.
//!
//! This module contains the product record and the configuration
//! structures that drive a run.

mod config;
mod product;
mod selectors;

// Re-export all public types
pub use config::{Config, FetchErrorPolicy, OutputConfig, OutputFormat, ScraperConfig};
pub use product::Product;
pub use selectors::{SelectorConfig, parse_selector};
