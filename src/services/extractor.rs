// src/services/extractor.rs

//! Product record extraction.
//!
//! Turns one results page into product records using a compiled set of
//! selectors. Every container is handled on its own: a card missing a
//! required field is dropped and reported, and the rest of the page is
//! still extracted.

use scraper::{ElementRef, Html, Selector};

use crate::error::{ExtractError, Result};
use crate::models::{Product, SelectorConfig, parse_selector};
use crate::utils::element_text;

/// Whether a field must be present in every container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presence {
    /// Missing element drops the container
    Required,
    /// Missing element yields the fallback value
    Optional { fallback: String },
}

/// A named extraction rule evaluated inside one container.
#[derive(Debug, Clone)]
pub struct FieldRule {
    field: &'static str,
    source: String,
    selector: Selector,
    presence: Presence,
}

impl FieldRule {
    fn compile(field: &'static str, source: &str, presence: Presence) -> Result<Self> {
        Ok(Self {
            field,
            source: source.to_string(),
            selector: parse_selector(source)?,
            presence,
        })
    }

    /// Evaluate the rule against a container at 1-based `position`.
    fn evaluate(
        &self,
        container: &ElementRef<'_>,
        position: usize,
    ) -> std::result::Result<String, ExtractError> {
        match container.select(&self.selector).next() {
            Some(element) => Ok(element_text(&element)),
            None => match &self.presence {
                Presence::Optional { fallback } => Ok(fallback.clone()),
                Presence::Required => Err(ExtractError {
                    position,
                    field: self.field,
                    selector: self.source.clone(),
                }),
            },
        }
    }
}

/// Compiled selectors for a product card.
#[derive(Debug, Clone)]
pub struct ProductSelectors {
    container: Selector,
    name: FieldRule,
    price: FieldRule,
    rating: FieldRule,
}

impl ProductSelectors {
    /// Compile a selector configuration.
    pub fn compile(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            container: parse_selector(&config.container)?,
            name: FieldRule::compile("name", &config.name, Presence::Required)?,
            price: FieldRule::compile("price", &config.price, Presence::Required)?,
            rating: FieldRule::compile(
                "rating",
                &config.rating,
                Presence::Optional {
                    fallback: config.rating_fallback.clone(),
                },
            )?,
        })
    }
}

/// Result of extracting a single page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageExtraction {
    /// Records in document order
    pub products: Vec<Product>,

    /// One entry per dropped container
    pub failures: Vec<ExtractError>,

    /// Number of containers matched on the page
    pub containers: usize,
}

/// Extracts product records from results page markup.
pub struct ProductExtractor {
    selectors: ProductSelectors,
}

impl ProductExtractor {
    /// Create an extractor from a selector configuration.
    pub fn new(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            selectors: ProductSelectors::compile(config)?,
        })
    }

    /// Extract every product on a page.
    pub fn extract(&self, markup: &str) -> PageExtraction {
        let document = Html::parse_document(markup);
        let mut page = PageExtraction::default();

        for (index, container) in document.select(&self.selectors.container).enumerate() {
            page.containers += 1;
            match self.extract_product(&container, index + 1) {
                Ok(product) => page.products.push(product),
                Err(error) => {
                    log::warn!("Error extracting data for a product: {}", error);
                    page.failures.push(error);
                }
            }
        }

        page
    }

    fn extract_product(
        &self,
        container: &ElementRef<'_>,
        position: usize,
    ) -> std::result::Result<Product, ExtractError> {
        let name = self.selectors.name.evaluate(container, position)?;
        let price = self.selectors.price.evaluate(container, position)?;
        let rating = self.selectors.rating.evaluate(container, position)?;
        Ok(Product {
            name,
            price,
            rating,
        })
    }
}
