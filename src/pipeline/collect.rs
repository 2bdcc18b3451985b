// src/pipeline/collect.rs

//! Ordered accumulation of products across pages.

use crate::models::Product;

/// Running result sequence for a scrape.
///
/// Pages are appended in the order they were processed and each page keeps
/// its document order. Nothing is filtered, deduplicated or reordered.
#[derive(Debug, Default, Clone)]
pub struct ProductCollector {
    products: Vec<Product>,
}

impl ProductCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the records extracted from `page`.
    pub fn extend_page(&mut self, page: u32, products: Vec<Product>) {
        log::debug!("Collected {} product(s) from page {}", products.len(), page);
        self.products.extend(products);
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    pub fn into_products(self) -> Vec<Product> {
        self.products
    }
}
