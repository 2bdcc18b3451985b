// src/models/selectors.rs

//! CSS selectors describing a product card.

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::Product;

/// CSS selectors for scraping a search results page.
///
/// Field selectors are evaluated relative to each container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Selector for each product card on the page
    #[serde(default = "defaults::container")]
    pub container: String,

    /// Selector for the product title within a card (required)
    #[serde(default = "defaults::name")]
    pub name: String,

    /// Selector for the price within a card (required)
    #[serde(default = "defaults::price")]
    pub price: String,

    /// Selector for the rating widget within a card (optional)
    #[serde(default = "defaults::rating")]
    pub rating: String,

    /// Value stored when the rating widget is absent
    #[serde(default = "defaults::rating_fallback")]
    pub rating_fallback: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            container: defaults::container(),
            name: defaults::name(),
            price: defaults::price(),
            rating: defaults::rating(),
            rating_fallback: defaults::rating_fallback(),
        }
    }
}

impl SelectorConfig {
    /// Check that every selector parses.
    pub fn validate(&self) -> Result<()> {
        for (field, selector) in [
            ("container", &self.container),
            ("name", &self.name),
            ("price", &self.price),
            ("rating", &self.rating),
        ] {
            if selector.trim().is_empty() {
                return Err(AppError::validation(format!(
                    "selectors.{field} is empty"
                )));
            }
            parse_selector(selector)?;
        }
        Ok(())
    }
}

/// Parse a CSS selector, mapping failures into [`AppError::Selector`].
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

mod defaults {
    use super::Product;

    // Attribute equality: the class list must match exactly, extra classes excluded.
    pub fn container() -> String {
        r#"article[class="prd _fb col c-prd"]"#.into()
    }
    pub fn name() -> String {
        "h3.name".into()
    }
    pub fn price() -> String {
        "div.prc".into()
    }
    pub fn rating() -> String {
        r#"div[class="stars _s"]"#.into()
    }
    pub fn rating_fallback() -> String {
        Product::NO_RATING.into()
    }
}
