//! Product record structure.

use serde::{Deserialize, Serialize};

/// A product listing extracted from a search results page.
///
/// All fields hold the text as it appeared on the page. Prices keep their
/// currency symbol and separators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Product title
    pub name: String,

    /// Displayed price
    pub price: String,

    /// Rating widget text, or [`Product::NO_RATING`]
    pub rating: String,
}

impl Product {
    /// Placeholder stored in `rating` when the listing has no rating widget.
    pub const NO_RATING: &'static str = "No Rating";

    /// Column labels, in output order.
    pub const HEADERS: [&'static str; 3] = ["Name", "Price", "Rating"];

    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        rating: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            rating: rating.into(),
        }
    }

    /// Fields in [`Product::HEADERS`] order.
    pub fn to_record(&self) -> [&str; 3] {
        [&self.name, &self.price, &self.rating]
    }
}
