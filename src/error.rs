// src/error.rs

//! Unified error handling for the scraper.

use std::fmt;

use thiserror::Error;

/// Result type alias for scraper operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// Everything here is fatal for the run. Per-product extraction failures
/// are reported separately as [`ExtractError`] and never abort a page.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be built or a request failed outside a page fetch
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization failed
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Fetching a single results page failed
    #[error("Failed to fetch page {page} ({url}): {source}")]
    Fetch {
        page: u32,
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl AppError {
    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a page fetch error.
    pub fn fetch(page: u32, url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Fetch {
            page,
            url: url.into(),
            source,
        }
    }
}

/// A product container that could not be turned into a record.
///
/// Recoverable: the container is dropped and extraction moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("product #{position}: missing required field '{field}' (no match for '{selector}')")]
pub struct ExtractError {
    /// 1-based position of the container on its page
    pub position: usize,
    /// Name of the field rule that failed
    pub field: &'static str,
    /// Selector the rule was evaluated with
    pub selector: String,
}
