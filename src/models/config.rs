//! Application configuration structures.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::SelectorConfig;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Target, pacing and HTTP settings
    #[serde(default)]
    pub scraper: ScraperConfig,

    /// Product card selectors
    #[serde(default)]
    pub selectors: SelectorConfig,

    /// Output destination settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration, or return the defaults when the file does not exist.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("Config file {:?} not found. Using defaults.", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        let base = url::Url::parse(&self.scraper.base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::validation(format!(
                "scraper.base_url must be http(s), got '{}'",
                base.scheme()
            )));
        }
        if self.scraper.pages == 0 {
            return Err(AppError::validation("scraper.pages must be >= 1"));
        }
        if self.scraper.user_agent.trim().is_empty() {
            return Err(AppError::validation("scraper.user_agent is empty"));
        }
        if self.scraper.timeout_secs == Some(0) {
            return Err(AppError::validation("scraper.timeout_secs must be > 0"));
        }
        if self.output.path.trim().is_empty() {
            return Err(AppError::validation("output.path is empty"));
        }
        self.selectors.validate()
    }
}

/// Target and HTTP behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Search results URL, including the query
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Number of result pages to fetch, starting at page 1
    #[serde(default = "defaults::pages")]
    pub pages: u32,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds; the client default applies when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Pause after each page in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,

    /// What to do when a page cannot be fetched
    #[serde(default)]
    pub on_fetch_error: FetchErrorPolicy,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            pages: defaults::pages(),
            user_agent: defaults::user_agent(),
            timeout_secs: None,
            request_delay_ms: defaults::request_delay(),
            on_fetch_error: FetchErrorPolicy::default(),
        }
    }
}

/// Handling of a page that fails to download.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchErrorPolicy {
    /// Stop the run; nothing is written
    #[default]
    Abort,
    /// Log the failure and continue with the next page
    Skip,
}

/// Output destination settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Destination file, overwritten on every run
    #[serde(default = "defaults::output_path")]
    pub path: String,

    /// File format
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: defaults::output_path(),
            format: OutputFormat::default(),
        }
    }
}

/// Supported output file formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => f.write_str("csv"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::config(format!(
                "Unknown output format '{other}'. Use: csv or json"
            ))),
        }
    }
}

mod defaults {
    pub fn base_url() -> String {
        "https://www.jumia.com.ng/catalog/?q=smartphones".into()
    }
    pub fn pages() -> u32 {
        3
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/85.0.4183.121 Safari/537.36"
            .into()
    }
    pub fn request_delay() -> u64 {
        1000
    }
    pub fn output_path() -> String {
        "jumia_products.csv".into()
    }
}
