//! shopscrape CLI
//!
//! Local execution entry point: loads the configuration, applies command
//! line overrides and runs the scrape pipeline once.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shopscrape::{
    error::Result,
    models::{Config, FetchErrorPolicy, OutputFormat},
    pipeline,
};

/// shopscrape - Shop Search Results Scraper
#[derive(Parser, Debug)]
#[command(
    name = "shopscrape",
    version,
    about = "Scrape product names, prices and ratings from shop search results"
)]

struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch result pages and write the product file
    Scrape {
        /// Search results URL, including the query
        #[arg(short, long)]
        url: Option<String>,

        /// Number of pages to fetch, starting at 1
        #[arg(short, long)]
        pages: Option<u32>,

        /// Output file (overwritten)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format: csv or json
        #[arg(short, long)]
        format: Option<String>,

        /// Pause after each page in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Continue with the next page when a page fails to download
        #[arg(long)]
        skip_failed: bool,
    },

    /// Validate configuration and selectors
    Validate,

    /// Show the effective configuration
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Config load failed from {}: {}", cli.config.display(), e);
            return Err(e);
        }
    };
    log::debug!("Loaded configuration from {}", cli.config.display());

    match cli.command {
        Command::Scrape {
            url,
            pages,
            output,
            format,
            delay_ms,
            skip_failed,
        } => {
            if let Some(url) = url {
                config.scraper.base_url = url;
            }
            if let Some(pages) = pages {
                config.scraper.pages = pages;
            }
            if let Some(path) = output {
                config.output.path = path;
            }
            if let Some(format) = format {
                config.output.format = format.parse::<OutputFormat>()?;
            }
            if let Some(delay) = delay_ms {
                config.scraper.request_delay_ms = delay;
            }
            if skip_failed {
                config.scraper.on_fetch_error = FetchErrorPolicy::Skip;
            }

            if let Err(e) = pipeline::run(&config).await {
                log::error!("Scrape failed: {}", e);
                return Err(e);
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK (target, pacing, selectors and output)");
        }

        Command::Info => {
            log::info!("Config file: {}", cli.config.display());
            println!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
