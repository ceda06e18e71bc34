// src/config.rs

use clap::Parser;
use url::Url;

/// SPDX License List page scraped when no `--base-url` is given.
pub const DEFAULT_BASE_URL: &str = "https://spdx.org/licenses";

/// Extract the list of open source licenses from the SPDX web page to CSV.
///
/// The CSV is written to standard output.
#[derive(Debug, Clone, Parser)]
#[command(name = "spdxscraper", version)]
pub struct Config {
    /// SPDX License List page URL
    #[arg(long = "base-url", value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: Url,
}

impl Config {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }
}
