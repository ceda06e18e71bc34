pub mod config;
pub mod fetch;
pub mod html;
pub mod table;

use anyhow::{Context, Result};
use std::io::Write;
use tracing::{info, instrument};

use crate::{config::Config, fetch::Fetch, html::Document};

/// Fetch the listing page, locate its first table and write it as CSV.
///
/// Rows are written and flushed one at a time, so a failure part-way through
/// leaves the rows already emitted in `out`.
#[instrument(level = "info", skip(config, fetcher, out), fields(base_url = %config.base_url))]
pub async fn scrape_licenses<F, W>(config: &Config, fetcher: &F, out: W) -> Result<usize>
where
    F: Fetch + ?Sized,
    W: Write,
{
    let body = fetcher
        .get_text(&config.base_url)
        .await
        .with_context(|| format!("fetching license list {}", config.base_url))?;

    let doc = Document::parse(&body);
    let table = doc
        .first_table()
        .with_context(|| format!("reading license list {}", config.base_url))?;

    let rows = table::dump_licenses_from_table(table, fetcher, &config.base_url, out).await?;
    info!(rows, "license table written");
    Ok(rows)
}
