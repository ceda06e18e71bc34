use anyhow::Result;
use clap::Parser;
use spdxscraper::{config::Config, fetch::HttpFetcher, scrape_licenses};
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging (stderr; stdout carries the CSV) ────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_writer(io::stderr)
        .init();

    // ─── 2) parse CLI ────────────────────────────────────────────────
    let config = Config::parse();
    info!(base_url = %config.base_url, "startup");

    // ─── 3) scrape the listing → CSV on stdout ───────────────────────
    let fetcher = HttpFetcher::new();
    let rows = scrape_licenses(&config, &fetcher, io::stdout().lock()).await?;

    info!(rows, "all done");
    Ok(())
}
