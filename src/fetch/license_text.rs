// src/fetch/license_text.rs

use anyhow::{Context, Result};
use tracing::{debug, instrument};
use url::Url;

use super::Fetch;
use crate::html::Document;

/// Fetch a license page and pull the text out of its license text container.
///
/// `Ok(None)` when the page has no container, or an empty one.
#[instrument(level = "debug", skip(fetcher, url), fields(url = %url))]
pub async fn get_license_text<F>(fetcher: &F, url: &Url) -> Result<Option<String>>
where
    F: Fetch + ?Sized,
{
    let html = fetcher
        .get_text(url)
        .await
        .with_context(|| format!("fetching license text page {}", url))?;
    let text = Document::parse(&html).license_text();
    if text.is_none() {
        debug!("no license text container");
    }
    Ok(text)
}
