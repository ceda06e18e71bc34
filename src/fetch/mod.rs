// src/fetch/mod.rs

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

pub mod license_text;
pub mod links;

/// Anything that can turn a URL into a page body.
#[async_trait]
pub trait Fetch {
    /// GET `url` and return the decoded body.
    async fn get_text(&self, url: &Url) -> Result<String>;
}

/// [`Fetch`] over a plain `reqwest` client with library defaults.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get_text(&self, url: &Url) -> Result<String> {
        get_page(&self.client, url).await
    }
}

/// One GET, no retries. Any status outside 2xx is an error naming the page.
#[instrument(level = "debug", skip(client, url), fields(url = %url))]
async fn get_page(client: &Client, url: &Url) -> Result<String> {
    debug!("GET {}", url);
    let resp = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("requesting page {}", url))?;

    let status = resp.status();
    if !status.is_success() {
        bail!("page {} answered {}", url, status);
    }

    resp.text()
        .await
        .with_context(|| format!("decoding body of page {}", url))
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Fetch;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use std::{collections::HashMap, sync::Mutex};
    use url::Url;

    /// Serves canned pages from memory and remembers what was asked for.
    #[derive(Default)]
    pub(crate) struct MemoryFetcher {
        pages: HashMap<String, String>,
        requested: Mutex<Vec<String>>,
    }

    impl MemoryFetcher {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn with_page(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.to_string());
            self
        }

        pub(crate) fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Fetch for MemoryFetcher {
        async fn get_text(&self, url: &Url) -> Result<String> {
            self.requested.lock().unwrap().push(url.to_string());
            self.pages
                .get(url.as_str())
                .cloned()
                .ok_or_else(|| anyhow!("404 Not Found: {}", url))
        }
    }
}
