//! Document fetching: one trait, one implementation per target.

#[cfg(debug_assertions)]
use crate::config::PRINT_DOCUMENT_FETCHES;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Fetches the raw text of a JSON document.
///
/// Single-threaded by construction (`?Send`): the widgets run on one event loop.
#[async_trait(?Send)]
pub trait FetchDocument {
    /// Fetch the body at `location`. Non-success HTTP statuses are errors.
    async fn fetch_text(&self, location: &str) -> Result<String>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Widgets running on the same event loop can share one fetcher.
#[async_trait(?Send)]
impl<T: FetchDocument + ?Sized> FetchDocument for std::rc::Rc<T> {
    async fn fetch_text(&self, location: &str) -> Result<String> {
        (**self).fetch_text(location).await
    }

    fn signature(&self) -> &'static str {
        (**self).signature()
    }
}

/// Fetch `location` and decode it as `T`.
pub async fn fetch_json<T, F>(fetcher: &F, location: &str) -> Result<T>
where
    T: DeserializeOwned,
    F: FetchDocument + ?Sized,
{
    #[cfg(debug_assertions)]
    if PRINT_DOCUMENT_FETCHES {
        log::info!("[{}] GET {}", fetcher.signature(), location);
    }

    let body = fetcher.fetch_text(location).await?;
    serde_json::from_str(&body).with_context(|| format!("Malformed JSON document at {location}"))
}

pub fn is_http_location(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Native fetcher: http(s) URLs go through reqwest, anything else is read from disk.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone)]
pub struct NativeFetcher {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl NativeFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("bearhedge-widgets/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl FetchDocument for NativeFetcher {
    fn signature(&self) -> &'static str {
        "Native (reqwest / fs)"
    }

    async fn fetch_text(&self, location: &str) -> Result<String> {
        if !is_http_location(location) {
            return tokio::fs::read_to_string(location)
                .await
                .with_context(|| format!("Failed to read {location}"));
        }

        let response = self
            .client
            .get(location)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .with_context(|| format!("Request failed: {location}"))?
            .error_for_status()
            .with_context(|| format!("Bad HTTP status from {location}"))?;

        response
            .text()
            .await
            .with_context(|| format!("Failed to read body of {location}"))
    }
}

/// Browser fetcher: `fetch()` via gloo-net. Relative URLs resolve against the page.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFetcher;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl FetchDocument for BrowserFetcher {
    fn signature(&self) -> &'static str {
        "Browser fetch"
    }

    async fn fetch_text(&self, location: &str) -> Result<String> {
        use anyhow::{anyhow, bail};
        use gloo_net::http::Request;

        let response = Request::get(location)
            .header("Accept", "application/json")
            .credentials(web_sys::RequestCredentials::Omit)
            .send()
            .await
            .map_err(|e| anyhow!("Request failed: {location}: {e}"))?;

        if !response.ok() {
            bail!("HTTP {} from {}", response.status(), location);
        }

        response
            .text()
            .await
            .map_err(|e| anyhow!("Failed to read body of {location}: {e}"))
    }
}
