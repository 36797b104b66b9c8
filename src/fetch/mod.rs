// src/fetch/mod.rs
use anyhow::{Context, Result};
use reqwest::Client;

/// The one page this tool knows how to read.
pub const PAGE_URL: &str = "https://en.wikipedia.org/wiki/List_of_municipalities_in_Colorado";

/// Issue a single GET and return the response body as text.
/// Non-2xx statuses and transport errors propagate; there is no retry.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("GET {} returned an error status", url))?;
    let body = resp
        .text()
        .await
        .with_context(|| format!("failed to read body of {}", url))?;
    Ok(body)
}
