// src/fetch/mod.rs

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use std::{path::Path, time::Duration};
use tokio::fs;
use tracing::{debug, info};
use url::Url;

use crate::config::SourceConfig;

pub mod urls;

/// Build the HTTP client used for the sheet download.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("building HTTP client")
}

/// GET the CSV body. A single attempt; non-2xx statuses are errors.
#[tracing::instrument(level = "info", skip(client, url), fields(url = %url))]
pub async fn fetch_csv(client: &Client, url: &Url) -> Result<String> {
    let resp = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("GET {}", url))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(anyhow!(
            "Failed to load data: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("")
        ));
    }

    let body = resp
        .text()
        .await
        .with_context(|| format!("reading body from {}", url))?;
    debug!(bytes = body.len(), "downloaded csv");
    Ok(body)
}

/// Read a CSV that was saved to disk.
pub async fn read_csv_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path)
        .await
        .with_context(|| format!("reading CSV file {}", path.display()))
}

/// Load CSV text from whichever source the config names.
pub async fn load_csv_text(client: &Client, source: &SourceConfig) -> Result<String> {
    if let Some(path) = source.input.as_deref() {
        info!(path = %path.display(), "reading local csv");
        return read_csv_file(path).await;
    }
    let url = urls::source_url(source)?;
    info!(%url, "fetching csv");
    fetch_csv(client, &url).await
}
