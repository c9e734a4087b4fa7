// src/fetch/urls.rs
use anyhow::{Context, Result};
use url::Url;

use crate::config::SourceConfig;

static SHEETS_BASE: &str = "https://docs.google.com/spreadsheets/d/";

/// Build the CSV export URL for one tab (`gid`) of a published sheet.
pub fn csv_export_url(sheet_id: &str, gid: &str) -> Result<Url> {
    let base = Url::parse(SHEETS_BASE).context("parsing sheets base URL")?;
    let mut url = base
        .join(&format!("{}/export", sheet_id.trim()))
        .with_context(|| format!("building export URL for sheet {}", sheet_id))?;
    url.query_pairs_mut()
        .append_pair("format", "csv")
        .append_pair("gid", gid.trim());
    Ok(url)
}

/// The URL a source points at: the explicit override, or the export URL.
pub fn source_url(source: &SourceConfig) -> Result<Url> {
    match source.url.as_deref() {
        Some(raw) => Url::parse(raw).with_context(|| format!("parsing source URL {}", raw)),
        None => csv_export_url(&source.sheet_id, &source.gid),
    }
}
