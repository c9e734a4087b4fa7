// src/app.rs
use anyhow::{bail, Context, Result};
use chrono::Utc;
use reqwest::Client;
use std::{path::PathBuf, time::Instant};
use tracing::{error, info, warn};

use crate::{
    chart::{render_svg, ChartSpec},
    config::Config,
    fetch, process,
    report::{render_page, write_page, Page, RenderedChart},
    series::{extract_series, Series},
};

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub output: PathBuf,
    pub points: usize,
    pub recent_points: usize,
}

/// Fetch, parse, chart and write the page. On failure an error page is
/// written to the same path and the original error is returned.
#[tracing::instrument(level = "info", skip(cfg, client), fields(output = %cfg.output.display()))]
pub async fn run(cfg: &Config, client: &Client) -> Result<Outcome> {
    let start = Instant::now();
    match build_page(cfg, client).await {
        Ok((page, outcome)) => {
            let html = render_page(&page, Utc::now())?;
            write_page(&cfg.output, &html)?;
            info!(
                points = outcome.points,
                recent = outcome.recent_points,
                elapsed = ?start.elapsed(),
                "wrote chart page"
            );
            Ok(outcome)
        }
        Err(err) => {
            error!("{:#}", err);
            let written = render_page(&Page::error(&err), Utc::now())
                .and_then(|html| write_page(&cfg.output, &html));
            if let Err(write_err) = written {
                warn!("could not write error page: {:#}", write_err);
            }
            Err(err)
        }
    }
}

async fn build_page(cfg: &Config, client: &Client) -> Result<(Page, Outcome)> {
    let text = fetch::load_csv_text(client, &cfg.source).await?;

    let rows = process::parse_csv(&text)?;
    if rows.is_empty() {
        bail!("No data rows in CSV.");
    }

    let series = extract_series(&rows, &cfg.columns);
    if series.is_empty() {
        bail!("No valid Year/Value pairs found.");
    }
    info!(rows = rows.len(), points = series.len(), "parsed series");

    chart_page(cfg, series)
}

/// Lay out and draw both charts for an already extracted series.
pub fn chart_page(cfg: &Config, series: Series) -> Result<(Page, Outcome)> {
    let size = (cfg.charts.width, cfg.charts.height);

    let full_spec = ChartSpec::full(&series, &cfg.charts, &cfg.columns)
        .context("No valid Year/Value pairs found.")?;
    let full = RenderedChart {
        title: full_spec.title.clone(),
        svg: render_svg(&full_spec, size)?,
        series: full_spec.series,
    };

    let recent = match ChartSpec::recent(&series, &cfg.charts, &cfg.columns) {
        Some(spec) => Some(RenderedChart {
            title: spec.title.clone(),
            svg: render_svg(&spec, size)?,
            series: spec.series,
        }),
        None => {
            warn!(
                start = cfg.charts.recent_start,
                end = cfg.charts.recent_end,
                "no points in recent window"
            );
            None
        }
    };

    let outcome = Outcome {
        output: cfg.output.clone(),
        points: series.len(),
        recent_points: recent.as_ref().map_or(0, |c| c.series.len()),
    };
    let page = Page::Charts {
        full,
        recent,
        recent_window: (cfg.charts.recent_start, cfg.charts.recent_end),
        series,
    };
    Ok((page, outcome))
}
