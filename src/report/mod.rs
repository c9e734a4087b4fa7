//! HTML page generation: either both charts or a single error message.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fmt::{self, Write as _};
use std::{fs, path::Path};

use crate::series::Series;

/// One chart, already drawn.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub title: String,
    pub svg: String,
    pub series: Series,
}

#[derive(Debug, Clone)]
pub enum Page {
    Charts {
        full: RenderedChart,
        /// `None` when no point falls in `recent_window`.
        recent: Option<RenderedChart>,
        recent_window: (i32, i32),
        series: Series,
    },
    Error {
        message: String,
    },
}

impl Page {
    /// Error page for `err`, showing its whole context chain so the
    /// underlying cause (refused connection, missing file) stays visible.
    pub fn error(err: &anyhow::Error) -> Self {
        Page::Error {
            message: format!("{:#}", err),
        }
    }
}

const STYLE: &str = r#"
    body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, Arial, sans-serif; margin: 0; color: #222; }
    .container { max-width: 1100px; margin: 0 auto; padding: 2rem; }
    .chart { margin-bottom: 3rem; }
    .chart svg { width: 100%; height: auto; }
    #loading { display: none; }
    #error { color: #b00020; background: #fdecea; border: 1px solid #f5c2c0; padding: 1rem; border-radius: 6px; }
    details { margin-top: 0.5rem; }
    table { border-collapse: collapse; font-size: 0.875rem; }
    td, th { padding: 0.2rem 0.8rem; border-bottom: 1px solid #eee; text-align: right; }
    footer { color: #777; font-size: 0.8rem; }
"#;

/// Render a complete HTML document.
pub fn render_page(page: &Page, generated_at: DateTime<Utc>) -> Result<String> {
    let title = match page {
        Page::Charts { full, .. } => html_escape(&full.title),
        Page::Error { .. } => "Agricultural share of GDP".to_string(),
    };

    let mut html = String::new();
    write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
<div class="container">
    <div id="loading">Loading data…</div>
"#,
    )?;

    match page {
        Page::Error { message } => {
            writeln!(
                html,
                r#"    <div id="error" style="display: block">Error: {}. Check the sheet URL and CORS if hosted locally.</div>
    <div id="charts" style="display: none"></div>"#,
                html_escape(message)
            )?;
        }
        Page::Charts {
            full,
            recent,
            recent_window,
            series,
        } => {
            html.push_str("    <div id=\"error\" style=\"display: none\"></div>\n");
            html.push_str("    <div id=\"charts\" style=\"display: block\">\n");
            push_chart(&mut html, "chart-full", full)?;
            match recent {
                Some(chart) => push_chart(&mut html, "chart-filtered", chart)?,
                None => {
                    writeln!(
                        html,
                        r#"        <section class="chart" id="chart-filtered"><p>No data in {}–{}.</p></section>"#,
                        recent_window.0, recent_window.1
                    )?;
                }
            }
            html.push_str("    </div>\n");
            writeln!(
                html,
                r#"    <script type="application/json" id="series-data">{}</script>"#,
                series_json(series)?
            )?;
        }
    }

    write!(
        html,
        r#"    <footer>Generated {}</footer>
</div>
</body>
</html>
"#,
        generated_at.format("%Y-%m-%d %H:%M UTC")
    )?;
    Ok(html)
}

fn push_chart(html: &mut String, id: &str, chart: &RenderedChart) -> fmt::Result {
    writeln!(html, r#"        <section class="chart" id="{}">"#, id)?;
    writeln!(html, "            <h2>{}</h2>", html_escape(&chart.title))?;
    html.push_str(&chart.svg);
    html.push('\n');

    html.push_str("            <details><summary>Data points</summary><table>\n");
    html.push_str("                <tr><th>Year</th><th>Value</th></tr>\n");
    for p in &chart.series.points {
        let [year, value] = p.hover_label();
        writeln!(
            html,
            r#"                <tr title="{}&#10;{}"><td>{}</td><td>{:.2}</td></tr>"#,
            html_escape(&year),
            html_escape(&value),
            p.year,
            p.value
        )?;
    }
    html.push_str("            </table></details>\n");
    html.push_str("        </section>\n");
    Ok(())
}

fn series_json(series: &Series) -> Result<String> {
    let json = serde_json::to_string(series).context("serializing series")?;
    Ok(json.replace("</", "<\\/"))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Write the page, creating parent directories as needed.
pub fn write_page(path: impl AsRef<Path>, html: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    fs::write(path, html).with_context(|| format!("writing page {}", path.display()))
}
