use agrishare::{app, config::Config, fetch};
use anyhow::{Context, Result};
use clap::Parser;
use std::{path::PathBuf, time::Duration};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "agrishare")]
#[command(about = "Chart a country's agricultural share of GDP from a published sheet")]
struct Args {
    /// YAML config file; flags below override its values
    #[arg(short, long, env = "AGRISHARE_CONFIG")]
    config: Option<PathBuf>,

    /// Where to write the HTML page
    #[arg(short, long, env = "AGRISHARE_OUTPUT")]
    output: Option<PathBuf>,

    /// Published spreadsheet id
    #[arg(long, env = "AGRISHARE_SHEET_ID")]
    sheet_id: Option<String>,

    /// Sheet tab id
    #[arg(long, env = "AGRISHARE_GID")]
    gid: Option<String>,

    /// Full CSV URL (overrides sheet id / gid)
    #[arg(long, env = "AGRISHARE_URL")]
    url: Option<String>,

    /// Read the CSV from a local file instead of the network
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> Result<Config> {
        let mut cfg = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(output) = self.output {
            cfg.output = output;
        }
        if let Some(sheet_id) = self.sheet_id {
            cfg.source.sheet_id = sheet_id;
        }
        if let Some(gid) = self.gid {
            cfg.source.gid = gid;
        }
        if let Some(url) = self.url {
            cfg.source.url = Some(url);
        }
        if let Some(input) = self.input {
            cfg.source.input = Some(input);
        }
        if let Some(timeout) = self.timeout {
            cfg.source.timeout_secs = timeout;
        }
        cfg.validate().context("invalid configuration")?;
        Ok(cfg)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // ─── 1) init logging ─────────────────────────────────────────────
    let default_level = if args.verbose { "debug" } else { "info" };
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},agrishare={}", default_level, default_level)));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) configure ────────────────────────────────────────────────
    let cfg = args.into_config()?;
    let client = fetch::build_client(Duration::from_secs(cfg.source.timeout_secs))?;

    // ─── 3) fetch → parse → chart → page ─────────────────────────────
    let outcome = app::run(&cfg, &client).await?;
    info!(
        "wrote {} ({} points, {} in recent window)",
        outcome.output.display(),
        outcome.points,
        outcome.recent_points
    );
    Ok(())
}
