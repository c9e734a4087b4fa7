// src/config.rs

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_SHEET_ID: &str = "1n7oWCkQZM9bsEzBRhqRe6Ky3J7VfGa-gjhee-K1B7bk";
pub const DEFAULT_GID: &str = "1161513038";
pub const DEFAULT_VALUE_COLUMN: &str = "Value added in the agricultural sector as percent of GDP";

/// Where the CSV comes from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub sheet_id: String,
    pub gid: String,
    /// Full export URL; wins over `sheet_id` / `gid` when set.
    pub url: Option<String>,
    /// Read the CSV from disk instead of the network.
    pub input: Option<PathBuf>,
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            sheet_id: DEFAULT_SHEET_ID.to_string(),
            gid: DEFAULT_GID.to_string(),
            url: None,
            input: None,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColumnConfig {
    pub year: String,
    pub value: String,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            year: "Year".to_string(),
            value: DEFAULT_VALUE_COLUMN.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    pub full_title: String,
    pub recent_title: String,
    /// First year of the recent-years chart (inclusive).
    pub recent_start: i32,
    /// Last year of the recent-years chart (inclusive).
    pub recent_end: i32,
    /// Last labelled year on the recent chart's x axis.
    pub recent_tick_end: i32,
    pub full_y_step: f64,
    pub recent_y_step: f64,
    pub full_x_step: i32,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            full_title:
                "Value Added in the Agricultural Sector as a Percent of Omani GDP Historically"
                    .to_string(),
            recent_title:
                "Value Added in the Agricultural Sector as a Percent of Omani GDP (2011 - 2024)"
                    .to_string(),
            recent_start: 2011,
            recent_end: 2024,
            recent_tick_end: 2025,
            full_y_step: 5.0,
            recent_y_step: 0.5,
            full_x_step: 5,
            width: 1000,
            height: 560,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub columns: ColumnConfig,
    pub charts: ChartsConfig,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            columns: ColumnConfig::default(),
            charts: ChartsConfig::default(),
            output: PathBuf::from("index.html"),
        }
    }
}

impl Config {
    /// Load a YAML config file. Keys that are absent keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let cfg: Config = serde_yaml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        let c = &self.charts;
        if !(c.full_y_step.is_finite() && c.full_y_step > 0.0) {
            bail!("full_y_step must be a positive number, got {}", c.full_y_step);
        }
        if !(c.recent_y_step.is_finite() && c.recent_y_step > 0.0) {
            bail!(
                "recent_y_step must be a positive number, got {}",
                c.recent_y_step
            );
        }
        if c.full_x_step <= 0 {
            bail!("full_x_step must be positive, got {}", c.full_x_step);
        }
        if c.recent_start > c.recent_end {
            bail!(
                "recent window is inverted: {} > {}",
                c.recent_start,
                c.recent_end
            );
        }
        if c.recent_tick_end < c.recent_start {
            bail!(
                "recent_tick_end {} is before recent_start {}",
                c.recent_tick_end,
                c.recent_start
            );
        }
        if c.width == 0 || c.height == 0 {
            bail!("chart dimensions must be non-zero");
        }
        if self.columns.value.trim().is_empty() || self.columns.year.trim().is_empty() {
            bail!("column names must not be empty");
        }
        Ok(())
    }
}
