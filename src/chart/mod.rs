// src/chart/mod.rs
use crate::{
    config::{ChartsConfig, ColumnConfig},
    series::Series,
};

pub mod axis;
pub mod render;
pub mod ticks;

pub use render::render_svg;

use ticks::{aligned_year_ticks, padded_range, uniform_ticks, year_ticks};

/// Everything needed to draw one scatter chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f64, f64),
    pub x_ticks: Vec<i32>,
    pub y_range: (f64, f64),
    pub y_ticks: Vec<f64>,
    pub series: Series,
}

impl ChartSpec {
    /// Whole history. Returns `None` for an empty series.
    pub fn full(series: &Series, charts: &ChartsConfig, columns: &ColumnConfig) -> Option<Self> {
        let (vmin, vmax) = series.value_bounds()?;
        let (first, last) = series.year_bounds()?;
        let y_range = padded_range(vmin, vmax);
        let x_ticks = aligned_year_ticks(first, last, charts.full_x_step);

        Some(Self {
            title: charts.full_title.clone(),
            x_label: columns.year.clone(),
            y_label: columns.value.clone(),
            x_range: year_window(first, last),
            x_ticks,
            y_range,
            y_ticks: uniform_ticks(y_range.0, y_range.1, charts.full_y_step),
            series: series.clone(),
        })
    }

    /// Recent window only. `None` when no point falls inside it.
    pub fn recent(series: &Series, charts: &ChartsConfig, columns: &ColumnConfig) -> Option<Self> {
        let subset = series.between(charts.recent_start, charts.recent_end);
        let (vmin, vmax) = subset.value_bounds()?;
        let y_range = padded_range(vmin, vmax);

        Some(Self {
            title: charts.recent_title.clone(),
            x_label: columns.year.clone(),
            y_label: columns.value.clone(),
            x_range: year_window(charts.recent_start, charts.recent_tick_end),
            x_ticks: year_ticks(charts.recent_start, charts.recent_tick_end, 1),
            y_range,
            y_ticks: uniform_ticks(y_range.0, y_range.1, charts.recent_y_step),
            series: subset,
        })
    }
}

/// Half a year of margin on each side so edge markers aren't clipped.
fn year_window(first: i32, last: i32) -> (f64, f64) {
    (first as f64 - 0.5, last as f64 + 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Point;

    fn sample() -> Series {
        Series {
            points: (1961..=2024)
                .map(|year| Point {
                    year,
                    value: if year >= 2011 { 1.2 + (year - 2011) as f64 * 0.05 } else { 20.0 },
                })
                .collect(),
        }
    }

    #[test]
    fn full_chart_layout() {
        let spec =
            ChartSpec::full(&sample(), &ChartsConfig::default(), &ColumnConfig::default()).unwrap();
        assert_eq!(spec.x_label, "Year");
        assert_eq!(spec.y_label, crate::config::DEFAULT_VALUE_COLUMN);
        assert_eq!(spec.series.len(), 64);
        assert!((spec.y_range.0 - 1.08).abs() < 1e-9);
        assert!((spec.y_range.1 - 22.0).abs() < 1e-9);
        assert_eq!(spec.y_ticks, vec![0.0, 5.0, 10.0, 15.0, 20.0]);
        assert_eq!(spec.x_ticks.first(), Some(&1960));
        assert_eq!(spec.x_ticks.last(), Some(&2025));
    }

    #[test]
    fn recent_chart_layout() {
        let spec =
            ChartSpec::recent(&sample(), &ChartsConfig::default(), &ColumnConfig::default())
                .unwrap();
        assert_eq!(spec.series.len(), 14);
        assert_eq!(spec.x_ticks, (2011..=2025).collect::<Vec<_>>());
        assert_eq!(spec.x_range, (2010.5, 2025.5));
        assert!(spec.y_ticks.iter().all(|t| (t * 2.0).fract() == 0.0));
        assert_eq!(spec.y_ticks.first(), Some(&1.0));
    }

    #[test]
    fn recent_chart_absent_without_recent_data() {
        let old = sample().between(1961, 2000);
        assert!(ChartSpec::recent(&old, &ChartsConfig::default(), &ColumnConfig::default())
            .is_none());
        assert!(ChartSpec::full(&old, &ChartsConfig::default(), &ColumnConfig::default())
            .is_some());
    }
}
