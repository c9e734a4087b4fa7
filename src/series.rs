// src/series.rs
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::ColumnConfig;
use crate::process::{
    utils::{parse_float_prefix, parse_int_prefix},
    Row,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub year: i32,
    pub value: f64,
}

impl Point {
    /// Label shown alongside a marker, one line per entry.
    pub fn hover_label(&self) -> [String; 2] {
        [
            format!("Year: {}", self.year),
            format!("Value: {:.2}", self.value),
        ]
    }
}

/// Year/value pairs in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    pub points: Vec<Point>,
}

impl Series {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Points with `start <= year <= end`.
    pub fn between(&self, start: i32, end: i32) -> Series {
        Series {
            points: self
                .points
                .iter()
                .filter(|p| (start..=end).contains(&p.year))
                .copied()
                .collect(),
        }
    }

    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?.value;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| {
            (lo.min(p.value), hi.max(p.value))
        }))
    }

    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let first = self.points.first()?.year;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| {
            (lo.min(p.year), hi.max(p.year))
        }))
    }
}

/// Pull the year and value columns out of parsed rows. Rows where either
/// cell does not start with a number are dropped.
pub fn extract_series(rows: &[Row], columns: &ColumnConfig) -> Series {
    let mut points = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let year = row.get(&columns.year).and_then(parse_int_prefix);
        let value = row.get(&columns.value).and_then(parse_float_prefix);
        match (year, value) {
            (Some(year), Some(value)) => points.push(Point { year, value }),
            _ => trace!(row = idx, "skipping row without year/value"),
        }
    }
    debug!(kept = points.len(), total = rows.len(), "extracted series");
    Series { points }
}
