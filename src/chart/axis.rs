// src/chart/axis.rs
use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use std::ops::Range;

/// A linear f64 axis whose labelled points are fixed up front instead of
/// being picked by plotters.
#[derive(Debug, Clone, PartialEq)]
pub struct TickedAxis {
    lo: f64,
    hi: f64,
    ticks: Vec<f64>,
}

impl TickedAxis {
    /// Ticks outside `[lo, hi]` are dropped.
    pub fn new(lo: f64, hi: f64, ticks: impl IntoIterator<Item = f64>) -> Self {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let ticks = ticks
            .into_iter()
            .filter(|t| *t >= lo && *t <= hi)
            .collect();
        Self { lo, hi, ticks }
    }

    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }
}

impl Ranged for TickedAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        let span = self.hi - self.lo;
        let pixels = limit.1 - limit.0;
        if pixels == 0 || span <= 0.0 {
            return limit.0;
        }
        let frac = (*value - self.lo) / span;
        limit.0 + (pixels as f64 * frac + 1e-3).floor() as i32
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        // light mesh lines would only duplicate the bold ones
        if hint.weight().allow_light_points() {
            return Vec::new();
        }
        let max = hint.max_num_points();
        if max == 0 {
            return Vec::new();
        }
        if self.ticks.len() <= max {
            return self.ticks.clone();
        }
        let stride = self.ticks.len().div_ceil(max);
        self.ticks.iter().step_by(stride).copied().collect()
    }

    fn range(&self) -> Range<f64> {
        self.lo..self.hi
    }
}
