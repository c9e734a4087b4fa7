// src/chart/ticks.rs

/// Upper bound on generated ticks, so a tiny step can't run away.
const MAX_TICKS: usize = 1_000;

/// Evenly spaced ticks covering `[low, high]`, starting from the largest
/// multiple of `step` at or below `low`. Sorted and free of duplicates.
pub fn uniform_ticks(low: f64, high: f64, step: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0 && low.is_finite() && high.is_finite()) {
        return Vec::new();
    }
    let first = (low / step).floor();
    let slack = step * 1e-9;
    let mut ticks = Vec::new();
    for k in 0..MAX_TICKS {
        let t = (first + k as f64) * step;
        if t > high + slack {
            break;
        }
        ticks.push(t);
    }
    ticks.sort_by(f64::total_cmp);
    ticks.dedup();
    ticks
}

/// Every `step`-th year from `start` through `end`. When the span would need
/// more than `MAX_TICKS` ticks the step is widened to fit.
pub fn year_ticks(start: i32, end: i32, step: i32) -> Vec<i32> {
    if step <= 0 || start > end {
        return Vec::new();
    }
    let (start, end) = (i64::from(start), i64::from(end));
    let step = fit_step(end - start, i64::from(step));
    (0..MAX_TICKS as i64)
        .map(|k| start + k * step)
        .take_while(|y| *y <= end)
        .filter_map(|y| i32::try_from(y).ok())
        .collect()
}

/// Year ticks aligned to multiples of `step`, covering `[first, last]`.
/// Alignment is clamped to the `i32` range.
pub fn aligned_year_ticks(first: i32, last: i32, step: i32) -> Vec<i32> {
    if step <= 0 || first > last {
        return Vec::new();
    }
    let wide = i64::from(step);
    let start = i64::from(first).div_euclid(wide) * wide;
    let end = (i64::from(last) + wide - 1).div_euclid(wide) * wide;
    year_ticks(clamp_i32(start), clamp_i32(end), step)
}

fn fit_step(span: i64, step: i64) -> i64 {
    let max_steps = MAX_TICKS as i64 - 1;
    if span / step > max_steps {
        (span + max_steps - 1) / max_steps
    } else {
        step
    }
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Plot range with 10% headroom: `[min * 0.9, max * 1.1]` for positive data.
///
/// Bounds are padded away from the data on both sides, so non-positive values
/// stay inside the range; an all-zero series gets a unit band.
pub fn padded_range(min: f64, max: f64) -> (f64, f64) {
    let lo = if min >= 0.0 { min * 0.9 } else { min * 1.1 };
    let hi = if max >= 0.0 { max * 1.1 } else { max * 0.9 };
    if lo == hi {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi)
    }
}
